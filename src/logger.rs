use crate::config::Config;
use chrono::Local;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(service: &str, addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("{service} service started successfully");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[{}] [Connection] Accepted from: {peer_addr}", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!(
        "[{}] [Error] Failed to serve connection: {err:?}",
        timestamp()
    );
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[{}] [Request] {method} {uri} {version:?}", timestamp());
}

pub fn log_response(status: u16, message: &str) {
    println!("[{}] [Response] {status} - {message}", timestamp());
}

pub fn log_payload(payload: &impl std::fmt::Debug) {
    println!("[{}] [Payload] Received: {payload:?}", timestamp());
}

pub fn log_warning(message: &str) {
    eprintln!("[{}] [Warn] {message}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [Error] {message}", timestamp());
}
