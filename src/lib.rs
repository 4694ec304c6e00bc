//! Shared request-handling library for the auth, payment and products
//! services. Each service binary builds a route table from `services` and
//! hands it to `server::run`.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod payload;
pub mod server;
pub mod services;
