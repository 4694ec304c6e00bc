use rust_microservices::config::Config;
use rust_microservices::server;
use rust_microservices::services::auth;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load(auth::DEFAULT_PORT)?;
    server::run(auth::SERVICE_NAME, cfg, auth::router())
}
