use rust_microservices::config::Config;
use rust_microservices::server;
use rust_microservices::services::payment;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load(payment::DEFAULT_PORT)?;
    server::run(payment::SERVICE_NAME, cfg, payment::router())
}
