use rust_microservices::config::Config;
use rust_microservices::server;
use rust_microservices::services::products;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load(products::DEFAULT_PORT)?;
    server::run(products::SERVICE_NAME, cfg, products::router())
}
