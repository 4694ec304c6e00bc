// Configuration module
// Explicit startup configuration passed into server construction

use serde::Deserialize;
use std::net::SocketAddr;

/// Environment file read at startup, matching the deployment layout.
pub const ENV_FILE: &str = ".env.example";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

impl Config {
    /// Load configuration for a service with the given default port.
    ///
    /// The environment file is loaded first and its absence aborts startup,
    /// the only process-fatal error in these services. A `PORT` variable,
    /// whether from the file or the process environment, overrides
    /// `server.port`.
    pub fn load(default_port: u16) -> Result<Self, config::ConfigError> {
        dotenvy::from_filename(ENV_FILE).map_err(|e| {
            config::ConfigError::Message(format!("Error loading {ENV_FILE}: {e}"))
        })?;

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(default_port))?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
