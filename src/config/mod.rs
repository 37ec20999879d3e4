// Configuration module entry point
// Loads layered configuration: built-in defaults, optional file, environment

mod types;

use std::net::SocketAddr;

pub use types::{Config, FilesConfig, HttpConfig, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from "config.toml" (optional) and `STATIKD_*`
    /// environment variables, over built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("STATIKD"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("files.root", "webroot")?
            .set_default("files.index", "index.html")?
            .set_default("http.max_request_line", 8192)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
