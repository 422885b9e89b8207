// Configuration module entry point
// Loads layered configuration and exposes the runtime server state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::ServerState;
pub use types::{AssetsConfig, Config, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from the default `config.*` file next to the binary
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Later sources override earlier ones: defaults, then the optional
    /// config file, then `SPASERVE_*` environment variables.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SPASERVE"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("assets.root_dir", "dist")?
            .set_default("assets.index_file", "index.html")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
