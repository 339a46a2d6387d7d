//! Server configuration from environment

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default host address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port number
pub const DEFAULT_PORT: u16 = 8000;

/// Environment variable holding the generation API credential
///
/// The HTTP variant refuses to start without it; the template fallback
/// backend does not use it, but a real generation backend does.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Log level for tracing
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables with fallback to defaults
    ///
    /// Environment variables:
    /// - `EDUSERVE_HOST` - Server host
    /// - `EDUSERVE_PORT` - Server port
    /// - `EDUSERVE_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("EDUSERVE_HOST") {
            config.host = host;
        }

        if let Ok(port_str) = std::env::var("EDUSERVE_PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                config.port = port;
            }
        }

        if let Ok(log_level) = std::env::var("EDUSERVE_LOG_LEVEL") {
            config.log_level = log_level;
        }

        config
    }

    /// Get the socket address for the server
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {}", e))
    }

    /// Get the full server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be zero".to_string());
        }

        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.log_level
                ));
            }
        }

        Ok(())
    }

    /// Check that the generation API credential is present and non-empty
    ///
    /// Called once at startup so a missing credential fails fast instead of
    /// surfacing on the first request.
    pub fn require_api_key() -> Result<(), String> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(format!(
                "{} not found in environment variables",
                API_KEY_VAR
            )),
        }
    }
}
