//! Environment-driven server configuration.

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("HOST must not be empty")]
    EmptyHost,
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Read `HOST` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(h) if h.trim().is_empty() => return Err(ConfigError::EmptyHost),
            Some(h) => h.trim().to_string(),
            None => {
                tracing::info!("HOST not set; using {DEFAULT_HOST}");
                DEFAULT_HOST.to_string()
            }
        };

        let port = match lookup("PORT") {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(p.clone()))?,
            None => {
                tracing::info!("PORT not set; using {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Ok(Self { host, port })
    }

    /// Address tuple accepted by `TcpListener::bind` (hostnames are resolved there).
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
