//! Environment-driven server configuration.
//!
//! A variable that is unset or blank falls back to its default. A `PORT`
//! that is present but not a valid port number is an error.

use std::num::ParseIntError;

/// Environment variable holding the SQLite file path.
pub const DATABASE_FILE_VAR: &str = "DATABASE_FILE";
/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

pub const DEFAULT_DATABASE_FILE: &str = "./knowledge_graph.db";
pub const DEFAULT_PORT: u16 = 3001;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_file: String,
    /// TCP port to listen on (all interfaces).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = ServerConfig::default();
        if let Some(path) = non_blank(DATABASE_FILE_VAR) {
            config.database_file = path;
        }
        if let Some(raw) = non_blank(PORT_VAR) {
            config.port = raw.parse().map_err(|source| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw.clone(),
                source,
            })?;
        }
        Ok(config)
    }

    /// Socket address string to bind, on all interfaces.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
