use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Interface to bind, default 127.0.0.1
    pub host: String,

    /// Listening port, default 3000
    pub port: u16,

    /// Path of the JSON data file, default `db.json`
    pub db_path: PathBuf,

    /// Directory for rolling log files, default `logs`
    pub log_dir: PathBuf,

    /// Maximum payload size for all requests (in bytes)
    /// Default: 10MB (10 * 1024 * 1024)
    pub max_payload_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            db_path: PathBuf::from("db.json"),
            log_dir: PathBuf::from("logs"),
            max_payload_size: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - HOST, PORT: listening address (default 127.0.0.1:3000)
    /// - DB_PATH: data file location (default db.json)
    /// - LOG_DIR: log directory (default logs)
    /// - MAX_PAYLOAD_SIZE: Maximum request payload size in bytes (default: 10485760 = 10MB)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let defaults = Config::default();

        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value,
            })?,
            Err(_) => defaults.port,
        };

        // Parse MAX_PAYLOAD_SIZE with default fallback
        let max_payload_size = env::var("MAX_PAYLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_payload_size);

        Ok(Config {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            db_path: env::var("DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path),
            log_dir: env::var("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            max_payload_size,
        })
    }

    /// Command-line flags take precedence over the environment
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(db_path) = &cli.db_path {
            self.db_path = db_path.clone();
        }
        if let Some(log_dir) = &cli.log_dir {
            self.log_dir = log_dir.clone();
        }
        self
    }
}
