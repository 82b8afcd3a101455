use std::env;
use std::path::PathBuf;

use crate::importers::csv_importer::DEFAULT_FILE_PREFIX;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub file_prefix: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults
    ///
    /// `DATA_DIR` defaults to the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = match env::var("SERVER_PORT") {
            Ok(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "SERVER_PORT",
                value,
            })?,
            Err(_) => 8080,
        };

        Ok(Config {
            data_dir: PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string())),
            file_prefix: env::var("FILE_PREFIX")
                .unwrap_or_else(|_| DEFAULT_FILE_PREFIX.to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
        };
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidValue {
            var: "SERVER_PORT",
            value: "eighty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for SERVER_PORT: eighty");
    }
}
