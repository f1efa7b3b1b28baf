use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidHost(String),
    DataFileError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(msg) => write!(f, "Invalid Port: {}", msg),
            ConfigError::InvalidHost(msg) => write!(f, "Invalid Host: {}", msg),
            ConfigError::DataFileError(msg) => write!(f, "Data File Error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub data_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads `RECOMMENDER_HOST`, `RECOMMENDER_PORT` and `RECOMMENDER_DATA_FILE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("RECOMMENDER_HOST").ok(),
            env::var("RECOMMENDER_PORT").ok(),
            env::var("RECOMMENDER_DATA_FILE").ok(),
        )
    }

    pub fn from_vars(
        host: Option<String>,
        port: Option<String>,
        data_file: Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip = host
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidHost(format!("'{}': {}", host, e)))?;

        let port = match port {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort(format!("'{}': {}", p, e)))?,
            None => DEFAULT_PORT,
        };

        let data_file = data_file.filter(|f| !f.is_empty()).map(PathBuf::from);

        Ok(ServerConfig {
            addr: SocketAddr::new(ip, port),
            data_file,
        })
    }
}
