//! Server configuration from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const HOST_ENV: &str = "PROMPTDECK_HOST";
pub const PORT_ENV: &str = "PROMPTDECK_PORT";
pub const DB_ENV: &str = "PROMPTDECK_DB";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3005;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON file mirroring the collection; in-memory only when unset
    pub db_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_ENV).filter(|h| !h.is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_ENV).filter(|p| !p.is_empty()) {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid {}: {}", PORT_ENV, port))?;
        }
        config.db_path = lookup(DB_ENV).filter(|p| !p.is_empty()).map(PathBuf::from);

        Ok(config)
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
