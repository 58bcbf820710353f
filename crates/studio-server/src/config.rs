//! Server Configuration

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        source: AddrParseError,
    },
}

/// Host settings, read from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// Directory holding the built WASM bundle and `index.html`
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw
            .parse()
            .map_err(|source| ConfigError::BindAddr { value: raw.clone(), source })?;

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self { bind_addr, static_dir })
    }
}
