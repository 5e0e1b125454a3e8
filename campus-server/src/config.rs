//! Server configuration.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Environment variable for the listen address.
pub const ENV_ADDR: &str = "CAMPUS_ADDR";
/// Environment variable for an optional catalog JSON file.
pub const ENV_CATALOG: &str = "CAMPUS_CATALOG";
/// Environment variable for the static assets directory.
pub const ENV_STATIC_DIR: &str = "CAMPUS_STATIC_DIR";

/// Errors in the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CAMPUS_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Configuration for the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Catalog file to load. The embedded catalog is used when unset.
    pub catalog_path: Option<PathBuf>,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a lookup function, falling back to defaults.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ENV_ADDR) {
            config.addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?;
        }

        config.catalog_path = get(ENV_CATALOG).map(PathBuf::from);

        if let Some(dir) = get(ENV_STATIC_DIR) {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
