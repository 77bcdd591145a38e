//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the network fixture.
pub const NETWORK_VAR: &str = "COMMUTE_NETWORK";

/// Environment variable naming the listen address.
pub const ADDR_VAR: &str = "COMMUTE_ADDR";

const DEFAULT_NETWORK: &str = "data/network.json";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error from reading server configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {message}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        message: String,
    },
}

/// Where to load the network from and where to listen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub network_path: PathBuf,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `COMMUTE_NETWORK` and `COMMUTE_ADDR`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let network_path = lookup(NETWORK_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_NETWORK.to_string())
            .into();

        let addr = lookup(ADDR_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr.clone(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { network_path, addr })
    }
}
