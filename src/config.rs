//! Client configuration.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Settings for [`ServerQuery`](crate::ServerQuery).
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```toml
/// timeout_ms = 2000
/// max_challenge_retries = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Limit on one request/reply round trip. A query answered with
    /// challenges makes up to `max_challenge_retries + 1` round trips.
    pub timeout_ms: u64,
    /// Fresh challenges to answer before giving up on a query.
    pub max_challenge_retries: usize,
    /// Receive buffer size; longer datagrams are cut short.
    pub recv_buffer_size: usize,
    /// Port used by the CLI when none is given.
    pub default_port: u16,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 4000,
            max_challenge_retries: 10,
            recv_buffer_size: 65_535,
            default_port: 27015,
        }
    }
}

impl QueryConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
