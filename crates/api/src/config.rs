//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

use itemforge_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "ITEMFORGE_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "ITEMFORGE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address `{value}`: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        source: itemforge_observability::ParseLogFormatError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_raw.clone(),
                source,
            })?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_VAR,
                source,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}
