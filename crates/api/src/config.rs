//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use ledger_observability::LogFormat;
use thiserror::Error;

pub const ADDR_VAR: &str = "LEDGER_API_ADDR";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        #[source]
        source: ledger_observability::ParseLogFormatError,
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

    /// Build the config from an arbitrary variable source.
    ///
    /// Unset variables fall back to defaults; set-but-invalid ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(ADDR_VAR) {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: raw,
            })?,
            None => default_addr(),
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|source| ConfigError::InvalidLogFormat {
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

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_addr(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3333))
}
