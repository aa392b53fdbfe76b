//! Client configuration.
//!
//! Settings come from `JOBPORTAL_*` variables. The binary layers its
//! command-line flags over the environment and hands the result to
//! [`PortalConfig::from_lookup`].

use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TOKEN_FILE: &str = ".jobportal/storage.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the portal backend.
    pub api_url: String,
    /// JSON file holding the bearer token between runs.
    pub token_file: PathBuf,
    pub request_timeout: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl PortalConfig {
    /// Builds the config from any variable source. Unset variables take
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("JOBPORTAL_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if api_url.trim().is_empty() {
            return Err(ConfigError::Empty {
                name: "JOBPORTAL_API_URL",
            });
        }

        let token_file = lookup("JOBPORTAL_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE));

        let request_timeout = match lookup("JOBPORTAL_REQUEST_TIMEOUT") {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(raw) => Duration::from_secs(parse_timeout("JOBPORTAL_REQUEST_TIMEOUT", &raw)?),
        };

        Ok(Self {
            api_url,
            token_file,
            request_timeout,
        })
    }
}

fn parse_timeout(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout {
            name,
            value: raw.to_string(),
        }),
    }
}
