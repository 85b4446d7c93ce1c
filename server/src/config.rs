//! Server configuration parsed from environment variables.
//!
//! Values are read through a lookup function so parsing can be tested
//! without touching the process environment.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
/// Sepolia.
pub const DEFAULT_CHAIN_ID: u64 = 11_155_111;
pub const DEFAULT_API_KEY_ENV: &str = "WALLET_API_KEY";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required env var {var}")]
    Missing { var: String },

    /// A variable is set but its value is invalid.
    #[error("config parse failed: {0}")]
    Parse(String),
}

impl crate::error::ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "E_CONFIG_MISSING",
            Self::Parse(_) => "E_CONFIG_PARSE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl RelayTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

/// Upstream wallet provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub rpc_url: String,
    pub api_key: Option<String>,
    pub chain_id: u64,
    pub policy_id: Option<String>,
    pub timeouts: RelayTimeouts,
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Required:
    /// - `WALLET_RPC_URL`
    ///
    /// Optional:
    /// - `WALLET_API_KEY_ENV`: names the env var holding the API key
    ///   (default `WALLET_API_KEY`; a missing default key means no auth header)
    /// - `WALLET_CHAIN_ID`: decimal or `0x` hex, default Sepolia
    /// - `WALLET_POLICY_ID`: gas sponsorship policy
    /// - `WALLET_REQUEST_TIMEOUT_SECS`: default 30
    /// - `WALLET_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a required value is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build relay config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`RelayConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let rpc_url = non_empty(lookup("WALLET_RPC_URL"))
            .ok_or_else(|| ConfigError::Missing { var: "WALLET_RPC_URL".into() })?
            .trim_end_matches('/')
            .to_string();

        let api_key = match non_empty(lookup("WALLET_API_KEY_ENV")) {
            Some(key_var) => Some(non_empty(lookup(&key_var)).ok_or(ConfigError::Missing { var: key_var })?),
            None => non_empty(lookup(DEFAULT_API_KEY_ENV)),
        };

        let chain_id = parse_chain_id(lookup("WALLET_CHAIN_ID").as_deref())?;
        let policy_id = non_empty(lookup("WALLET_POLICY_ID"));
        let timeouts = RelayTimeouts {
            request_secs: parse_u64_or(&lookup, "WALLET_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64_or(&lookup, "WALLET_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { rpc_url, api_key, chain_id, policy_id, timeouts })
    }
}

/// Listening port from `PORT`, default 3000.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if `PORT` is not a valid port number.
pub fn port_from_env() -> Result<u16, ConfigError> {
    parse_port(std::env::var("PORT").ok().as_deref())
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::Parse(format!("invalid PORT: {value}"))),
    }
}

pub(crate) fn parse_chain_id(raw: Option<&str>) -> Result<u64, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_CHAIN_ID);
    };
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    };
    parsed.map_err(|_| ConfigError::Parse(format!("invalid WALLET_CHAIN_ID: {value}")))
}

fn parse_u64_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
