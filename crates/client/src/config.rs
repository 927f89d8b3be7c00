//! Environment-backed client configuration.

use alloy::signers::local::PrivateKeySigner;
use reqwest::Url;
use std::env;

/// Environment variable holding the chain id.
pub const CHAIN_ID_VAR: &str = "FLASHBOT_CHAIN_ID";
/// Environment variable holding the hex-encoded request-signing key.
pub const PRIVATE_KEY_VAR: &str = "FLASHBOT_PRIVATE_KEY";
/// Environment variable overriding the relay URL.
pub const RELAY_URL_VAR: &str = "FLASHBOT_RELAY_URL";

/// Error type for loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Missing or non-unicode environment variable.
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing a numeric environment variable.
    #[error("failed to parse environment variable: {0}")]
    Parse(#[from] std::num::ParseIntError),
    /// Error parsing the signing key.
    #[error("failed to parse signing key: {0}")]
    Key(#[from] alloy::signers::local::LocalSignerError),
    /// Error parsing the relay URL override.
    #[error("failed to parse relay URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}

/// Load a variable from the environment.
fn load_string(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::missing(key))
}

/// Load a variable from the environment.
fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Load a variable from the environment.
fn load_u64(key: &str) -> Result<u64, ConfigError> {
    let val = load_string(key)?;
    val.parse::<u64>().map_err(Into::into)
}

/// Configuration for a [`Flashbot`] client.
///
/// The relay URL is optional: when absent the client resolves it from the
/// chain id. The signing key is optional at load time so that read-only
/// tooling can construct a config; calls that reach the relay still require
/// it.
///
/// [`Flashbot`]: crate::client::Flashbot
#[derive(Debug, Clone)]
pub struct FlashbotConfig {
    /// Chain id used for relay URL resolution.
    pub chain_id: u64,
    /// Request-signing key, if configured.
    pub signer: Option<PrivateKeySigner>,
    /// Relay URL override, if configured.
    pub relay_url: Option<Url>,
}

impl FlashbotConfig {
    /// Create a config from explicit parts.
    pub const fn new(
        chain_id: u64,
        signer: Option<PrivateKeySigner>,
        relay_url: Option<Url>,
    ) -> Self {
        Self { chain_id, signer, relay_url }
    }

    /// Load the configuration from the environment.
    ///
    /// Reads [`CHAIN_ID_VAR`] (required), [`PRIVATE_KEY_VAR`] and
    /// [`RELAY_URL_VAR`] (both optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        let chain_id = load_u64(CHAIN_ID_VAR)?;
        let signer = load_string_opt(PRIVATE_KEY_VAR)
            .map(|key| key.parse::<PrivateKeySigner>())
            .transpose()?;
        let relay_url =
            load_string_opt(RELAY_URL_VAR).map(|url| Url::parse(&url)).transpose()?;
        Ok(Self { chain_id, signer, relay_url })
    }
}
