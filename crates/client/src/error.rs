use flashbot_constants::UnsupportedNetwork;

/// Result type for [`Flashbot`] operations.
///
/// [`Flashbot`]: crate::client::Flashbot
pub type Result<T, E = FlashbotError> = std::result::Result<T, E>;

/// Errors returned by the [`Flashbot`] client.
///
/// Configuration errors surface before any network I/O. [`Relay`] and
/// [`BundleExecution`] are distinct on purpose: the former is the relay
/// rejecting the call, the latter is a successful call whose simulated
/// transactions failed on-chain.
///
/// [`Flashbot`]: crate::client::Flashbot
/// [`Relay`]: FlashbotError::Relay
/// [`BundleExecution`]: FlashbotError::BundleExecution
#[derive(Debug, thiserror::Error)]
pub enum FlashbotError {
    /// No request-signing key was configured. The relay requires every
    /// request to be signed; there is no unauthenticated mode.
    #[error("no request-signing key configured")]
    MissingKey,

    /// The chain id has no known relay endpoint and no override was given.
    #[error(transparent)]
    UnsupportedNetwork(#[from] UnsupportedNetwork),

    /// Invalid configuration loaded from the environment.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The relay URL could not be parsed.
    #[error("invalid relay URL: {0}")]
    Url(#[from] url::ParseError),

    /// The request could not be encoded, or the response could not be
    /// decoded. Indicates a protocol mismatch with the relay.
    #[error("malformed relay payload: {0}")]
    Codec(#[from] serde_json::Error),

    /// Signing the request payload failed.
    #[error("failed to sign relay payload: {0}")]
    Signer(#[from] alloy::signers::Error),

    /// A network-level failure: connection, timeout, or body read.
    #[error("error contacting relay: {0}")]
    Transport(#[from] reqwest::Error),

    /// The relay answered with a non-2xx status.
    #[error("relay returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, best-effort. Empty if the body read failed.
        body: String,
    },

    /// The relay returned a JSON-RPC error with a nonzero code.
    #[error("relay error {code}: {message}")]
    Relay {
        /// JSON-RPC error code, verbatim from the relay.
        code: i64,
        /// Error message, verbatim from the relay.
        message: String,
    },

    /// The call succeeded but a transaction in the bundle errored or
    /// reverted during execution.
    #[error("bundle execution failed at block {block_number}: {error} (gas used: {gas_used})")]
    BundleExecution {
        /// Execution error of the failing transaction.
        error: String,
        /// Revert reason, if the transaction reverted with one.
        revert: Option<String>,
        /// Gas consumed before the failure.
        gas_used: u64,
        /// Relay error code accompanying the result, possibly zero.
        code: i64,
        /// Relay error message accompanying the result, possibly empty.
        message: String,
        /// Block number the bundle was submitted or simulated against.
        block_number: u64,
    },
}

impl FlashbotError {
    /// True if the failure happened before any bytes reached the relay.
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingKey | Self::UnsupportedNetwork(_) | Self::Config(_) | Self::Url(_)
        )
    }
}
