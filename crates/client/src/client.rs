use crate::{
    classify::{classify_bundle, classify_stats},
    config::FlashbotConfig,
    error::{FlashbotError, Result},
    signer::flashbots_signature,
    transport::{HttpTransport, RelayTransport},
};
use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use flashbot_constants::{Network, SIMULATION_BLOCK_NUMBER};
use flashbot_types::{BundleRequest, BundleResponse, BundleStats, RelayResponse};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{instrument, warn};

/// Flashbots bundle client.
///
/// Submits, simulates, and inspects transaction bundles against a single
/// relay. The signing key and resolved relay URL are fixed at construction;
/// every call is otherwise independent, so a shared instance is safe for
/// concurrent use. No call is retried internally — the fixed transport
/// timeout is a hard deadline and callers own any retry policy.
#[derive(Debug, Clone)]
pub struct Flashbot<T = HttpTransport> {
    /// The relay endpoint, resolved once at construction.
    url: Url,
    /// The request-signing key. Required for every relay call.
    signer: Option<PrivateKeySigner>,
    /// The transport used to reach the relay.
    transport: T,
}

impl Flashbot<HttpTransport> {
    /// Create a client for the given chain.
    ///
    /// When `relay_url` is `None` the endpoint is resolved from the known
    /// relay table; an unsupported chain id fails here, before any network
    /// I/O. An explicit URL allows custom relays (e.g. ethermine).
    pub fn new(
        chain_id: u64,
        signer: Option<PrivateKeySigner>,
        relay_url: Option<Url>,
    ) -> Result<Self> {
        Self::new_with_transport(chain_id, signer, relay_url, HttpTransport::new()?)
    }

    /// Create a client from a loaded [`FlashbotConfig`].
    pub fn from_config(config: FlashbotConfig) -> Result<Self> {
        Self::new(config.chain_id, config.signer, config.relay_url)
    }
}

impl<T: RelayTransport> Flashbot<T> {
    /// Create a client over a specific transport.
    pub fn new_with_transport(
        chain_id: u64,
        signer: Option<PrivateKeySigner>,
        relay_url: Option<Url>,
        transport: T,
    ) -> Result<Self> {
        let url = match relay_url {
            Some(url) => url,
            None => Url::parse(Network::try_from(chain_id)?.relay_url())?,
        };
        Ok(Self { url, signer, transport })
    }

    /// The relay endpoint this client talks to.
    pub const fn relay_url(&self) -> &Url {
        &self.url
    }

    /// The address of the request-signing key, if one is configured.
    pub fn signer_address(&self) -> Option<Address> {
        self.signer.as_ref().map(|s| s.address())
    }

    /// Submit a bundle of raw signed transactions for inclusion in
    /// `block_number`.
    #[instrument(skip_all)]
    pub async fn send_bundle<I, S>(&self, txs: I, block_number: u64) -> Result<BundleResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = BundleRequest::send_bundle(txs, block_number);
        let response = self.round_trip(&request).await?;
        classify_bundle(response, block_number)
    }

    /// Simulate a bundle against the relay's head state.
    ///
    /// Asks "what would happen if these transactions were mined now": the
    /// request carries the fixed placeholder block number and a `latest`
    /// state selector, not a specific future block.
    #[instrument(skip_all)]
    pub async fn call_bundle<I, S>(&self, txs: I) -> Result<BundleResponse>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = BundleRequest::call_bundle(txs, SIMULATION_BLOCK_NUMBER);
        let response = self.round_trip(&request).await?;
        classify_bundle(response, SIMULATION_BLOCK_NUMBER)
    }

    /// Fetch relay-side stats for a previously submitted bundle.
    ///
    /// `bundle_hash` is the identifier returned by a prior successful
    /// [`send_bundle`](Self::send_bundle).
    #[instrument(skip_all)]
    pub async fn bundle_stats(
        &self,
        bundle_hash: impl Into<String>,
        block_number: u64,
    ) -> Result<BundleStats> {
        let request = BundleRequest::bundle_stats(bundle_hash, block_number);
        let response = self.round_trip(&request).await?;
        classify_stats(response)
    }

    /// Encode, sign, send, and decode one request.
    async fn round_trip<R: DeserializeOwned + Default>(
        &self,
        request: &BundleRequest,
    ) -> Result<RelayResponse<R>> {
        let payload = serde_json::to_vec(request)?;
        let signer = self.signer.as_ref().ok_or(FlashbotError::MissingKey)?;
        let signature = flashbots_signature(signer, &payload)?;

        let body = self.transport.send(&self.url, &payload, &signature).await?.into_success()?;

        serde_json::from_slice(&body)
            .inspect_err(|e| warn!(%e, "failed to decode relay response"))
            .map_err(Into::into)
    }
}
