//! Decoded-response classification.
//!
//! State-free functions applied after decoding. A response can be transport
//! successful and JSON-RPC successful yet still a failure, when a simulated
//! transaction errored or reverted; these functions turn all three layers
//! into one typed outcome.

use crate::error::{FlashbotError, Result};
use flashbot_types::{BundleResponse, BundleStats, RelayResponse};

/// Classify a decoded `eth_sendBundle`/`eth_callBundle` response.
///
/// Decision order:
/// 1. a nonzero top-level error code fails the whole call;
/// 2. a non-empty `error` on the first transaction result is a bundle
///    execution failure (the relay reports bundle-level failure through the
///    first entry; later entries are not inspected);
/// 3. otherwise the decoded result is returned as-is.
pub fn classify_bundle(
    response: RelayResponse<BundleResponse>,
    block_number: u64,
) -> Result<BundleResponse> {
    let relay = response.error.unwrap_or_default();
    if relay.is_error() {
        return Err(FlashbotError::Relay { code: relay.code, message: relay.message });
    }

    let result = response.result.unwrap_or_default();
    if let Some(error) = result.results.first().and_then(|tx| tx.execution_error()) {
        let first = &result.results[0];
        return Err(FlashbotError::BundleExecution {
            error: error.to_owned(),
            revert: first.revert.clone().filter(|r| !r.is_empty()),
            gas_used: first.gas_used,
            code: relay.code,
            message: relay.message,
            block_number,
        });
    }

    Ok(result)
}

/// Classify a decoded `flashbots_getBundleStats` response. Stats responses
/// carry no per-transaction sequence, so only the top-level error gates
/// success.
pub fn classify_stats(response: RelayResponse<BundleStats>) -> Result<BundleStats> {
    if let Some(error) = response.relay_error() {
        return Err(FlashbotError::Relay { code: error.code, message: error.message.clone() });
    }
    Ok(response.result.unwrap_or_default())
}
