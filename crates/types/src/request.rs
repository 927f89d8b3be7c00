//! Request envelope and per-method parameter shapes.

use alloy::{eips::BlockNumberOrTag, primitives::U64};
use flashbot_constants::{JSONRPC_ID, JSONRPC_VERSION};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The JSON-RPC methods exposed by the relay.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleMethod {
    /// Submit a bundle for inclusion in a target block.
    #[serde(rename = "eth_sendBundle")]
    SendBundle,
    /// Simulate a bundle against the relay's head state.
    #[serde(rename = "eth_callBundle")]
    CallBundle,
    /// Fetch relay-side stats for a previously submitted bundle.
    #[serde(rename = "flashbots_getBundleStats")]
    GetBundleStats,
}

/// Parameters for `eth_sendBundle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SendBundleParams {
    /// Raw signed transactions, hex-encoded, in execution order.
    pub txs: Vec<String>,
    /// Target block number for inclusion.
    pub block_number: U64,
}

/// Parameters for `eth_callBundle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CallBundleParams {
    /// Raw signed transactions, hex-encoded, in execution order.
    pub txs: Vec<String>,
    /// Block number the simulation is anchored to. Relays simulate against
    /// head state regardless of the literal value.
    pub block_number: U64,
    /// State selector for the simulation.
    pub state_block_number: BlockNumberOrTag,
}

/// Parameters for `flashbots_getBundleStats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BundleStatsParams {
    /// Bundle hash returned by a prior `eth_sendBundle`.
    pub bundle_hash: String,
    /// Block number the bundle targeted.
    pub block_number: U64,
}

/// Parameters for one relay call.
///
/// Each method has its own parameter shape; the variants serialize untagged
/// to exactly the object the relay expects for that method. The per-variant
/// `deny_unknown_fields` keeps deserialization unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BundleParams {
    /// `eth_callBundle` parameters.
    Call(CallBundleParams),
    /// `eth_sendBundle` parameters.
    Send(SendBundleParams),
    /// `flashbots_getBundleStats` parameters.
    Stats(BundleStatsParams),
}

/// A JSON-RPC request envelope for one relay call.
///
/// Requests are constructed fresh per call; there is no shared template
/// value, so no field can leak between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleRequest {
    /// JSON-RPC protocol version, always `"2.0"`.
    pub jsonrpc: Cow<'static, str>,
    /// Request id. One request per HTTP call, so this is always `1`.
    pub id: u64,
    /// The relay method invoked.
    pub method: BundleMethod,
    /// Method parameters. The relay expects exactly one element.
    pub params: Vec<BundleParams>,
}

impl BundleRequest {
    fn new(method: BundleMethod, params: BundleParams) -> Self {
        Self {
            jsonrpc: Cow::Borrowed(JSONRPC_VERSION),
            id: JSONRPC_ID,
            method,
            params: vec![params],
        }
    }

    /// Build an `eth_sendBundle` request targeting `block_number`.
    pub fn send_bundle<I, S>(txs: I, block_number: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            BundleMethod::SendBundle,
            BundleParams::Send(SendBundleParams {
                txs: txs.into_iter().map(Into::into).collect(),
                block_number: U64::from(block_number),
            }),
        )
    }

    /// Build an `eth_callBundle` request simulating against `latest` state.
    pub fn call_bundle<I, S>(txs: I, block_number: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            BundleMethod::CallBundle,
            BundleParams::Call(CallBundleParams {
                txs: txs.into_iter().map(Into::into).collect(),
                block_number: U64::from(block_number),
                state_block_number: BlockNumberOrTag::Latest,
            }),
        )
    }

    /// Build a `flashbots_getBundleStats` request for a prior submission.
    pub fn bundle_stats(bundle_hash: impl Into<String>, block_number: u64) -> Self {
        Self::new(
            BundleMethod::GetBundleStats,
            BundleParams::Stats(BundleStatsParams {
                bundle_hash: bundle_hash.into(),
                block_number: U64::from(block_number),
            }),
        )
    }

    /// The method this request invokes.
    pub const fn method(&self) -> BundleMethod {
        self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_bundle_wire_shape() {
        let req = BundleRequest::send_bundle(["0xdead", "0xbeef"], 100);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "eth_sendBundle",
                "params": [{
                    "txs": ["0xdead", "0xbeef"],
                    "blockNumber": "0x64",
                }],
            })
        );

        // No stateBlockNumber or bundleHash noise on the send shape.
        let params = value["params"][0].as_object().unwrap();
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn call_bundle_wire_shape() {
        let req = BundleRequest::call_bundle(["0xdead"], 100_000_000_000_000);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["method"], "eth_callBundle");
        assert_eq!(value["params"][0]["blockNumber"], "0x5af3107a4000");
        assert_eq!(value["params"][0]["stateBlockNumber"], "latest");
    }

    #[test]
    fn bundle_stats_wire_shape() {
        let req = BundleRequest::bundle_stats("0xabc", 100);
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["method"], "flashbots_getBundleStats");
        let params = value["params"][0].as_object().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params["bundleHash"], "0xabc");
        assert_eq!(params["blockNumber"], "0x64");
    }

    #[test]
    fn requests_round_trip() {
        for req in [
            BundleRequest::send_bundle(["0x01", "0x02"], 42),
            BundleRequest::call_bundle(["0x01"], 100_000_000_000_000),
            BundleRequest::bundle_stats("0xabc", 42),
        ] {
            let encoded = serde_json::to_vec(&req).unwrap();
            let decoded: BundleRequest = serde_json::from_slice(&encoded).unwrap();
            assert_eq!(decoded, req);
        }
    }
}
