//! Response envelopes and result types returned by the relay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A relay-level JSON-RPC error.
///
/// The relay overloads `code == 0` as "no error"; [`RelayError::is_error`]
/// encapsulates that convention so callers never compare codes directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayError {
    /// JSON-RPC error code. Zero means no error.
    pub code: i64,
    /// Human-readable message from the relay.
    pub message: String,
}

impl RelayError {
    /// True if this value actually signals a failure.
    pub const fn is_error(&self) -> bool {
        self.code != 0
    }
}

/// Coinbase payment metadata shared by bundle- and transaction-level results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BundleMetadata {
    /// Total balance change of the coinbase address.
    pub coinbase_diff: String,
    /// ETH transferred directly to the coinbase address.
    pub eth_sent_to_coinbase: String,
    /// Gas fees paid.
    pub gas_fees: String,
}

/// Per-transaction simulation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResult {
    /// Coinbase payment metadata for this transaction.
    #[serde(flatten)]
    pub metadata: BundleMetadata,
    /// Sender address.
    #[serde(default)]
    pub from_address: String,
    /// Effective gas price.
    #[serde(default)]
    pub gas_price: String,
    /// Transaction hash.
    #[serde(default)]
    pub tx_hash: String,
    /// Execution error, if the transaction failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Revert reason, if the transaction reverted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revert: Option<String>,
    /// Gas consumed by the transaction.
    #[serde(default)]
    pub gas_used: u64,
}

impl TxResult {
    /// The execution error for this transaction, if it carries a non-empty
    /// one. Relays emit both absent and empty-string error fields for
    /// successful transactions.
    pub fn execution_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// Relay-side result of an `eth_sendBundle` or `eth_callBundle` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleResponse {
    /// Effective gas price of the bundle as a whole.
    #[serde(default)]
    pub bundle_gas_price: String,
    /// Hash identifying the bundle; used for later stats lookups.
    #[serde(default)]
    pub bundle_hash: String,
    /// Coinbase payment metadata for the bundle as a whole.
    #[serde(flatten)]
    pub metadata: BundleMetadata,
    /// Per-transaction results, in submission order.
    #[serde(default)]
    pub results: Vec<TxResult>,
}

/// Relay-side stats for a previously submitted bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BundleStats {
    /// Whether the relay simulated the bundle.
    pub is_simulated: bool,
    /// Whether the relay treated the bundle as high priority.
    pub is_high_priority: bool,
    /// When the relay simulated the bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_at: Option<DateTime<Utc>>,
    /// When the bundle was submitted to the relay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    /// When the relay forwarded the bundle to block producers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to_miners_at: Option<DateTime<Utc>>,
}

/// The JSON-RPC response envelope returned by the relay.
///
/// Both halves are optional on the wire: a success carries `result`, a
/// failure carries `error`, and some relays send an explicit zero-code
/// `error` alongside a `result`. Classification therefore has to look at
/// both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse<T> {
    /// Relay-level error, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RelayError>,
    /// The call result, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> Default for RelayResponse<T> {
    fn default() -> Self {
        Self { error: None, result: None }
    }
}

impl<T> RelayResponse<T> {
    /// The relay error, if it carries a nonzero code.
    pub fn relay_error(&self) -> Option<&RelayError> {
        self.error.as_ref().filter(|e| e.is_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_send_response() {
        let body = r#"{"result":{"bundleHash":"0xabc","results":[{},{}]}}"#;
        let resp: RelayResponse<BundleResponse> = serde_json::from_str(body).unwrap();

        assert!(resp.relay_error().is_none());
        let result = resp.result.unwrap();
        assert_eq!(result.bundle_hash, "0xabc");
        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[0], TxResult::default());
    }

    #[test]
    fn tolerates_unknown_and_absent_fields() {
        let body = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "bundleGasPrice": "43000001459",
                "bundleHash": "0x2228f5d8954ce31dc1601a8ba264dbd401bf1428388ce88238932815c5d6f23f",
                "coinbaseDiff": "2717471092204423",
                "results": [{
                    "fromAddress": "0x02A727155aeF8609c9f7F2179b2a1f560B39F5A0",
                    "gasUsed": 63197,
                    "toAddress": "0xdAC17F958D2ee523a2206206994597C13D831ec7",
                    "txHash": "0x669b4704a7d993a946cdd6e2f95233f308ce0c4649d2e04944e8299efcaa098a",
                    "value": "0x"
                }],
                "stateBlockNumber": 5221585
            }
        }"#;
        let resp: RelayResponse<BundleResponse> = serde_json::from_str(body).unwrap();

        let result = resp.result.unwrap();
        assert_eq!(result.bundle_gas_price, "43000001459");
        let tx = &result.results[0];
        assert_eq!(tx.gas_used, 63197);
        assert!(tx.execution_error().is_none());
        // Absent string fields default to empty, not null.
        assert_eq!(tx.gas_price, "");
    }

    #[test]
    fn empty_string_error_is_not_an_execution_error() {
        let tx: TxResult = serde_json::from_str(r#"{"error":""}"#).unwrap();
        assert!(tx.execution_error().is_none());

        let tx: TxResult = serde_json::from_str(r#"{"error":"insufficient funds"}"#).unwrap();
        assert_eq!(tx.execution_error(), Some("insufficient funds"));
    }

    #[test]
    fn zero_code_error_is_not_an_error() {
        let resp: RelayResponse<BundleResponse> =
            serde_json::from_str(r#"{"error":{"code":0,"message":""}}"#).unwrap();
        assert!(resp.relay_error().is_none());

        let resp: RelayResponse<BundleResponse> =
            serde_json::from_str(r#"{"error":{"code":-32000,"message":"nonce too low"}}"#)
                .unwrap();
        assert_eq!(resp.relay_error().unwrap().message, "nonce too low");
    }

    #[test]
    fn decodes_bundle_stats() {
        let body = r#"{
            "result": {
                "isSimulated": true,
                "isHighPriority": true,
                "simulatedAt": "2021-08-06T21:36:06.317Z",
                "submittedAt": "2021-08-06T21:36:06.250Z",
                "sentToMinersAt": "2021-08-06T21:36:06.343Z"
            }
        }"#;
        let resp: RelayResponse<BundleStats> = serde_json::from_str(body).unwrap();

        let stats = resp.result.unwrap();
        assert!(stats.is_simulated);
        assert!(stats.is_high_priority);
        assert!(stats.simulated_at.unwrap() > stats.submitted_at.unwrap());
        assert!(stats.sent_to_miners_at.is_some());
    }

    #[test]
    fn stats_absent_fields_default() {
        let resp: RelayResponse<BundleStats> =
            serde_json::from_str(r#"{"result":{}}"#).unwrap();
        let stats = resp.result.unwrap();
        assert!(!stats.is_simulated);
        assert!(stats.simulated_at.is_none());
    }
}
