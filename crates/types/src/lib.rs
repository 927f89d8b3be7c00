//! Wire types for the Flashbots bundle JSON-RPC protocol.
//!
//! Contains the request envelope and per-method parameter shapes sent to the
//! relay, and the response envelopes returned by it. Requests serialize
//! exactly to the wire shape the relay dispatches on (absent fields are
//! omitted, never emitted as `null` or empty strings); responses decode
//! tolerantly, ignoring unknown fields and defaulting absent ones.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod request;
pub use request::{
    BundleMethod, BundleParams, BundleRequest, BundleStatsParams, CallBundleParams,
    SendBundleParams,
};

mod response;
pub use response::{
    BundleMetadata, BundleResponse, BundleStats, RelayError, RelayResponse, TxResult,
};
