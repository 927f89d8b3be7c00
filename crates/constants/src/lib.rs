//! Flashbots relay constants.
//!
//! This crate contains the relay endpoints for the networks the Flashbots
//! relay serves, along with the protocol constants shared by the client
//! crates.

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
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chains;
pub use chains::goerli;
pub use chains::mainnet;

mod network;
pub use network::{Network, UnsupportedNetwork};

/// Placeholder block number sent with `eth_callBundle` simulations.
///
/// The relay simulates against its current head state regardless of the
/// literal value; this constant is kept as-is for wire compatibility with
/// existing relays rather than because the value itself is meaningful.
pub const SIMULATION_BLOCK_NUMBER: u64 = 100_000_000_000_000;

/// JSON-RPC protocol version sent in every request envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC request id. The client issues one request per HTTP call, so the
/// id never needs to vary.
pub const JSONRPC_ID: u64 = 1;
