//! Flashbots bundle client.
//!
//! Submits signed transaction bundles to a Flashbots-style relay over
//! JSON-RPC-over-HTTP, simulates them, and fetches relay-side stats for
//! prior submissions. Every request is authenticated with the
//! `X-Flashbots-Signature` header; every failure is classified and returned
//! as a [`FlashbotError`] value, never logged away or retried internally.

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

/// The [`Flashbot`] client.
pub mod client;
pub use client::Flashbot;

mod classify;
pub use classify::{classify_bundle, classify_stats};

mod config;
pub use config::{ConfigError, FlashbotConfig};

mod error;
pub use error::{FlashbotError, Result};

mod signer;
pub use signer::flashbots_signature;

mod transport;
pub use transport::{HttpTransport, RawResponse, RelayTransport, REQUEST_TIMEOUT};
