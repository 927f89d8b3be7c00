//! Constants for the Mainnet relay.

/// Name of the network.
pub const NAME: &str = "Mainnet";

/// Chain ID for Ethereum Mainnet.
pub const CHAIN_ID: u64 = 1;

/// Default Flashbots relay endpoint for Mainnet.
pub const RELAY_URL: &str = "https://relay.flashbots.net";
