//! Constants for the Goerli testnet relay.

/// Name of the network.
pub const NAME: &str = "Goerli";

/// Chain ID for the Goerli testnet.
pub const CHAIN_ID: u64 = 5;

/// Default Flashbots relay endpoint for Goerli.
pub const RELAY_URL: &str = "https://relay-goerli.flashbots.net";
