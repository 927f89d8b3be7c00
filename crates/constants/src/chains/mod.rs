/// Mainnet relay constants.
pub mod mainnet;

/// Goerli testnet relay constants.
pub mod goerli;
