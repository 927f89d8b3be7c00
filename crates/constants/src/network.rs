use crate::{goerli, mainnet};

/// The list of networks with a known relay, as a string.
const KNOWN_NETWORKS: &str = "1 (Mainnet), 5 (Goerli)";

/// Error type for resolving a relay from a chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedNetwork {
    /// The chain id has no known relay endpoint.
    #[error("no known relay for chain id {0}. supported networks: {KNOWN_NETWORKS}")]
    UnknownChainId(u64),
}

/// Networks with a known default relay endpoint.
///
/// Resolution happens before any network I/O: an unsupported chain id is
/// rejected at client construction time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Network {
    /// Ethereum Mainnet.
    Mainnet,
    /// Goerli testnet.
    Goerli,
}

impl Network {
    /// Get the chain id for this network.
    pub const fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => mainnet::CHAIN_ID,
            Self::Goerli => goerli::CHAIN_ID,
        }
    }

    /// Get the default relay endpoint for this network.
    pub const fn relay_url(&self) -> &'static str {
        match self {
            Self::Mainnet => mainnet::RELAY_URL,
            Self::Goerli => goerli::RELAY_URL,
        }
    }

    /// Get the human-readable name of this network.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => mainnet::NAME,
            Self::Goerli => goerli::NAME,
        }
    }
}

impl TryFrom<u64> for Network {
    type Error = UnsupportedNetwork;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        match chain_id {
            mainnet::CHAIN_ID => Ok(Self::Mainnet),
            goerli::CHAIN_ID => Ok(Self::Goerli),
            other => Err(UnsupportedNetwork::UnknownChainId(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_networks() {
        assert_eq!(
            Network::try_from(1).unwrap().relay_url(),
            "https://relay.flashbots.net"
        );
        assert_eq!(
            Network::try_from(5).unwrap().relay_url(),
            "https://relay-goerli.flashbots.net"
        );
    }

    #[test]
    fn rejects_unknown_chain_id() {
        assert_eq!(
            Network::try_from(9999),
            Err(UnsupportedNetwork::UnknownChainId(9999))
        );
    }
}
