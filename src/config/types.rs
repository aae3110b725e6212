//! Configuration data structures
//!
//! Networks are a tagged sum over the two supported kinds so that the
//! fields valid for one kind cannot leak into the other: the bech32 prefix
//! exists only for Cosmos chains, the numeric chain id only for EVM chains.

use serde::{Deserialize, Serialize};

/// Which execution model a network belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Evm,
    Cosmos,
}

impl NetworkKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            NetworkKind::Evm => "EVM",
            NetworkKind::Cosmos => "Cosmos",
        }
    }
}

/// Connection parameters for a single network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Network {
    Evm {
        rpc_url: String,
        chain_id: u64,
        /// Explorer base URL; not every testnet publishes one
        explorer: Option<String>,
    },
    Cosmos {
        rpc_url: String,
        chain_id: String,
        /// Bech32 address prefix (e.g. "xion")
        prefix: String,
        explorer: Option<String>,
    },
}

impl Network {
    pub fn kind(&self) -> NetworkKind {
        match self {
            Network::Evm { .. } => NetworkKind::Evm,
            Network::Cosmos { .. } => NetworkKind::Cosmos,
        }
    }

    pub fn rpc_url(&self) -> &str {
        match self {
            Network::Evm { rpc_url, .. } | Network::Cosmos { rpc_url, .. } => rpc_url,
        }
    }

    pub fn explorer(&self) -> Option<&str> {
        match self {
            Network::Evm { explorer, .. } | Network::Cosmos { explorer, .. } => {
                explorer.as_deref()
            }
        }
    }

    /// Explorer link for a transaction hash, when the network has an explorer
    pub fn explorer_tx_url(&self, tx_hash: &str) -> Option<String> {
        self.explorer().map(|base| format!("{}/tx/{}", base, tx_hash))
    }

    /// Chain identifier as the wire-level string form
    pub fn chain_id_string(&self) -> String {
        match self {
            Network::Evm { chain_id, .. } => chain_id.to_string(),
            Network::Cosmos { chain_id, .. } => chain_id.clone(),
        }
    }

    pub fn is_evm(&self) -> bool {
        matches!(self, Network::Evm { .. })
    }

    pub fn is_cosmos(&self) -> bool {
        matches!(self, Network::Cosmos { .. })
    }
}

/// On-chain identity of a token on a particular network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetId {
    /// The chain's own native asset
    Native,
    /// ERC-20 style contract address
    Contract(String),
    /// Cosmos bank denomination (native or ibc/... voucher)
    Denom(String),
}

/// Per-network token entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    pub asset: AssetId,
    /// Decimal precision of the asset on chain; base-unit conversion
    /// is wrong if this disagrees with the chain
    pub decimals: u8,
    pub display_name: Option<String>,
}

impl TokenConfig {
    pub fn new(asset: AssetId, decimals: u8) -> Self {
        Self {
            asset,
            decimals,
            display_name: None,
        }
    }

    pub fn named(asset: AssetId, decimals: u8, name: &str) -> Self {
        Self {
            asset,
            decimals,
            display_name: Some(name.to_string()),
        }
    }

    /// Human label: the display name when configured, the symbol otherwise
    pub fn label<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.display_name.as_deref().unwrap_or(symbol)
    }
}

/// One direction of a configured IBC route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelEndpoint {
    /// Source port id (usually "transfer")
    pub port_id: String,
    /// Source channel id (e.g. "channel-15")
    pub channel_id: String,
}

impl ChannelEndpoint {
    pub fn new(port_id: &str, channel_id: &str) -> Self {
        Self {
            port_id: port_id.to_string(),
            channel_id: channel_id.to_string(),
        }
    }
}
