//! The transfer configuration table
//!
//! Built once at startup, validated, then handed to executors by reference.
//! Lookups never fall back or infer routes: an absent channel entry means
//! no direct IBC path is known.

use super::types::{AssetId, ChannelEndpoint, Network, TokenConfig};
use crate::error::{TransferError, TransferResult};
use std::collections::HashMap;
use url::Url;

/// Immutable lookup table of networks, tokens, and IBC channels
#[derive(Debug, Clone)]
pub struct Config {
    networks: HashMap<String, Network>,
    /// Keyed by (network id, token symbol)
    tokens: HashMap<(String, String), TokenConfig>,
    /// Keyed by ordered (source, destination) pair
    channels: HashMap<(String, String), ChannelEndpoint>,
}

impl Config {
    /// Build an empty table (used by tests to fabricate configurations)
    pub fn empty() -> Self {
        Self {
            networks: HashMap::new(),
            tokens: HashMap::new(),
            channels: HashMap::new(),
        }
    }

    pub fn with_network(mut self, id: &str, network: Network) -> Self {
        self.networks.insert(id.to_string(), network);
        self
    }

    pub fn with_token(mut self, network: &str, symbol: &str, token: TokenConfig) -> Self {
        self.tokens
            .insert((network.to_string(), symbol.to_string()), token);
        self
    }

    pub fn with_channel(mut self, source: &str, dest: &str, channel: ChannelEndpoint) -> Self {
        self.channels
            .insert((source.to_string(), dest.to_string()), channel);
        self
    }

    /// The testnet table this binary ships with
    pub fn testnet() -> Self {
        Self::empty()
            // EVM networks
            .with_network(
                "sepolia",
                Network::Evm {
                    rpc_url: "https://rpc.sepolia.org".to_string(),
                    chain_id: 11155111,
                    explorer: Some("https://sepolia.etherscan.io".to_string()),
                },
            )
            .with_network(
                "holesky",
                Network::Evm {
                    rpc_url: "https://rpc.holesky.eth.gateway.fm".to_string(),
                    chain_id: 17000,
                    explorer: Some("https://holesky.etherscan.io".to_string()),
                },
            )
            .with_network(
                "corn",
                Network::Evm {
                    rpc_url: "https://testnet-rpc.usecorn.com".to_string(),
                    chain_id: 21000001,
                    explorer: Some("https://testnet.cornscan.io".to_string()),
                },
            )
            // Sei testnet publishes no explorer for its EVM endpoint
            .with_network(
                "sei",
                Network::Evm {
                    rpc_url: "https://evm-rpc-testnet.sei-apis.com".to_string(),
                    chain_id: 1328,
                    explorer: None,
                },
            )
            // Cosmos networks
            .with_network(
                "xion",
                Network::Cosmos {
                    rpc_url: "https://rpc.xion-testnet-1.burnt.com".to_string(),
                    chain_id: "xion-testnet-1".to_string(),
                    prefix: "xion".to_string(),
                    explorer: Some("https://testnet.xion.explorers.guru".to_string()),
                },
            )
            .with_network(
                "babylon",
                Network::Cosmos {
                    rpc_url: "https://rpc.testnet.babylonchain.io".to_string(),
                    chain_id: "bbn-test-3".to_string(),
                    prefix: "bbn".to_string(),
                    explorer: Some("https://babylon.explorers.guru".to_string()),
                },
            )
            // Tokens
            .with_token("sepolia", "ETH", TokenConfig::new(AssetId::Native, 18))
            .with_token(
                "sepolia",
                "USDC",
                TokenConfig::new(
                    AssetId::Contract("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7a98".to_string()),
                    6,
                ),
            )
            .with_token(
                "sepolia",
                "LINK",
                TokenConfig::new(
                    AssetId::Contract("0x779877A7B0D9E8603169DdbD7836e478b4624789".to_string()),
                    18,
                ),
            )
            .with_token("holesky", "ETH", TokenConfig::new(AssetId::Native, 18))
            .with_token(
                "holesky",
                "USDC",
                TokenConfig::new(
                    AssetId::Contract("0x6f3165f749a464522f578286a455a7bee745d315".to_string()),
                    6,
                ),
            )
            .with_token(
                "holesky",
                "LINK",
                TokenConfig::new(
                    AssetId::Contract("0x795c6b48cb270d740263f338d735a22d365f5a89".to_string()),
                    18,
                ),
            )
            .with_token("corn", "BTCN", TokenConfig::new(AssetId::Native, 18))
            .with_token("sei", "SEI", TokenConfig::new(AssetId::Native, 18))
            .with_token(
                "xion",
                "XION",
                TokenConfig::new(AssetId::Denom("uxion".to_string()), 6),
            )
            .with_token(
                "xion",
                "USDC_NOBLE",
                TokenConfig::named(
                    AssetId::Denom(
                        "ibc/D4A66B678A12398553F6352E2B256522B7A494F3B8468724D3D4760A88B4E4A2"
                            .to_string(),
                    ),
                    6,
                    "Noble USDC",
                ),
            )
            .with_token(
                "babylon",
                "BBN",
                TokenConfig::named(AssetId::Denom("ubbn".to_string()), 6, "Baby Token"),
            )
            // IBC channels: each direction has its own entry
            .with_channel("xion", "babylon", ChannelEndpoint::new("transfer", "channel-15"))
            .with_channel("babylon", "xion", ChannelEndpoint::new("transfer", "channel-16"))
    }

    /// Look up a network by identifier
    pub fn network(&self, id: &str) -> TransferResult<&Network> {
        self.networks
            .get(id)
            .ok_or_else(|| TransferError::config(format!("Unknown network '{}'", id)))
    }

    /// Look up a token under a network
    pub fn token(&self, network: &str, symbol: &str) -> TransferResult<&TokenConfig> {
        self.tokens
            .get(&(network.to_string(), symbol.to_string()))
            .ok_or_else(|| {
                TransferError::config(format!(
                    "Network '{}' has no token entry for '{}'",
                    network, symbol
                ))
            })
    }

    /// Look up the IBC channel for an ordered pair; absent means no direct
    /// route is known (multi-hop is never inferred)
    pub fn channel(&self, source: &str, dest: &str) -> Option<&ChannelEndpoint> {
        self.channels
            .get(&(source.to_string(), dest.to_string()))
    }

    /// Endpoint hygiene: every RPC URL must parse and use https
    /// (plain http tolerated for localhost-style hosts only).
    /// Returns one message per violation.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for (id, network) in &self.networks {
            let raw = network.rpc_url();
            match Url::parse(raw) {
                Ok(parsed) => match parsed.scheme() {
                    "https" => {}
                    "http" => {
                        let host = parsed.host_str().unwrap_or("");
                        let local = host == "localhost"
                            || host == "127.0.0.1"
                            || host.starts_with("192.168.");
                        if !local {
                            problems.push(format!(
                                "network '{}': https required for remote endpoint {}",
                                id, raw
                            ));
                        }
                    }
                    other => {
                        problems.push(format!(
                            "network '{}': unsupported URL scheme '{}'",
                            id, other
                        ));
                    }
                },
                Err(e) => {
                    problems.push(format!("network '{}': invalid RPC URL: {}", id, e));
                }
            }
        }

        for ((network, symbol), token) in &self.tokens {
            if !self.networks.contains_key(network) {
                problems.push(format!(
                    "token '{}' configured under unknown network '{}'",
                    symbol, network
                ));
                continue;
            }
            // Asset kind must fit the network kind
            if let Ok(net) = self.network(network) {
                match (&token.asset, net.is_evm()) {
                    (AssetId::Denom(_), true) => problems.push(format!(
                        "token '{}' on '{}': denom asset on an EVM network",
                        symbol, network
                    )),
                    (AssetId::Contract(_), false) => problems.push(format!(
                        "token '{}' on '{}': contract asset on a Cosmos network",
                        symbol, network
                    )),
                    _ => {}
                }
            }
        }

        for (source, dest) in self.channels.keys() {
            for end in [source, dest] {
                if !self.networks.contains_key(end) {
                    problems.push(format!("channel references unknown network '{}'", end));
                }
            }
        }

        problems
    }
}
