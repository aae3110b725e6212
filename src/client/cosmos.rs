//! Cosmos signing client for IBC token transfers
//!
//! Builds the ICS-20 MsgTransfer, signs the canonical sign-doc with the
//! account key, and submits through Tendermint RPC `broadcast_tx_sync`.
//! The chain's result code is reported verbatim; interpreting a non-zero
//! code is the caller's business.

use crate::config::Network;
use crate::error::{TransferError, TransferResult};
use crate::wallet::cosmos::{derive_keypair, validate_cosmos_address};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bitcoin::hashes::{sha256, Hash};
use bitcoin::secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gas limit for an IBC transfer
const IBC_TRANSFER_GAS: u64 = 200_000;

/// Token amount attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    /// Base-unit amount, decimal string as the wire expects
    pub amount: String,
}

/// ICS-20 token transfer message
#[derive(Debug, Clone, Serialize)]
pub struct MsgTransfer {
    pub source_port: String,
    pub source_channel: String,
    pub token: Coin,
    pub sender: String,
    pub receiver: String,
    pub timeout_height: TimeoutHeight,
    /// Nanoseconds since the Unix epoch
    pub timeout_timestamp: u64,
}

/// Height-based timeout; zeroed when only the timestamp is used
#[derive(Debug, Clone, Serialize)]
pub struct TimeoutHeight {
    pub revision_number: u64,
    pub revision_height: u64,
}

impl TimeoutHeight {
    pub fn zero() -> Self {
        Self {
            revision_number: 0,
            revision_height: 0,
        }
    }
}

/// What the chain reported for a submitted transaction
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastResponse {
    pub code: u32,
    pub raw_log: String,
    pub transaction_hash: String,
}

impl BroadcastResponse {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// The transfer-submission collaborator for Cosmos networks
pub trait CosmosSigningClient {
    #[allow(clippy::too_many_arguments)]
    fn send_ibc_tokens(
        &self,
        sender: &str,
        receiver: &str,
        token: Coin,
        source_port: &str,
        source_channel: &str,
        timeout_timestamp_ns: u64,
    ) -> impl std::future::Future<Output = TransferResult<BroadcastResponse>> + Send;
}

/// Tendermint RPC backed client bound to one source chain and one signer
#[derive(Debug)]
pub struct RpcCosmosClient {
    rpc_url: String,
    chain_id: String,
    prefix: String,
    signing_key: SecretKey,
    public_key: PublicKey,
    http: reqwest::Client,
}

impl RpcCosmosClient {
    pub fn new(network: &Network, mnemonic: &str) -> TransferResult<Self> {
        let (rpc_url, chain_id, prefix) = match network {
            Network::Cosmos {
                rpc_url,
                chain_id,
                prefix,
                ..
            } => (rpc_url.clone(), chain_id.clone(), prefix.clone()),
            Network::Evm { .. } => {
                return Err(TransferError::config(
                    "Cosmos signing client requires a Cosmos network",
                ))
            }
        };

        let (signing_key, public_key) = derive_keypair(mnemonic)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            rpc_url,
            chain_id,
            prefix,
            signing_key,
            public_key,
            http,
        })
    }

    /// Sign the canonical sign-doc for a message set and wrap it into the
    /// broadcastable envelope
    fn signed_envelope(&self, msg: &MsgTransfer) -> TransferResult<serde_json::Value> {
        let msg_value = serde_json::to_value(msg)?;
        let fee = serde_json::json!({
            "amount": [],
            "gas": IBC_TRANSFER_GAS.to_string(),
        });

        let sign_doc = serde_json::json!({
            "chain_id": self.chain_id,
            "fee": fee,
            "memo": "",
            "msgs": [msg_value],
        });

        let digest = sha256::Hash::hash(&serde_json::to_vec(&sign_doc)?).to_byte_array();
        let secp = Secp256k1::new();
        let signature = secp.sign_ecdsa(&Message::from_digest(digest), &self.signing_key);

        Ok(serde_json::json!({
            "msg": [serde_json::to_value(msg)?],
            "fee": fee,
            "memo": "",
            "signatures": [{
                "pub_key": {
                    "type": "tendermint/PubKeySecp256k1",
                    "value": BASE64.encode(self.public_key.serialize()),
                },
                "signature": BASE64.encode(signature.serialize_compact()),
            }],
        }))
    }
}

impl CosmosSigningClient for RpcCosmosClient {
    async fn send_ibc_tokens(
        &self,
        sender: &str,
        receiver: &str,
        token: Coin,
        source_port: &str,
        source_channel: &str,
        timeout_timestamp_ns: u64,
    ) -> TransferResult<BroadcastResponse> {
        validate_cosmos_address(sender, &self.prefix)?;

        let msg = MsgTransfer {
            source_port: source_port.to_string(),
            source_channel: source_channel.to_string(),
            token,
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            timeout_height: TimeoutHeight::zero(),
            timeout_timestamp: timeout_timestamp_ns,
        };

        let envelope = self.signed_envelope(&msg)?;
        let tx_bytes = serde_json::to_vec(&envelope)?;

        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "broadcast_tx_sync",
            "params": { "tx": BASE64.encode(&tx_bytes) },
            "id": 1
        });

        let response: serde_json::Value = self
            .http
            .post(&self.rpc_url)
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;

        parse_broadcast_response(&response)
    }
}

/// Map a Tendermint `broadcast_tx_sync` response to the chain-reported
/// result fields
fn parse_broadcast_response(response: &serde_json::Value) -> TransferResult<BroadcastResponse> {
    if let Some(error) = response.get("error") {
        return Err(TransferError::client("broadcast_tx_sync failed")
            .with_details(error.to_string()));
    }

    let result = response
        .get("result")
        .ok_or_else(|| TransferError::client("broadcast_tx_sync returned no result"))?;

    let code = result.get("code").and_then(|c| c.as_u64()).unwrap_or(0) as u32;
    let raw_log = result
        .get("log")
        .and_then(|l| l.as_str())
        .unwrap_or_default()
        .to_string();
    let transaction_hash = result
        .get("hash")
        .and_then(|h| h.as_str())
        .ok_or_else(|| TransferError::client("broadcast_tx_sync result has no hash"))?
        .to_string();

    Ok(BroadcastResponse {
        code,
        raw_log,
        transaction_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn xion() -> Network {
        Network::Cosmos {
            rpc_url: "https://rpc.xion-testnet-1.burnt.com".to_string(),
            chain_id: "xion-testnet-1".to_string(),
            prefix: "xion".to_string(),
            explorer: None,
        }
    }

    #[test]
    fn test_client_requires_cosmos_network() {
        let evm = Network::Evm {
            rpc_url: "https://rpc.sepolia.org".to_string(),
            chain_id: 11155111,
            explorer: None,
        };
        let err = RpcCosmosClient::new(&evm, MNEMONIC).unwrap_err();
        assert_eq!(err.code, ErrorCode::Config);
    }

    #[test]
    fn test_signed_envelope_shape() {
        let client = RpcCosmosClient::new(&xion(), MNEMONIC).unwrap();
        let msg = MsgTransfer {
            source_port: "transfer".to_string(),
            source_channel: "channel-15".to_string(),
            token: Coin {
                denom: "uxion".to_string(),
                amount: "10000".to_string(),
            },
            sender: "xion1hsk6jryyqjfhp5dhc55tc9jtckygx0eph6dd02".to_string(),
            receiver: "bbn1hsk6jryyqjfhp5dhc55tc9jtckygx0eph6dd02".to_string(),
            timeout_height: TimeoutHeight::zero(),
            timeout_timestamp: 1_700_000_600_000_000_000,
        };

        let envelope = client.signed_envelope(&msg).unwrap();

        assert_eq!(envelope["msg"][0]["source_channel"], "channel-15");
        assert_eq!(envelope["msg"][0]["token"]["denom"], "uxion");

        // 33-byte compressed pubkey, 64-byte compact signature
        let pub_key = BASE64
            .decode(envelope["signatures"][0]["pub_key"]["value"].as_str().unwrap())
            .unwrap();
        assert_eq!(pub_key.len(), 33);
        let signature = BASE64
            .decode(envelope["signatures"][0]["signature"].as_str().unwrap())
            .unwrap();
        assert_eq!(signature.len(), 64);
    }

    #[test]
    fn test_parse_broadcast_success() {
        let response = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "code": 0,
                "log": "",
                "hash": "A1B2C3D4"
            }
        });
        let parsed = parse_broadcast_response(&response).unwrap();
        assert!(parsed.is_success());
        assert_eq!(parsed.transaction_hash, "A1B2C3D4");
    }

    #[test]
    fn test_parse_broadcast_chain_rejection() {
        let response = serde_json::json!({
            "result": {
                "code": 5,
                "log": "insufficient funds",
                "hash": "A1B2C3D4"
            }
        });
        let parsed = parse_broadcast_response(&response).unwrap();
        assert!(!parsed.is_success());
        assert_eq!(parsed.code, 5);
        assert_eq!(parsed.raw_log, "insufficient funds");
    }

    #[test]
    fn test_parse_broadcast_rpc_error() {
        let response = serde_json::json!({
            "error": { "code": -32603, "message": "tx already exists" }
        });
        let err = parse_broadcast_response(&response).unwrap_err();
        assert_eq!(err.code, ErrorCode::Client);
        assert!(err.details.unwrap().contains("tx already exists"));
    }
}
