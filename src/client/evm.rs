//! EVM transfer client
//!
//! Accepts a fully-resolved transfer request (base-unit amount, asset
//! identifier, destination chain, receiver), signs a legacy EIP-155
//! transaction, and submits it over JSON-RPC.

use crate::config::Network;
use crate::error::{TransferError, TransferResult};
use crate::log_debug;
use ethers_core::types::transaction::eip2718::TypedTransaction;
use ethers_core::types::{Address, TransactionRequest, U256};
use ethers_signers::{LocalWallet, Signer};
use std::str::FromStr;
use std::time::Duration;

const MODULE: &str = "client.evm";

/// Asset identifier the transfer endpoint understands as "the chain's
/// native asset"
pub const NATIVE_ASSET: &str = "eth";

/// Gas limit for a plain value transfer
const NATIVE_TRANSFER_GAS: u64 = 21_000;

/// Gas limit for an ERC-20 transfer call
const TOKEN_TRANSFER_GAS: u64 = 100_000;

/// A resolved transfer order, ready for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTransfer {
    /// Base-unit amount
    pub amount: u128,
    /// `NATIVE_ASSET` or an ERC-20 contract address
    pub asset: String,
    /// Chain identifier of the destination network
    pub destination_chain_id: String,
    pub receiver: String,
}

/// Successful submission result
#[derive(Debug, Clone)]
pub struct EvmReceipt {
    pub tx_hash: String,
}

/// The transfer-submission collaborator for EVM networks
pub trait EvmTransferClient {
    fn transfer_asset(
        &self,
        request: &AssetTransfer,
    ) -> impl std::future::Future<Output = TransferResult<EvmReceipt>> + Send;
}

/// JSON-RPC backed client bound to one source network and one signer
#[derive(Debug)]
pub struct HttpEvmClient {
    rpc_url: String,
    chain_id: u64,
    wallet: LocalWallet,
    http: reqwest::Client,
}

impl HttpEvmClient {
    pub fn new(network: &Network, private_key: &str) -> TransferResult<Self> {
        let (rpc_url, chain_id) = match network {
            Network::Evm {
                rpc_url, chain_id, ..
            } => (rpc_url.clone(), *chain_id),
            Network::Cosmos { .. } => {
                return Err(TransferError::config(
                    "EVM transfer client requires an EVM network",
                ))
            }
        };

        let wallet = LocalWallet::from_str(private_key)
            .map_err(|e| TransferError::signing_failed(format!("Invalid EVM private key: {}", e)))?
            .with_chain_id(chain_id);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            rpc_url,
            chain_id,
            wallet,
            http,
        })
    }

    async fn rpc_call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> TransferResult<serde_json::Value> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
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

        if let Some(error) = response.get("error") {
            return Err(
                TransferError::client(format!("RPC {} failed", method))
                    .with_details(error.to_string()),
            );
        }

        response
            .get("result")
            .cloned()
            .ok_or_else(|| TransferError::client(format!("RPC {} returned no result", method)))
    }

    async fn fetch_nonce(&self, address: &str) -> TransferResult<U256> {
        let result = self
            .rpc_call("eth_getTransactionCount", serde_json::json!([address, "latest"]))
            .await?;
        parse_hex_quantity(&result, "nonce")
    }

    async fn fetch_gas_price(&self) -> TransferResult<U256> {
        let result = self.rpc_call("eth_gasPrice", serde_json::json!([])).await?;
        parse_hex_quantity(&result, "gas price")
    }
}

impl EvmTransferClient for HttpEvmClient {
    async fn transfer_asset(&self, request: &AssetTransfer) -> TransferResult<EvmReceipt> {
        let receiver = Address::from_str(&request.receiver).map_err(|e| {
            TransferError::validation(format!("Invalid receiver '{}': {}", request.receiver, e))
        })?;
        let amount = U256::from(request.amount);

        // Destination routing is the transfer endpoint's concern; the
        // submission itself always lands on the bound source chain.
        log_debug!(
            MODULE,
            "Submitting transfer",
            chain_id = self.chain_id,
            destination_chain_id = request.destination_chain_id,
            asset = request.asset,
        );

        let (to, value, data, gas) = if request.asset == NATIVE_ASSET {
            (receiver, amount, Vec::new(), NATIVE_TRANSFER_GAS)
        } else {
            let contract = Address::from_str(&request.asset).map_err(|e| {
                TransferError::config(format!("Invalid token contract '{}': {}", request.asset, e))
            })?;
            (
                contract,
                U256::zero(),
                erc20_transfer_calldata(receiver, amount),
                TOKEN_TRANSFER_GAS,
            )
        };

        let sender = format!("{:#x}", self.wallet.address());
        let nonce = self.fetch_nonce(&sender).await?;
        let gas_price = self.fetch_gas_price().await?;

        let tx = TransactionRequest::new()
            .to(to)
            .value(value)
            .gas(gas)
            .gas_price(gas_price)
            .chain_id(self.chain_id)
            .nonce(nonce)
            .data(data);

        let typed_tx: TypedTransaction = tx.into();
        let signature = self
            .wallet
            .sign_transaction(&typed_tx)
            .await
            .map_err(|e| TransferError::signing_failed(e.to_string()))?;
        let raw_tx = typed_tx.rlp_signed(&signature);

        let result = self
            .rpc_call(
                "eth_sendRawTransaction",
                serde_json::json!([format!("0x{}", hex::encode(&raw_tx))]),
            )
            .await?;

        let tx_hash = result
            .as_str()
            .ok_or_else(|| TransferError::client("eth_sendRawTransaction returned a non-string"))?
            .to_string();

        Ok(EvmReceipt { tx_hash })
    }
}

fn parse_hex_quantity(value: &serde_json::Value, what: &str) -> TransferResult<U256> {
    let text = value
        .as_str()
        .ok_or_else(|| TransferError::client(format!("Expected hex string for {}", what)))?;
    U256::from_str_radix(text.trim_start_matches("0x"), 16)
        .map_err(|e| TransferError::client(format!("Invalid {} '{}': {}", what, text, e)))
}

/// `transfer(address,uint256)` calldata
fn erc20_transfer_calldata(receiver: Address, amount: U256) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 64);
    data.extend_from_slice(&[0xa9, 0x05, 0x9c, 0xbb]);
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(receiver.as_bytes());
    let mut amount_bytes = [0u8; 32];
    amount.to_big_endian(&mut amount_bytes);
    data.extend_from_slice(&amount_bytes);
    data
}
