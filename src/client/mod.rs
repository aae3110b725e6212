//! Transfer submission clients
//!
//! The executors talk to the outside world only through the traits in this
//! module; production implementations sign and submit over JSON-RPC, and
//! tests substitute fabricated clients.

pub mod cosmos;
pub mod evm;

pub use cosmos::{BroadcastResponse, Coin, CosmosSigningClient, MsgTransfer, RpcCosmosClient};
pub use evm::{AssetTransfer, EvmReceipt, EvmTransferClient, HttpEvmClient, NATIVE_ASSET};
