//! Union cross-chain transfer runner
//!
//! A command-style tool that issues one cross-chain asset transfer per
//! invocation on the Union testnets.
//!
//! # Architecture
//!
//! - **config**: static network/token/IBC-channel table, built once and
//!   injected into executors
//! - **secrets**: credential loading from the environment
//! - **amount**: decimal to base-unit normalization
//! - **wallet**: signer identity derivation (EVM key, Cosmos mnemonic)
//! - **client**: transfer submission clients behind trait seams
//! - **transfer**: one executor per transfer kind; cross-kind bridging is
//!   an explicit simulation
//! - **dispatch**: the closed task set and the single-task runner
//!
//! # Security
//!
//! Secrets are zeroized on drop and the logging layer redacts key- and
//! address-shaped fields before anything reaches the console.

pub mod amount;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod secrets;
pub mod transfer;
pub mod utils;
pub mod wallet;

// Re-export key types for convenience
pub use error::{ErrorCode, TransferError, TransferResult};

pub use amount::{format_base_units, to_base_units};
pub use config::{AssetId, ChannelEndpoint, Config, Network, NetworkKind, TokenConfig};
pub use dispatch::{Task, TransferKind, DEFAULT_TASK};
pub use secrets::Secrets;
pub use transfer::{TransferOutcome, TransferRequest};
