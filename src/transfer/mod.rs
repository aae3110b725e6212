//! Transfer executors
//!
//! One executor per transfer kind: EVM→EVM, Cosmos→Cosmos over IBC, and
//! the two simulated cross-kind bridge directions. Executors resolve
//! configuration, normalize the amount, and delegate submission; every
//! failure is caught at the executor boundary and folded into the
//! returned outcome so a single failed transfer never takes the process
//! down.

pub mod bridge;
pub mod evm;
pub mod ibc;
pub mod types;

pub use bridge::{transfer_cosmos_to_evm, transfer_evm_to_cosmos};
pub use evm::transfer_evm_to_evm;
pub use ibc::transfer_via_ibc;
pub use types::{TransferOutcome, TransferRequest};
