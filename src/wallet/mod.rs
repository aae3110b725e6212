//! Signer identity derivation
//!
//! Turns the loaded secrets into on-chain identities: an EVM account from
//! the private key, and bech32 accounts from the mnemonic for any
//! configured Cosmos prefix.

pub mod cosmos;
pub mod evm;

pub use cosmos::{cosmos_address_from_mnemonic, validate_cosmos_address};
pub use evm::{evm_signer_address, validate_evm_address};
