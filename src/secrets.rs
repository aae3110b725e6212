//! Credential loading from the process environment
//!
//! Two secrets are required per run: an EVM private key and a Cosmos
//! mnemonic. Only surface shape is checked here; curve and checksum
//! validation is the signing layer's job. The values are never logged
//! and are zeroed in memory when dropped.

use crate::error::{TransferError, TransferResult};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Environment variable carrying the 0x-prefixed EVM private key
pub const EVM_PRIVATE_KEY_VAR: &str = "EVM_PRIVATE_KEY";

/// Environment variable carrying the space-separated Cosmos mnemonic
pub const COSMOS_MNEMONIC_VAR: &str = "COSMOS_MNEMONIC";

/// Minimum word count for an acceptable mnemonic
const MIN_MNEMONIC_WORDS: usize = 12;

/// In-memory credentials for one run
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Secrets {
    pub evm_private_key: String,
    pub cosmos_mnemonic: String,
}

impl Secrets {
    /// Load and surface-validate both secrets from the environment
    pub fn from_env() -> TransferResult<Self> {
        let evm_private_key = read_var(EVM_PRIVATE_KEY_VAR)?;
        let cosmos_mnemonic = read_var(COSMOS_MNEMONIC_VAR)?;
        Self::from_values(evm_private_key, cosmos_mnemonic)
    }

    /// Validate already-read values (exposed for tests)
    pub fn from_values(evm_private_key: String, cosmos_mnemonic: String) -> TransferResult<Self> {
        validate_private_key(&evm_private_key)?;
        validate_mnemonic(&cosmos_mnemonic)?;
        Ok(Self {
            evm_private_key,
            cosmos_mnemonic,
        })
    }
}

impl std::fmt::Debug for Secrets {
    // Secrets must never leak through Debug formatting
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("evm_private_key", &"[REDACTED]")
            .field("cosmos_mnemonic", &"[REDACTED]")
            .finish()
    }
}

fn read_var(name: &str) -> TransferResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TransferError::secrets(format!(
            "Environment variable {} is not set",
            name
        ))),
    }
}

fn validate_private_key(key: &str) -> TransferResult<()> {
    if !key.starts_with("0x") {
        return Err(TransferError::secrets(format!(
            "{} must start with 0x",
            EVM_PRIVATE_KEY_VAR
        )));
    }
    let hex_part = &key[2..];
    if hex_part.len() != 64 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TransferError::secrets(format!(
            "{} must be 0x followed by 64 hex digits",
            EVM_PRIVATE_KEY_VAR
        )));
    }
    Ok(())
}

fn validate_mnemonic(mnemonic: &str) -> TransferResult<()> {
    let words = mnemonic.split_whitespace().count();
    if words < MIN_MNEMONIC_WORDS {
        return Err(TransferError::secrets(format!(
            "{} must contain at least {} words (found {})",
            COSMOS_MNEMONIC_VAR, MIN_MNEMONIC_WORDS, words
        )));
    }
    Ok(())
}
