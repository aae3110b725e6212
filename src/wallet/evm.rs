//! EVM signer identity and address handling

use crate::error::{TransferError, TransferResult};
use ethers_signers::{LocalWallet, Signer};
use std::str::FromStr;
use tiny_keccak::{Hasher, Keccak};

/// Derive the EIP-55 checksummed account address for a 0x-prefixed
/// private key
pub fn evm_signer_address(private_key: &str) -> TransferResult<String> {
    let wallet = LocalWallet::from_str(private_key)
        .map_err(|e| TransferError::signing_failed(format!("Invalid EVM private key: {}", e)))?;
    Ok(to_checksum_address(wallet.address().as_bytes()))
}

/// Validate a receiver address and return its checksummed form
pub fn validate_evm_address(address: &str) -> TransferResult<String> {
    let trimmed = address.trim();

    if !trimmed.starts_with("0x") || trimmed.len() != 42 {
        return Err(TransferError::validation(format!(
            "Invalid EVM address '{}': expected 0x followed by 40 hex digits",
            trimmed
        )));
    }

    let hex_part = &trimmed[2..];
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TransferError::validation(format!(
            "Invalid EVM address '{}': non-hex characters",
            trimmed
        )));
    }

    let bytes = hex::decode(hex_part.to_lowercase())?;
    Ok(to_checksum_address(&bytes))
}

/// EIP-55 mixed-case checksum encoding of a 20-byte address
pub fn to_checksum_address(address: &[u8]) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut result = String::from("0x");
    for (i, ch) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };

        if ch.is_ascii_digit() || nibble < 8 {
            result.push(ch);
        } else {
            result.push(ch.to_ascii_uppercase());
        }
    }

    result
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    // Well-known hardhat test key
    const KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    #[test]
    fn test_signer_address() {
        let address = evm_signer_address(KEY).unwrap();
        assert_eq!(address, "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
    }

    #[test]
    fn test_bad_key_rejected() {
        let err = evm_signer_address("0x1234").unwrap_err();
        assert_eq!(err.code, ErrorCode::SigningFailed);
    }

    #[test]
    fn test_validate_address_checksums() {
        let lower = "0xd8da6bf26964af9d7eed9e03e53415d37aa96045";
        let checksummed = validate_evm_address(lower).unwrap();
        assert_eq!(checksummed, "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
    }

    #[test]
    fn test_validate_address_rejects_malformed() {
        for bad in ["", "0x123", "d8da6bf26964af9d7eed9e03e53415d37aa96045", "0xZZda6bf26964af9d7eed9e03e53415d37aa96045"] {
            let err = validate_evm_address(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::Validation, "input {:?}", bad);
        }
    }
}
