//! Cosmos signer identity derivation
//!
//! Standard Cosmos derivation path m/44'/118'/0'/0/0; the same key
//! material maps to any chain by swapping the bech32 prefix.

use crate::error::{TransferError, TransferResult};
use bech32::{self, ToBase32, Variant};
use bitcoin::bip32::{DerivationPath, Xpriv};
use bitcoin::hashes::{ripemd160, sha256, Hash};
use bitcoin::secp256k1::{PublicKey as Secp256k1PublicKey, Secp256k1, SecretKey};
use bitcoin::Network;
use std::str::FromStr;

const COSMOS_DERIVATION_PATH: &str = "m/44'/118'/0'/0/0";

/// Derive the bech32 account address for a mnemonic and chain prefix
pub fn cosmos_address_from_mnemonic(mnemonic: &str, prefix: &str) -> TransferResult<String> {
    let (_, public_key) = derive_keypair(mnemonic)?;
    encode_cosmos_address(&public_key, prefix)
}

/// Derive the secp256k1 keypair backing the account
pub fn derive_keypair(mnemonic: &str) -> TransferResult<(SecretKey, Secp256k1PublicKey)> {
    let parsed = bip39::Mnemonic::parse(mnemonic)?;
    let seed = parsed.to_seed("");

    let secp = Secp256k1::new();
    let master = Xpriv::new_master(Network::Bitcoin, &seed)?;
    let path = DerivationPath::from_str(COSMOS_DERIVATION_PATH)
        .map_err(|e| TransferError::internal(format!("Invalid derivation path: {}", e)))?;
    let derived = master.derive_priv(&secp, &path)?;

    let secret_key = derived.private_key;
    let public_key = secret_key.public_key(&secp);
    Ok((secret_key, public_key))
}

/// Encode a public key as a bech32 account address with the given prefix
pub fn encode_cosmos_address(
    public_key: &Secp256k1PublicKey,
    prefix: &str,
) -> TransferResult<String> {
    // SHA256 then RIPEMD160 of the compressed public key
    let sha256_hash = sha256::Hash::hash(&public_key.serialize());
    let ripemd_hash = ripemd160::Hash::hash(&sha256_hash[..]);

    let hash_bytes: &[u8] = ripemd_hash.as_ref();
    bech32::encode(prefix, hash_bytes.to_base32(), Variant::Bech32)
        .map_err(|e| TransferError::internal(format!("Bech32 encoding failed: {}", e)))
}

/// Surface validation of a receiver address against the expected prefix
pub fn validate_cosmos_address(address: &str, prefix: &str) -> TransferResult<()> {
    let expected = format!("{}1", prefix);
    if !address.starts_with(&expected) {
        return Err(TransferError::validation(format!(
            "Invalid address '{}': expected prefix '{}'",
            address, prefix
        )));
    }

    // Cosmos account addresses land in this length band
    if address.len() < 39 || address.len() > 65 {
        return Err(TransferError::validation(format!(
            "Invalid address '{}': unexpected length {}",
            address,
            address.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_derive_addresses_by_prefix() {
        let xion = cosmos_address_from_mnemonic(MNEMONIC, "xion").unwrap();
        assert!(xion.starts_with("xion1"), "got {}", xion);

        let bbn = cosmos_address_from_mnemonic(MNEMONIC, "bbn").unwrap();
        assert!(bbn.starts_with("bbn1"), "got {}", bbn);

        // Same key material, different prefix: the data part matches
        assert_eq!(
            xion.trim_start_matches("xion1").len(),
            bbn.trim_start_matches("bbn1").len()
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let a = cosmos_address_from_mnemonic(MNEMONIC, "xion").unwrap();
        let b = cosmos_address_from_mnemonic(MNEMONIC, "xion").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_mnemonic_rejected() {
        let err = cosmos_address_from_mnemonic("not a real mnemonic phrase at all sorry", "xion")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Secrets);
    }

    #[test]
    fn test_validate_address_prefix() {
        let address = cosmos_address_from_mnemonic(MNEMONIC, "xion").unwrap();
        assert!(validate_cosmos_address(&address, "xion").is_ok());

        let err = validate_cosmos_address(&address, "bbn").unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);
    }

    #[test]
    fn test_validate_address_length() {
        let err = validate_cosmos_address("xion1tooshort", "xion").unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);
    }
}
