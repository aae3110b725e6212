//! Unified error types for the transfer runner
//!
//! All errors flow through this module for consistent handling
//! and single-line console reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all transfer operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl TransferError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, msg)
    }

    pub fn secrets(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Secrets, msg)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, msg)
    }

    pub fn client(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Client, msg)
    }

    pub fn chain(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Chain, msg)
    }

    pub fn signing_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::SigningFailed, msg)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Timeout, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for TransferError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Missing or inconsistent network/token/channel entries
    Config,
    // Missing or malformed credentials
    Secrets,
    // Malformed user input (amounts, addresses)
    Validation,
    // The external client failed or reported an error result
    Client,
    // The chain accepted the submission but reported a non-zero code
    Chain,

    // Crypto errors
    SigningFailed,

    // Transport
    Timeout,

    // Internal
    Internal,
}

/// Result type alias for transfer operations
pub type TransferResult<T> = Result<T, TransferError>;

// Conversions from common error types

impl From<serde_json::Error> for TransferError {
    fn from(e: serde_json::Error) -> Self {
        TransferError::new(ErrorCode::Internal, e.to_string())
    }
}

impl From<hex::FromHexError> for TransferError {
    fn from(e: hex::FromHexError) -> Self {
        TransferError::new(ErrorCode::Validation, e.to_string())
    }
}

impl From<reqwest::Error> for TransferError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransferError::new(ErrorCode::Timeout, "Request timed out")
        } else if e.is_connect() {
            TransferError::new(ErrorCode::Client, "Connection failed")
        } else {
            TransferError::new(ErrorCode::Client, e.to_string())
        }
    }
}

impl From<bitcoin::bip32::Error> for TransferError {
    fn from(e: bitcoin::bip32::Error) -> Self {
        TransferError::new(ErrorCode::SigningFailed, format!("BIP32 error: {}", e))
    }
}

impl From<bitcoin::secp256k1::Error> for TransferError {
    fn from(e: bitcoin::secp256k1::Error) -> Self {
        TransferError::new(ErrorCode::SigningFailed, format!("Secp256k1 error: {}", e))
    }
}

impl From<bip39::Error> for TransferError {
    fn from(e: bip39::Error) -> Self {
        TransferError::new(ErrorCode::Secrets, format!("BIP39 error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TransferError::config("No such network: osmosis")
            .with_details("known networks: sepolia, holesky, corn, sei, xion, babylon");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("config"));
        assert!(json.contains("No such network"));
    }

    #[test]
    fn test_display_includes_code_and_details() {
        let err = TransferError::chain("Transaction rejected").with_details("out of gas");
        let text = err.to_string();
        assert!(text.contains("Chain"));
        assert!(text.contains("out of gas"));
    }
}
