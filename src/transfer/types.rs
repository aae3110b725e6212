//! Executor request and outcome types

use crate::error::TransferError;

/// One transfer order as the dispatcher hands it to an executor.
/// Constructed per invocation, consumed immediately, never retained.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub source: String,
    pub dest: String,
    pub token: String,
    /// Human decimal amount, normalized by the executor
    pub amount: String,
    pub receiver: String,
}

/// What happened to one transfer attempt
#[derive(Debug, Clone)]
pub enum TransferOutcome {
    /// The transaction reached the source chain
    Submitted {
        tx_hash: String,
        explorer_url: Option<String>,
    },
    /// A cross-kind bridge path: validated and logged, nothing submitted
    Simulated { source: String, dest: String },
    /// Caught at the executor boundary; the process continues
    Failed(TransferError),
}

impl TransferOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, TransferOutcome::Failed(_))
    }

    /// One-line summary for the final console report
    pub fn summary(&self) -> String {
        match self {
            TransferOutcome::Submitted {
                tx_hash,
                explorer_url,
            } => match explorer_url {
                Some(url) => format!("submitted: {}", url),
                None => format!("submitted: {}", tx_hash),
            },
            TransferOutcome::Simulated { source, dest } => {
                format!("simulated bridge request {} -> {}", source, dest)
            }
            TransferOutcome::Failed(error) => format!("failed: {}", error),
        }
    }
}
