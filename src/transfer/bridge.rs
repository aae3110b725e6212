//! Cross-kind bridge executors (simulated)
//!
//! Moving value between a Cosmos chain and an EVM chain needs a relayer
//! protocol that is deliberately out of scope here. These executors keep
//! the full validation and identity derivation of a real path, then log a
//! simulated submission instead of performing one. They are not handed a
//! submission client, so nothing can reach a chain through them.

use super::types::{TransferOutcome, TransferRequest};
use crate::config::{Config, Network};
use crate::error::{TransferError, TransferResult};
use crate::secrets::Secrets;
use crate::wallet::{cosmos_address_from_mnemonic, evm_signer_address};
use crate::{log_error, log_info, log_warn};

const MODULE: &str = "transfer.bridge";

/// Simulated Cosmos → EVM bridge transfer
pub async fn transfer_cosmos_to_evm(
    config: &Config,
    secrets: &Secrets,
    request: &TransferRequest,
) -> TransferOutcome {
    log_info!(
        MODULE,
        "Starting bridge transfer (Cosmos -> EVM)",
        source = request.source,
        dest = request.dest,
        token = request.token,
        amount = request.amount,
    );

    match simulate_cosmos_to_evm(config, secrets, request) {
        Ok(outcome) => outcome,
        Err(error) => {
            log_error!(MODULE, "Bridge transfer failed", error = error);
            TransferOutcome::Failed(error)
        }
    }
}

fn simulate_cosmos_to_evm(
    config: &Config,
    secrets: &Secrets,
    request: &TransferRequest,
) -> TransferResult<TransferOutcome> {
    let source_net = config.network(&request.source)?;
    let dest_net = config.network(&request.dest)?;

    let prefix = match (source_net, dest_net) {
        (Network::Cosmos { prefix, .. }, Network::Evm { .. }) => prefix,
        _ => {
            return Err(TransferError::config(format!(
                "Cosmos -> EVM bridge requires a Cosmos source and an EVM destination, got {} -> {}",
                source_net.kind().display_name(),
                dest_net.kind().display_name()
            )))
        }
    };

    let sender = cosmos_address_from_mnemonic(&secrets.cosmos_mnemonic, prefix)?;

    log_warn!(MODULE, "Cosmos -> EVM transfers are an advanced path; not implemented here");
    log_info!(
        MODULE,
        "[simulation] Bridge transfer request sent",
        sender = sender,
        receiver = request.receiver,
    );
    log_info!(MODULE, "A relayer would pick this request up and settle it on the destination chain");

    Ok(TransferOutcome::Simulated {
        source: request.source.clone(),
        dest: request.dest.clone(),
    })
}

/// Simulated EVM → Cosmos bridge transfer
pub async fn transfer_evm_to_cosmos(
    config: &Config,
    secrets: &Secrets,
    request: &TransferRequest,
) -> TransferOutcome {
    log_info!(
        MODULE,
        "Starting bridge transfer (EVM -> Cosmos)",
        source = request.source,
        dest = request.dest,
        token = request.token,
        amount = request.amount,
    );

    match simulate_evm_to_cosmos(config, secrets, request) {
        Ok(outcome) => outcome,
        Err(error) => {
            log_error!(MODULE, "Bridge transfer failed", error = error);
            TransferOutcome::Failed(error)
        }
    }
}

fn simulate_evm_to_cosmos(
    config: &Config,
    secrets: &Secrets,
    request: &TransferRequest,
) -> TransferResult<TransferOutcome> {
    let source_net = config.network(&request.source)?;
    let dest_net = config.network(&request.dest)?;

    if !(source_net.is_evm() && dest_net.is_cosmos()) {
        return Err(TransferError::config(format!(
            "EVM -> Cosmos bridge requires an EVM source and a Cosmos destination, got {} -> {}",
            source_net.kind().display_name(),
            dest_net.kind().display_name()
        )));
    }

    let sender = evm_signer_address(&secrets.evm_private_key)?;

    log_warn!(MODULE, "EVM -> Cosmos transfers are an advanced path; not implemented here");
    log_info!(
        MODULE,
        "[simulation] Bridge transfer request sent",
        sender = sender,
        receiver = request.receiver,
    );

    Ok(TransferOutcome::Simulated {
        source: request.source.clone(),
        dest: request.dest.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn secrets() -> Secrets {
        Secrets::from_values(KEY.to_string(), MNEMONIC.to_string()).unwrap()
    }

    fn request(source: &str, dest: &str) -> TransferRequest {
        TransferRequest {
            source: source.to_string(),
            dest: dest.to_string(),
            token: "XION".to_string(),
            amount: "0.01".to_string(),
            receiver: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".to_string(),
        }
    }

    #[tokio::test]
    async fn test_cosmos_to_evm_simulates() {
        let config = Config::testnet();
        let outcome = transfer_cosmos_to_evm(&config, &secrets(), &request("xion", "sei")).await;
        assert!(matches!(outcome, TransferOutcome::Simulated { .. }));
    }

    #[tokio::test]
    async fn test_cosmos_to_evm_rejects_wrong_direction() {
        let config = Config::testnet();
        let outcome = transfer_cosmos_to_evm(&config, &secrets(), &request("sepolia", "sei")).await;
        assert!(outcome.is_failure());
    }

    #[tokio::test]
    async fn test_evm_to_cosmos_simulates() {
        let config = Config::testnet();
        let outcome = transfer_evm_to_cosmos(&config, &secrets(), &request("sei", "xion")).await;
        assert!(matches!(outcome, TransferOutcome::Simulated { .. }));
    }

    #[tokio::test]
    async fn test_evm_to_cosmos_rejects_wrong_direction() {
        let config = Config::testnet();
        let outcome = transfer_evm_to_cosmos(&config, &secrets(), &request("xion", "babylon")).await;
        assert!(outcome.is_failure());
    }
}
