//! EVM → EVM transfer executor

use super::types::{TransferOutcome, TransferRequest};
use crate::amount::to_base_units;
use crate::client::{AssetTransfer, EvmTransferClient, NATIVE_ASSET};
use crate::config::{AssetId, Config};
use crate::error::{TransferError, TransferResult};
use crate::secrets::Secrets;
use crate::wallet::{evm_signer_address, validate_evm_address};
use crate::{log_error, log_info};

const MODULE: &str = "transfer.evm";

/// Transfer an asset between two EVM networks.
///
/// Any error is caught here, logged, and returned as a failed outcome.
pub async fn transfer_evm_to_evm<C: EvmTransferClient>(
    config: &Config,
    secrets: &Secrets,
    client: &C,
    request: &TransferRequest,
) -> TransferOutcome {
    log_info!(
        MODULE,
        "Starting EVM transfer",
        source = request.source,
        dest = request.dest,
        token = request.token,
        amount = request.amount,
    );

    match execute(config, secrets, client, request).await {
        Ok(outcome) => outcome,
        Err(error) => {
            log_error!(MODULE, "Transfer failed", error = error);
            TransferOutcome::Failed(error)
        }
    }
}

async fn execute<C: EvmTransferClient>(
    config: &Config,
    secrets: &Secrets,
    client: &C,
    request: &TransferRequest,
) -> TransferResult<TransferOutcome> {
    let source_net = config.network(&request.source)?;
    let dest_net = config.network(&request.dest)?;
    if !source_net.is_evm() || !dest_net.is_evm() {
        return Err(TransferError::config(format!(
            "EVM transfer requires two EVM networks, got {} -> {}",
            source_net.kind().display_name(),
            dest_net.kind().display_name()
        )));
    }

    let token = config.token(&request.source, &request.token)?;
    let asset = match &token.asset {
        AssetId::Native => NATIVE_ASSET.to_string(),
        AssetId::Contract(address) => address.clone(),
        AssetId::Denom(denom) => {
            return Err(TransferError::config(format!(
                "Token '{}' is a bank denom ('{}'), not an EVM asset",
                request.token, denom
            )))
        }
    };

    let sender = evm_signer_address(&secrets.evm_private_key)?;
    let receiver = validate_evm_address(&request.receiver)?;
    let amount = to_base_units(&request.amount, token.decimals)?;

    log_info!(
        MODULE,
        "Submitting",
        sender = sender,
        receiver = receiver,
        base_units = amount,
    );

    let receipt = client
        .transfer_asset(&AssetTransfer {
            amount,
            asset,
            destination_chain_id: dest_net.chain_id_string(),
            receiver,
        })
        .await?;

    let explorer_url = source_net.explorer_tx_url(&receipt.tx_hash);
    match &explorer_url {
        Some(url) => log_info!(MODULE, "Transfer submitted", explorer = url),
        None => log_info!(MODULE, "Transfer submitted", tx_hash = receipt.tx_hash),
    }

    Ok(TransferOutcome::Submitted {
        tx_hash: receipt.tx_hash,
        explorer_url,
    })
}
