//! Cosmos → Cosmos IBC transfer executor

use super::types::{TransferOutcome, TransferRequest};
use crate::amount::to_base_units;
use crate::client::{Coin, CosmosSigningClient};
use crate::config::{AssetId, Config, Network};
use crate::error::{TransferError, TransferResult};
use crate::secrets::Secrets;
use crate::wallet::{cosmos_address_from_mnemonic, validate_cosmos_address};
use crate::{log_error, log_info};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const MODULE: &str = "transfer.ibc";

/// Chain-level transaction timeout window
const IBC_TIMEOUT_SECS: u64 = 600;

/// Transfer a token between two Cosmos networks over a configured IBC
/// channel.
///
/// Any error is caught here, logged, and returned as a failed outcome.
pub async fn transfer_via_ibc<C: CosmosSigningClient>(
    config: &Config,
    secrets: &Secrets,
    client: &C,
    request: &TransferRequest,
) -> TransferOutcome {
    log_info!(
        MODULE,
        "Starting IBC transfer",
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

async fn execute<C: CosmosSigningClient>(
    config: &Config,
    secrets: &Secrets,
    client: &C,
    request: &TransferRequest,
) -> TransferResult<TransferOutcome> {
    let source_net = config.network(&request.source)?;
    let dest_net = config.network(&request.dest)?;

    let (source_prefix, dest_prefix) = match (source_net, dest_net) {
        (
            Network::Cosmos {
                prefix: source_prefix,
                ..
            },
            Network::Cosmos {
                prefix: dest_prefix,
                ..
            },
        ) => (source_prefix, dest_prefix),
        _ => {
            return Err(TransferError::config(format!(
                "IBC transfer requires two Cosmos networks, got {} -> {}",
                source_net.kind().display_name(),
                dest_net.kind().display_name()
            )))
        }
    };

    // No channel entry means no direct route; multi-hop is never inferred
    let channel = config.channel(&request.source, &request.dest).ok_or_else(|| {
        TransferError::config(format!(
            "No IBC channel configured for {} -> {}",
            request.source, request.dest
        ))
    })?;

    let token = config.token(&request.source, &request.token)?;
    let denom = match &token.asset {
        AssetId::Denom(denom) => denom.clone(),
        _ => {
            return Err(TransferError::config(format!(
                "Token '{}' has no bank denom on '{}'",
                request.token, request.source
            )))
        }
    };

    let sender = cosmos_address_from_mnemonic(&secrets.cosmos_mnemonic, source_prefix)?;
    validate_cosmos_address(&request.receiver, dest_prefix)?;

    let amount = to_base_units(&request.amount, token.decimals)?;
    let timeout_timestamp = timeout_timestamp_ns(IBC_TIMEOUT_SECS);

    log_info!(
        MODULE,
        "Submitting",
        sender = sender,
        receiver = request.receiver,
        denom = denom,
        base_units = amount,
        channel = channel.channel_id,
    );

    let response = client
        .send_ibc_tokens(
            &sender,
            &request.receiver,
            Coin {
                denom,
                amount: amount.to_string(),
            },
            &channel.port_id,
            &channel.channel_id,
            timeout_timestamp,
        )
        .await?;

    if !response.is_success() {
        return Err(TransferError::chain(format!(
            "Transaction failed with code {}",
            response.code
        ))
        .with_details(response.raw_log));
    }

    let explorer_url = source_net.explorer_tx_url(&response.transaction_hash);
    match &explorer_url {
        Some(url) => log_info!(MODULE, "Transfer submitted", explorer = url),
        None => log_info!(MODULE, "Transfer submitted", tx_hash = response.transaction_hash),
    }

    Ok(TransferOutcome::Submitted {
        tx_hash: response.transaction_hash,
        explorer_url,
    })
}

/// Timeout timestamp in nanoseconds: now + the transfer window
fn timeout_timestamp_ns(window_secs: u64) -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO);
    (now + Duration::from_secs(window_secs)).as_nanos() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_window() {
        let timeout = timeout_timestamp_ns(IBC_TIMEOUT_SECS);
        let now_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64;

        assert!(timeout > now_ns);
        assert!(timeout <= now_ns + (IBC_TIMEOUT_SECS + 5) * 1_000_000_000);
    }
}
