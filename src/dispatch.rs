//! Task dispatcher
//!
//! The binary runs exactly one task per invocation, picked from a closed
//! set of known transfer orders. Each task carries its literal parameters;
//! the receiver is always the caller's own address on the destination
//! network. This is a fixed selector, not a general command parser.

use crate::client::{HttpEvmClient, RpcCosmosClient};
use crate::config::{Config, Network};
use crate::error::TransferResult;
use crate::secrets::Secrets;
use crate::transfer::{self, TransferOutcome, TransferRequest};
use crate::wallet::{cosmos_address_from_mnemonic, evm_signer_address};
use crate::{log_error, log_warn};

const MODULE: &str = "dispatch";

/// The task the binary runs when none is selected
pub const DEFAULT_TASK: &str = "xion-to-sei-xion";

/// The closed set of known transfer tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    SepoliaToHoleskyEth,
    SeiToCornSei,
    XionToSeiXion,
    XionToCornXion,
    XionToCornUsdcNoble,
    BabylonToCornBbn,
    SeiToXionSei,
    BabylonToXionBbn,
}

/// Which executor a task routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    EvmToEvm,
    CosmosToCosmos,
    CosmosToEvm,
    EvmToCosmos,
}

struct TaskParams {
    source: &'static str,
    dest: &'static str,
    token: &'static str,
    amount: &'static str,
}

impl Task {
    pub const ALL: [Task; 8] = [
        Task::SepoliaToHoleskyEth,
        Task::SeiToCornSei,
        Task::XionToSeiXion,
        Task::XionToCornXion,
        Task::XionToCornUsdcNoble,
        Task::BabylonToCornBbn,
        Task::SeiToXionSei,
        Task::BabylonToXionBbn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Task::SepoliaToHoleskyEth => "sepolia-to-holesky-eth",
            Task::SeiToCornSei => "sei-to-corn-sei",
            Task::XionToSeiXion => "xion-to-sei-xion",
            Task::XionToCornXion => "xion-to-corn-xion",
            Task::XionToCornUsdcNoble => "xion-to-corn-usdc-noble",
            Task::BabylonToCornBbn => "babylon-to-corn-bbn",
            Task::SeiToXionSei => "sei-to-xion-sei",
            Task::BabylonToXionBbn => "babylon-to-xion-bbn",
        }
    }

    /// Parse a task name; `_` and case differences are tolerated
    pub fn parse(name: &str) -> Option<Task> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        Task::ALL.into_iter().find(|t| t.name() == normalized)
    }

    pub fn kind(&self) -> TransferKind {
        match self {
            Task::SepoliaToHoleskyEth | Task::SeiToCornSei => TransferKind::EvmToEvm,
            Task::BabylonToXionBbn => TransferKind::CosmosToCosmos,
            Task::XionToSeiXion
            | Task::XionToCornXion
            | Task::XionToCornUsdcNoble
            | Task::BabylonToCornBbn => TransferKind::CosmosToEvm,
            Task::SeiToXionSei => TransferKind::EvmToCosmos,
        }
    }

    fn params(&self) -> TaskParams {
        match self {
            Task::SepoliaToHoleskyEth => TaskParams {
                source: "sepolia",
                dest: "holesky",
                token: "ETH",
                amount: "0.0001",
            },
            Task::SeiToCornSei => TaskParams {
                source: "sei",
                dest: "corn",
                token: "SEI",
                amount: "0.0001",
            },
            Task::XionToSeiXion => TaskParams {
                source: "xion",
                dest: "sei",
                token: "XION",
                amount: "0.01",
            },
            Task::XionToCornXion => TaskParams {
                source: "xion",
                dest: "corn",
                token: "XION",
                amount: "0.0001",
            },
            Task::XionToCornUsdcNoble => TaskParams {
                source: "xion",
                dest: "corn",
                token: "USDC_NOBLE",
                amount: "0.0001",
            },
            Task::BabylonToCornBbn => TaskParams {
                source: "babylon",
                dest: "corn",
                token: "BBN",
                amount: "0.00001",
            },
            Task::SeiToXionSei => TaskParams {
                source: "sei",
                dest: "xion",
                token: "SEI",
                amount: "0.01",
            },
            Task::BabylonToXionBbn => TaskParams {
                source: "babylon",
                dest: "xion",
                token: "BBN",
                amount: "0.0001",
            },
        }
    }
}

/// Comma-separated list of every known task name
pub fn known_task_names() -> String {
    Task::ALL
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run one task to completion and report its outcome
pub async fn run(task: Task, config: &Config, secrets: &Secrets) -> TransferOutcome {
    let params = task.params();

    let receiver = match resolve_receiver(config, secrets, params.dest) {
        Ok(receiver) => receiver,
        Err(error) => {
            log_error!(MODULE, "Cannot resolve receiver", error = error);
            return TransferOutcome::Failed(error);
        }
    };

    let request = TransferRequest {
        source: params.source.to_string(),
        dest: params.dest.to_string(),
        token: params.token.to_string(),
        amount: params.amount.to_string(),
        receiver,
    };

    match task.kind() {
        TransferKind::EvmToEvm => {
            let client = match config
                .network(&request.source)
                .and_then(|net| HttpEvmClient::new(net, &secrets.evm_private_key))
            {
                Ok(client) => client,
                Err(error) => {
                    log_error!(MODULE, "Cannot build EVM client", error = error);
                    return TransferOutcome::Failed(error);
                }
            };
            transfer::transfer_evm_to_evm(config, secrets, &client, &request).await
        }
        TransferKind::CosmosToCosmos => {
            let client = match config
                .network(&request.source)
                .and_then(|net| RpcCosmosClient::new(net, &secrets.cosmos_mnemonic))
            {
                Ok(client) => client,
                Err(error) => {
                    log_error!(MODULE, "Cannot build Cosmos client", error = error);
                    return TransferOutcome::Failed(error);
                }
            };
            transfer::transfer_via_ibc(config, secrets, &client, &request).await
        }
        TransferKind::CosmosToEvm => {
            transfer::transfer_cosmos_to_evm(config, secrets, &request).await
        }
        TransferKind::EvmToCosmos => {
            transfer::transfer_evm_to_cosmos(config, secrets, &request).await
        }
    }
}

/// Handle an unknown task name: warn and do nothing
pub fn warn_unknown_task(name: &str) {
    log_warn!(
        MODULE,
        "Unknown task; nothing to do",
        task = name,
        known = known_task_names(),
    );
}

/// The caller's own address on the destination network
fn resolve_receiver(config: &Config, secrets: &Secrets, dest: &str) -> TransferResult<String> {
    match config.network(dest)? {
        Network::Evm { .. } => evm_signer_address(&secrets.evm_private_key),
        Network::Cosmos { prefix, .. } => {
            cosmos_address_from_mnemonic(&secrets.cosmos_mnemonic, prefix)
        }
    }
}
