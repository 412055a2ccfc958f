//! Tip selection and proof-of-work commands:
//! getTransactionsToApprove and attachToTangle

use clap::Args;
use tangle_api::models::{AttachToTangleRequest, GetTransactionsToApproveRequest};
use tangle_api::NodeApi;

use crate::error::{CliError, CliResult};
use crate::reporter::Reporter;

/// Tip selection which returns trunkTransaction and branchTransaction.
#[derive(Args, Debug, Default)]
pub struct GetTransactionsToApproveCommand {
    /// Number of bundles to go back to determine the transactions for approval
    #[arg(long)]
    pub depth: Option<u32>,
}

impl GetTransactionsToApproveCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        let depth = match self.depth {
            Some(depth) => depth,
            None => {
                reporter.error(CliError::MissingOption("depth"));
                return Ok(());
            }
        };
        reporter.heading("getTransactionsToApprove", client.uri());
        let req = GetTransactionsToApproveRequest { depth };
        match client.get_transactions_to_approve(req).await {
            Ok(res) => {
                reporter.success();
                reporter.field("trunkTransaction", &res.trunk_transaction);
                reporter.field("branchTransaction", &res.branch_transaction);
                reporter.field("duration", res.duration);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Attaches the specified transactions (trytes) to the Tangle by doing
/// Proof of Work. All four options are required.
#[derive(Args, Debug, Default)]
pub struct AttachToTangleCommand {
    /// Trunk transaction to approve
    #[arg(long = "trunkTransaction")]
    pub trunk_transaction: Option<String>,

    /// Branch transaction to approve
    #[arg(long = "branchTransaction")]
    pub branch_transaction: Option<String>,

    /// Proof of Work intensity. Minimum value is 18
    #[arg(long = "minWeightMagnitude")]
    pub min_weight_magnitude: Option<u32>,

    /// List of trytes (raw transaction data) to attach to the tangle
    #[arg(long, value_delimiter = ',')]
    pub trytes: Option<Vec<String>>,
}

impl AttachToTangleCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        let req = match (
            self.trunk_transaction,
            self.branch_transaction,
            self.min_weight_magnitude,
            self.trytes,
        ) {
            (Some(trunk), Some(branch), Some(mwm), Some(trytes)) => AttachToTangleRequest {
                trunk_transaction: trunk,
                branch_transaction: branch,
                min_weight_magnitude: mwm,
                trytes,
            },
            _ => {
                reporter.error(CliError::MissingOptions(
                    "trunkTransaction/branchTransaction/minWeightMagnitude/trytes",
                ));
                return Ok(());
            }
        };
        reporter.heading("attachToTangle", client.uri());
        match client.attach_to_tangle(req).await {
            Ok(res) => {
                reporter.success();
                reporter.list("Trytes", "trytes", &res.trytes);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}
