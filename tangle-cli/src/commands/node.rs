//! Node status commands: getNodeInfo, getTips, getMissingTransactions
//! and interruptAttachingToTangle

use clap::Args;
use tangle_api::NodeApi;

use crate::error::CliResult;
use crate::reporter::Reporter;

/// Returns information about your node.
#[derive(Args, Debug, Default)]
pub struct GetNodeInfoCommand {}

impl GetNodeInfoCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        reporter.heading("getNodeInfo", client.uri());
        match client.get_node_info().await {
            Ok(info) => {
                reporter.success();
                reporter.field("appName", &info.app_name);
                reporter.field("appVersion", &info.app_version);
                reporter.field("latestMilestone", &info.latest_milestone);
                reporter.field("latestMilestoneIndex", info.latest_milestone_index);
                reporter.field(
                    "latestSolidSubtangleMilestone",
                    &info.latest_solid_subtangle_milestone,
                );
                reporter.field(
                    "latestSolidSubtangleMilestoneIndex",
                    info.latest_solid_subtangle_milestone_index,
                );
                reporter.field("neighbors", info.neighbors);
                reporter.field("packetsQueueSize", info.packets_queue_size);
                reporter.field("time", info.time);
                reporter.field("tips", info.tips);
                reporter.field("transactionsToRequest", info.transactions_to_request);
                reporter.field("duration", info.duration);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Get the list of tips from the node.
#[derive(Args, Debug, Default)]
pub struct GetTipsCommand {}

impl GetTipsCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        reporter.heading("getTips", client.uri());
        match client.get_tips().await {
            Ok(res) => {
                reporter.success();
                reporter.list("Tips", "hash", &res.hashes);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Get transactions with missing references.
#[derive(Args, Debug, Default)]
pub struct GetMissingTransactionsCommand {}

impl GetMissingTransactionsCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        reporter.heading("getMissingTransactions", client.uri());
        match client.get_missing_transactions().await {
            Ok(res) => {
                reporter.success();
                reporter.list("Missing Transactions", "hash", &res.hashes);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Interrupts and completely aborts the attachToTangle process.
#[derive(Args, Debug, Default)]
pub struct InterruptAttachingToTangleCommand {}

impl InterruptAttachingToTangleCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        reporter.heading("interruptAttachingToTangle", client.uri());
        match client.interrupt_attaching_to_tangle().await {
            Ok(res) => {
                reporter.success();
                reporter.field("duration", res.duration);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}
