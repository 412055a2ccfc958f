//! CLI command definitions and dispatch
//!
//! Every node operation is a clap subcommand; the mapping from command
//! to routine is the exhaustive match in [`Command::execute`], so an
//! unknown command is a parse-time error rather than a runtime lookup
//! failure.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tangle_api::NodeApi;

use crate::error::CliResult;
use crate::reporter::Reporter;

pub mod attach;
pub mod neighbors;
pub mod node;
pub mod transactions;

/// Tangle Node API command line examples
#[derive(Parser, Debug)]
#[command(
    name = "tangle",
    version,
    about = "Tangle Node API command line examples",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Network configuration file
    #[arg(long, global = true, default_value = "networkConfig.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per node operation
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Returns information about your node.
    #[command(name = "getNodeInfo")]
    GetNodeInfo(node::GetNodeInfoCommand),

    /// Returns the set of neighbors you are connected with.
    #[command(name = "getNeighbors")]
    GetNeighbors(neighbors::GetNeighborsCommand),

    /// Add neighbors to your node.
    #[command(name = "addNeighbors")]
    AddNeighbors(neighbors::AddNeighborsCommand),

    /// Remove neighbors from your node.
    #[command(name = "removeNeighbors")]
    RemoveNeighbors(neighbors::RemoveNeighborsCommand),

    /// Get the list of tips from the node.
    #[command(name = "getTips")]
    GetTips(node::GetTipsCommand),

    /// Find the transactions which match the specified input.
    #[command(name = "findTransactions")]
    FindTransactions(transactions::FindTransactionsCommand),

    /// Get the trytes for the hashes.
    #[command(name = "getTrytes")]
    GetTrytes(transactions::GetTrytesCommand),

    /// Get the inclusion states of a set of transactions.
    #[command(name = "getInclusionStates")]
    GetInclusionStates(transactions::GetInclusionStatesCommand),

    /// Get the balances of a set of addresses.
    #[command(name = "getBalances")]
    GetBalances(transactions::GetBalancesCommand),

    /// Tip selection which returns trunkTransaction and branchTransaction.
    #[command(name = "getTransactionsToApprove")]
    GetTransactionsToApprove(attach::GetTransactionsToApproveCommand),

    /// Attaches the specified transactions (trytes) to the Tangle by doing Proof of Work.
    #[command(name = "attachToTangle")]
    AttachToTangle(attach::AttachToTangleCommand),

    /// Interrupts and completely aborts the attachToTangle process.
    #[command(name = "interruptAttachingToTangle")]
    InterruptAttachingToTangle(node::InterruptAttachingToTangleCommand),

    /// Broadcast a list of transactions to all neighbors.
    #[command(name = "broadcastTransactions")]
    BroadcastTransactions(transactions::BroadcastTransactionsCommand),

    /// Store transactions into the local storage.
    #[command(name = "storeTransactions")]
    StoreTransactions(transactions::StoreTransactionsCommand),

    /// Get transactions with missing references.
    #[command(name = "getMissingTransactions")]
    GetMissingTransactions(node::GetMissingTransactionsCommand),

    /// Check the consistency of tail hashes.
    #[command(name = "checkConsistency")]
    CheckConsistency(transactions::CheckConsistencyCommand),

    /// Have the requested addresses been spent from already.
    #[command(name = "wereAddressesSpentFrom")]
    WereAddressesSpentFrom(transactions::WereAddressesSpentFromCommand),
}

impl Command {
    /// Run the selected routine. Exactly one client call is made per
    /// invocation; validation failures short-circuit before any call.
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        match self {
            Command::GetNodeInfo(cmd) => cmd.execute(client, reporter).await,
            Command::GetNeighbors(cmd) => cmd.execute(client, reporter).await,
            Command::AddNeighbors(cmd) => cmd.execute(client, reporter).await,
            Command::RemoveNeighbors(cmd) => cmd.execute(client, reporter).await,
            Command::GetTips(cmd) => cmd.execute(client, reporter).await,
            Command::FindTransactions(cmd) => cmd.execute(client, reporter).await,
            Command::GetTrytes(cmd) => cmd.execute(client, reporter).await,
            Command::GetInclusionStates(cmd) => cmd.execute(client, reporter).await,
            Command::GetBalances(cmd) => cmd.execute(client, reporter).await,
            Command::GetTransactionsToApprove(cmd) => cmd.execute(client, reporter).await,
            Command::AttachToTangle(cmd) => cmd.execute(client, reporter).await,
            Command::InterruptAttachingToTangle(cmd) => cmd.execute(client, reporter).await,
            Command::BroadcastTransactions(cmd) => cmd.execute(client, reporter).await,
            Command::StoreTransactions(cmd) => cmd.execute(client, reporter).await,
            Command::GetMissingTransactions(cmd) => cmd.execute(client, reporter).await,
            Command::CheckConsistency(cmd) => cmd.execute(client, reporter).await,
            Command::WereAddressesSpentFrom(cmd) => cmd.execute(client, reporter).await,
        }
    }
}
