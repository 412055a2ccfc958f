//! Neighbor commands: getNeighbors, addNeighbors, removeNeighbors

use clap::Args;
use tangle_api::models::NeighborUrisRequest;
use tangle_api::NodeApi;

use crate::error::{CliError, CliResult};
use crate::reporter::{Reporter, MAX_LIST_ENTRIES};

/// Returns the set of neighbors you are connected with.
#[derive(Args, Debug, Default)]
pub struct GetNeighborsCommand {}

impl GetNeighborsCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        reporter.heading("getNeighbors", client.uri());
        match client.get_neighbors().await {
            Ok(res) => {
                reporter.success();
                if res.neighbors.is_empty() {
                    reporter.line("No Neighbors Found");
                    return Ok(());
                }
                reporter.field("Total Neighbors", res.neighbors.len());
                for neighbor in res.neighbors.iter().take(MAX_LIST_ENTRIES) {
                    reporter.blank();
                    reporter.field("address", &neighbor.address);
                    reporter.field(
                        "numberOfAllTransactions",
                        neighbor.number_of_all_transactions,
                    );
                    reporter.field(
                        "numberOfInvalidTransactions",
                        neighbor.number_of_invalid_transactions,
                    );
                    reporter.field(
                        "numberOfNewTransactions",
                        neighbor.number_of_new_transactions,
                    );
                }
                if res.neighbors.len() > MAX_LIST_ENTRIES {
                    reporter.line("...");
                    reporter.line("list truncated");
                }
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Add neighbors to your node.
#[derive(Args, Debug, Default)]
pub struct AddNeighborsCommand {
    /// Neighbors to add to your node e.g. udp://1.2.3.4:14600
    #[arg(long, value_delimiter = ',')]
    pub neighbors: Vec<String>,
}

impl AddNeighborsCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        if self.neighbors.is_empty() {
            reporter.error(CliError::MissingOption("neighbors"));
            return Ok(());
        }
        reporter.heading("addNeighbors", client.uri());
        let req = NeighborUrisRequest {
            uris: self.neighbors,
        };
        match client.add_neighbors(req).await {
            Ok(res) => {
                reporter.success();
                reporter.field("addedNeighbors", res.added_neighbors);
                reporter.field("duration", res.duration);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Remove neighbors from your node.
#[derive(Args, Debug, Default)]
pub struct RemoveNeighborsCommand {
    /// Neighbors to remove from your node e.g. udp://1.2.3.4:14600
    #[arg(long, value_delimiter = ',')]
    pub neighbors: Vec<String>,
}

impl RemoveNeighborsCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        if self.neighbors.is_empty() {
            reporter.error(CliError::MissingOption("neighbors"));
            return Ok(());
        }
        reporter.heading("removeNeighbors", client.uri());
        let req = NeighborUrisRequest {
            uris: self.neighbors,
        };
        match client.remove_neighbors(req).await {
            Ok(res) => {
                reporter.success();
                reporter.field("removedNeighbors", res.removed_neighbors);
                reporter.field("duration", res.duration);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}
