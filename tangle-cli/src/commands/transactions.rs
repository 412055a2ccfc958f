//! Transaction commands: findTransactions, getTrytes,
//! getInclusionStates, getBalances, broadcastTransactions,
//! storeTransactions, checkConsistency and wereAddressesSpentFrom

use clap::Args;
use tangle_api::models::{
    CheckConsistencyRequest, FindTransactionsRequest, GetBalancesRequest,
    GetInclusionStatesRequest, GetTrytesRequest, TrytesRequest, WereAddressesSpentFromRequest,
};
use tangle_api::NodeApi;

use crate::error::{CliError, CliResult};
use crate::reporter::Reporter;

/// Find the transactions which match the specified input.
#[derive(Args, Debug, Default)]
pub struct FindTransactionsCommand {
    /// Hashes to search for in bundles
    #[arg(long, value_delimiter = ',')]
    pub bundles: Option<Vec<String>>,

    /// Hashes to search for in addresses
    #[arg(long, value_delimiter = ',')]
    pub addresses: Option<Vec<String>>,

    /// Hashes to search for in tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Hashes to search for which confirm specified transaction
    #[arg(long, value_delimiter = ',')]
    pub approvees: Option<Vec<String>>,
}

impl FindTransactionsCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        let req = FindTransactionsRequest {
            bundles: self.bundles,
            addresses: self.addresses,
            tags: self.tags,
            approvees: self.approvees,
        };
        if req.is_empty() {
            reporter.error(CliError::MissingOption("bundles/addresses/tags/approvees"));
            return Ok(());
        }
        reporter.heading("findTransactions", client.uri());
        match client.find_transactions(req).await {
            Ok(res) => {
                reporter.success();
                reporter.list("Transactions", "hash", &res.hashes);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Get the trytes for the hashes.
#[derive(Args, Debug, Default)]
pub struct GetTrytesCommand {
    /// Hashes to return the trytes for
    #[arg(long, value_delimiter = ',')]
    pub hashes: Vec<String>,
}

impl GetTrytesCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        if self.hashes.is_empty() {
            reporter.error(CliError::MissingOption("hashes"));
            return Ok(());
        }
        reporter.heading("getTrytes", client.uri());
        let req = GetTrytesRequest {
            hashes: self.hashes,
        };
        match client.get_trytes(req).await {
            Ok(res) => {
                reporter.success();
                reporter.list("Trytes", "trytes", &res.trytes);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Get the inclusion states of a set of transactions.
#[derive(Args, Debug, Default)]
pub struct GetInclusionStatesCommand {
    /// Hashes to get inclusion states for
    #[arg(long, value_delimiter = ',')]
    pub transactions: Vec<String>,

    /// Hashes of the tips to check inclusion against
    #[arg(long, value_delimiter = ',')]
    pub tips: Vec<String>,
}

impl GetInclusionStatesCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        if self.transactions.is_empty() && self.tips.is_empty() {
            reporter.error(CliError::MissingOption("transactions/tips"));
            return Ok(());
        }
        reporter.heading("getInclusionStates", client.uri());
        let req = GetInclusionStatesRequest {
            transactions: self.transactions,
            tips: self.tips,
        };
        match client.get_inclusion_states(req).await {
            Ok(res) => {
                reporter.success();
                reporter.list("States", "state", &res.states);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Get the balances of a set of addresses.
#[derive(Args, Debug)]
pub struct GetBalancesCommand {
    /// Hashes to get balances for
    #[arg(long, value_delimiter = ',')]
    pub addresses: Vec<String>,

    /// Confirmation threshold
    #[arg(long, default_value_t = 100)]
    pub threshold: u8,
}

impl GetBalancesCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        if self.addresses.is_empty() {
            reporter.error(CliError::MissingOption("addresses"));
            return Ok(());
        }
        reporter.heading("getBalances", client.uri());
        let req = GetBalancesRequest {
            addresses: self.addresses,
            threshold: self.threshold,
        };
        match client.get_balances(req).await {
            Ok(res) => {
                reporter.success();
                reporter.field("milestone", &res.milestone);
                reporter.field("milestoneIndex", res.milestone_index);
                reporter.blank();
                reporter.list("Balances", "balance", &res.balances);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Broadcast a list of transactions to all neighbors.
#[derive(Args, Debug, Default)]
pub struct BroadcastTransactionsCommand {
    /// List of trytes (raw transaction data) to broadcast
    #[arg(long, value_delimiter = ',')]
    pub trytes: Vec<String>,
}

impl BroadcastTransactionsCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        if self.trytes.is_empty() {
            reporter.error(CliError::MissingOption("trytes"));
            return Ok(());
        }
        reporter.heading("broadcastTransactions", client.uri());
        let req = TrytesRequest {
            trytes: self.trytes,
        };
        match client.broadcast_transactions(req).await {
            Ok(res) => {
                reporter.success();
                reporter.field("duration", res.duration);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Store transactions into the local storage.
#[derive(Args, Debug, Default)]
pub struct StoreTransactionsCommand {
    /// List of trytes (raw transaction data) to store
    #[arg(long, value_delimiter = ',')]
    pub trytes: Vec<String>,
}

impl StoreTransactionsCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        if self.trytes.is_empty() {
            reporter.error(CliError::MissingOption("trytes"));
            return Ok(());
        }
        reporter.heading("storeTransactions", client.uri());
        let req = TrytesRequest {
            trytes: self.trytes,
        };
        match client.store_transactions(req).await {
            Ok(res) => {
                reporter.success();
                reporter.field("duration", res.duration);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Check the consistency of tail hashes.
#[derive(Args, Debug, Default)]
pub struct CheckConsistencyCommand {
    /// Hashes for tails to check consistency
    #[arg(long, value_delimiter = ',')]
    pub tails: Vec<String>,
}

impl CheckConsistencyCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        if self.tails.is_empty() {
            reporter.error(CliError::MissingOption("tails"));
            return Ok(());
        }
        reporter.heading("checkConsistency", client.uri());
        let req = CheckConsistencyRequest { tails: self.tails };
        match client.check_consistency(req).await {
            Ok(res) => {
                reporter.success();
                reporter.field("state", res.state);
                if let Some(info) = &res.info {
                    reporter.field("info", info);
                }
                reporter.field("duration", res.duration);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}

/// Have the requested addresses been spent from already.
#[derive(Args, Debug, Default)]
pub struct WereAddressesSpentFromCommand {
    /// Hashes of the addresses to check
    #[arg(long, value_delimiter = ',')]
    pub addresses: Vec<String>,
}

impl WereAddressesSpentFromCommand {
    pub async fn execute(self, client: &dyn NodeApi, reporter: &mut Reporter) -> CliResult<()> {
        if self.addresses.is_empty() {
            reporter.error(CliError::MissingOption("addresses"));
            return Ok(());
        }
        reporter.heading("wereAddressesSpentFrom", client.uri());
        let req = WereAddressesSpentFromRequest {
            addresses: self.addresses,
        };
        match client.were_addresses_spent_from(req).await {
            Ok(res) => {
                reporter.success();
                reporter.list("States", "state", &res.states);
            }
            Err(err) => reporter.failure(err),
        }
        Ok(())
    }
}
