//! Command routine scenarios against a scripted mock node

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clap::error::ErrorKind;
use clap::Parser;

use tangle_api::models::{
    AddNeighborsResponse, AttachToTangleRequest, BalancesResponse, CheckConsistencyRequest,
    CheckConsistencyResponse, DurationResponse, FindTransactionsRequest, GetBalancesRequest,
    GetInclusionStatesRequest, GetTransactionsToApproveRequest, GetTrytesRequest, HashesResponse,
    NeighborUrisRequest, NeighborsResponse, NodeInfoResponse, RemoveNeighborsResponse,
    StatesResponse, TransactionsToApproveResponse, TrytesRequest, TrytesResponse,
    WereAddressesSpentFromRequest,
};
use tangle_api::{ApiError, NodeApi};
use tangle_cli::commands::{transactions, Cli, Command};
use tangle_cli::reporter::Reporter;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn reporter() -> (Reporter, SharedBuf, SharedBuf) {
    let out = SharedBuf::default();
    let err = SharedBuf::default();
    let reporter = Reporter::new(Box::new(out.clone()), Box::new(err.clone()), false);
    (reporter, out, err)
}

/// Scripted node: counts calls and returns canned data, or a node
/// error when `fail_with` is set.
#[derive(Default)]
struct MockNode {
    calls: AtomicUsize,
    states: Vec<bool>,
    hashes: Vec<String>,
    fail_with: Option<String>,
}

impl MockNode {
    fn with_states(states: Vec<bool>) -> Self {
        Self {
            states,
            ..Default::default()
        }
    }

    fn with_hashes(hashes: Vec<String>) -> Self {
        Self {
            hashes,
            ..Default::default()
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn outcome<T>(&self, command: &str, ok: T) -> Result<T, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(ApiError::Node {
                command: command.to_string(),
                message: message.clone(),
            }),
            None => Ok(ok),
        }
    }

    fn hashes_response(&self) -> HashesResponse {
        HashesResponse {
            hashes: self.hashes.clone(),
            duration: 0,
        }
    }

    fn states_response(&self) -> StatesResponse {
        StatesResponse {
            states: self.states.clone(),
            duration: 3,
        }
    }
}

fn defaulted<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> T {
    serde_json::from_value(body).unwrap()
}

#[async_trait]
impl NodeApi for MockNode {
    fn uri(&self) -> &str {
        "http://localhost:14265"
    }

    async fn get_node_info(&self) -> Result<NodeInfoResponse, ApiError> {
        self.outcome("getNodeInfo", defaulted(serde_json::json!({})))
    }

    async fn get_neighbors(&self) -> Result<NeighborsResponse, ApiError> {
        self.outcome("getNeighbors", defaulted(serde_json::json!({})))
    }

    async fn add_neighbors(
        &self,
        _req: NeighborUrisRequest,
    ) -> Result<AddNeighborsResponse, ApiError> {
        self.outcome("addNeighbors", defaulted(serde_json::json!({})))
    }

    async fn remove_neighbors(
        &self,
        _req: NeighborUrisRequest,
    ) -> Result<RemoveNeighborsResponse, ApiError> {
        self.outcome("removeNeighbors", defaulted(serde_json::json!({})))
    }

    async fn get_tips(&self) -> Result<HashesResponse, ApiError> {
        self.outcome("getTips", self.hashes_response())
    }

    async fn find_transactions(
        &self,
        _req: FindTransactionsRequest,
    ) -> Result<HashesResponse, ApiError> {
        self.outcome("findTransactions", self.hashes_response())
    }

    async fn get_trytes(&self, _req: GetTrytesRequest) -> Result<TrytesResponse, ApiError> {
        self.outcome(
            "getTrytes",
            TrytesResponse {
                trytes: self.hashes.clone(),
                duration: 0,
            },
        )
    }

    async fn get_inclusion_states(
        &self,
        _req: GetInclusionStatesRequest,
    ) -> Result<StatesResponse, ApiError> {
        self.outcome("getInclusionStates", self.states_response())
    }

    async fn get_balances(&self, _req: GetBalancesRequest) -> Result<BalancesResponse, ApiError> {
        self.outcome("getBalances", defaulted(serde_json::json!({})))
    }

    async fn get_transactions_to_approve(
        &self,
        _req: GetTransactionsToApproveRequest,
    ) -> Result<TransactionsToApproveResponse, ApiError> {
        self.outcome(
            "getTransactionsToApprove",
            defaulted(serde_json::json!({
                "trunkTransaction": "TRUNK9",
                "branchTransaction": "BRANCH9"
            })),
        )
    }

    async fn attach_to_tangle(
        &self,
        _req: AttachToTangleRequest,
    ) -> Result<TrytesResponse, ApiError> {
        self.outcome(
            "attachToTangle",
            TrytesResponse {
                trytes: self.hashes.clone(),
                duration: 0,
            },
        )
    }

    async fn interrupt_attaching_to_tangle(&self) -> Result<DurationResponse, ApiError> {
        self.outcome("interruptAttachingToTangle", DurationResponse { duration: 1 })
    }

    async fn broadcast_transactions(
        &self,
        _req: TrytesRequest,
    ) -> Result<DurationResponse, ApiError> {
        self.outcome("broadcastTransactions", DurationResponse { duration: 1 })
    }

    async fn store_transactions(&self, _req: TrytesRequest) -> Result<DurationResponse, ApiError> {
        self.outcome("storeTransactions", DurationResponse { duration: 1 })
    }

    async fn get_missing_transactions(&self) -> Result<HashesResponse, ApiError> {
        self.outcome("getMissingTransactions", self.hashes_response())
    }

    async fn check_consistency(
        &self,
        _req: CheckConsistencyRequest,
    ) -> Result<CheckConsistencyResponse, ApiError> {
        self.outcome(
            "checkConsistency",
            defaulted(serde_json::json!({ "state": true })),
        )
    }

    async fn were_addresses_spent_from(
        &self,
        _req: WereAddressesSpentFromRequest,
    ) -> Result<StatesResponse, ApiError> {
        self.outcome("wereAddressesSpentFrom", self.states_response())
    }
}

fn parse(args: &[&str]) -> Command {
    Cli::try_parse_from(args).unwrap().command
}

#[tokio::test]
async fn inclusion_states_without_options_makes_no_call() {
    let command = parse(&["tangle", "getInclusionStates"]);
    let node = MockNode::default();
    let (mut reporter, out, err) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    assert_eq!(node.call_count(), 0);
    assert!(out.contents().is_empty());
    assert_eq!(err.contents(), "ERROR: transactions/tips option is required\n");
}

#[tokio::test]
async fn inclusion_states_lists_each_state() {
    let command = parse(&[
        "tangle",
        "getInclusionStates",
        "--transactions",
        "T1,T2",
        "--tips",
        "P1",
    ]);
    let node = MockNode::with_states(vec![true, false]);
    let (mut reporter, out, err) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    assert_eq!(node.call_count(), 1);
    let text = out.contents();
    assert!(text.contains("==> Performing getInclusionStates on http://localhost:14265"));
    assert!(text.contains("<== Success"));
    assert!(text.contains("\tTotal States: 2\n"));
    assert!(text.contains("\tstate: true\n"));
    assert!(text.contains("\tstate: false\n"));
    assert!(err.contents().is_empty());
}

#[tokio::test]
async fn find_transactions_without_filters_makes_no_call() {
    let command = parse(&["tangle", "findTransactions"]);
    let node = MockNode::default();
    let (mut reporter, _, err) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    assert_eq!(node.call_count(), 0);
    assert_eq!(
        err.contents(),
        "ERROR: bundles/addresses/tags/approvees option is required\n"
    );
}

#[tokio::test]
async fn find_transactions_truncates_long_result() {
    let command = transactions::FindTransactionsCommand {
        addresses: Some(vec!["ADDR9".to_string()]),
        ..Default::default()
    };
    let hashes: Vec<String> = (0..75).map(|i| format!("HASH{}", i)).collect();
    let node = MockNode::with_hashes(hashes);
    let (mut reporter, out, _) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    let text = out.contents();
    assert!(text.contains("\tTotal Transactions: 75\n"));
    assert_eq!(text.matches("\thash: ").count(), 50);
    assert!(text.contains("\tlist truncated\n"));
}

#[tokio::test]
async fn find_transactions_reports_empty_result() {
    let command = transactions::FindTransactionsCommand {
        tags: Some(vec!["TAG9".to_string()]),
        ..Default::default()
    };
    let node = MockNode::default();
    let (mut reporter, out, _) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    let text = out.contents();
    assert!(text.contains("\tNo Transactions Found\n"));
    assert!(!text.contains("Total Transactions"));
}

#[tokio::test]
async fn attach_to_tangle_requires_all_four_options() {
    // minWeightMagnitude missing; the other three present
    let command = parse(&[
        "tangle",
        "attachToTangle",
        "--trunkTransaction",
        "TRUNK9",
        "--branchTransaction",
        "BRANCH9",
        "--trytes",
        "TRYTES9",
    ]);
    let node = MockNode::default();
    let (mut reporter, _, err) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    assert_eq!(node.call_count(), 0);
    assert_eq!(
        err.contents(),
        "ERROR: trunkTransaction/branchTransaction/minWeightMagnitude/trytes options are required\n"
    );
}

#[tokio::test]
async fn attach_to_tangle_with_all_options_calls_node() {
    let command = parse(&[
        "tangle",
        "attachToTangle",
        "--trunkTransaction",
        "TRUNK9",
        "--branchTransaction",
        "BRANCH9",
        "--minWeightMagnitude",
        "18",
        "--trytes",
        "TRYTES9A,TRYTES9B",
    ]);
    let node = MockNode::with_hashes(vec!["ATTACHED9".to_string()]);
    let (mut reporter, out, _) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    assert_eq!(node.call_count(), 1);
    assert!(out.contents().contains("\ttrytes: ATTACHED9\n"));
}

#[tokio::test]
async fn add_neighbors_requires_neighbors_option() {
    let command = parse(&["tangle", "addNeighbors"]);
    let node = MockNode::default();
    let (mut reporter, _, err) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    assert_eq!(node.call_count(), 0);
    assert_eq!(err.contents(), "ERROR: neighbors option is required\n");
}

#[tokio::test]
async fn failed_call_prints_failure_and_returns_normally() {
    let command = parse(&["tangle", "getNodeInfo"]);
    let node = MockNode::failing("The node is not synced");
    let (mut reporter, out, err) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    assert_eq!(node.call_count(), 1);
    // Heading was already printed before the call failed
    assert!(out.contents().contains("==> Performing getNodeInfo"));
    let text = err.contents();
    assert!(text.starts_with("<== Failed\n\n"));
    assert!(text.contains("The node is not synced"));
}

#[tokio::test]
async fn failed_list_call_prints_no_partial_list() {
    let command = parse(&["tangle", "getTips"]);
    let node = MockNode::failing("timeout");
    let (mut reporter, out, _) = reporter();

    command.execute(&node, &mut reporter).await.unwrap();

    let text = out.contents();
    assert!(!text.contains("Total"));
    assert!(!text.contains("hash:"));
}

#[test]
fn unknown_subcommand_is_a_parse_error() {
    let err = Cli::try_parse_from(["tangle", "foo"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    assert!(err.to_string().contains("foo"));
}

#[test]
fn bare_invocation_shows_help() {
    let err = Cli::try_parse_from(["tangle"]).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[test]
fn comma_separated_lists_are_split() {
    match parse(&["tangle", "getTrytes", "--hashes", "A9,B9,C9"]) {
        Command::GetTrytes(cmd) => assert_eq!(cmd.hashes, vec!["A9", "B9", "C9"]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn get_balances_threshold_defaults_to_100() {
    match parse(&["tangle", "getBalances", "--addresses", "ADDR9"]) {
        Command::GetBalances(cmd) => {
            assert_eq!(cmd.threshold, 100);
            assert_eq!(cmd.addresses, vec!["ADDR9"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
