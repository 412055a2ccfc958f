//! Node API client - issues one HTTP POST per command against a node

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::endpoint::NodeEndpoint;
use crate::error::ApiError;
use crate::models::{
    AddNeighborsResponse, AttachToTangleRequest, BalancesResponse, CheckConsistencyRequest,
    CheckConsistencyResponse, DurationResponse, FindTransactionsRequest, GetBalancesRequest,
    GetInclusionStatesRequest, GetTransactionsToApproveRequest, GetTrytesRequest, HashesResponse,
    NeighborUrisRequest, NeighborsResponse, NodeInfoResponse, RemoveNeighborsResponse,
    StatesResponse, TransactionsToApproveResponse, TrytesRequest, TrytesResponse,
    WereAddressesSpentFromRequest,
};

/// Header every request must carry, per the node API contract.
pub const API_VERSION_HEADER: &str = "x-iota-api-version";

/// API version this client speaks.
pub const API_VERSION: &str = "1";

/// The full command surface of a node, one async method per operation.
///
/// `NodeClient` is the wire implementation; callers that only need the
/// surface (such as command routines under test) take `&dyn NodeApi`.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// URI of the node this handle talks to, for display purposes.
    fn uri(&self) -> &str;

    async fn get_node_info(&self) -> Result<NodeInfoResponse, ApiError>;
    async fn get_neighbors(&self) -> Result<NeighborsResponse, ApiError>;
    async fn add_neighbors(&self, req: NeighborUrisRequest)
        -> Result<AddNeighborsResponse, ApiError>;
    async fn remove_neighbors(
        &self,
        req: NeighborUrisRequest,
    ) -> Result<RemoveNeighborsResponse, ApiError>;
    async fn get_tips(&self) -> Result<HashesResponse, ApiError>;
    async fn find_transactions(
        &self,
        req: FindTransactionsRequest,
    ) -> Result<HashesResponse, ApiError>;
    async fn get_trytes(&self, req: GetTrytesRequest) -> Result<TrytesResponse, ApiError>;
    async fn get_inclusion_states(
        &self,
        req: GetInclusionStatesRequest,
    ) -> Result<StatesResponse, ApiError>;
    async fn get_balances(&self, req: GetBalancesRequest) -> Result<BalancesResponse, ApiError>;
    async fn get_transactions_to_approve(
        &self,
        req: GetTransactionsToApproveRequest,
    ) -> Result<TransactionsToApproveResponse, ApiError>;
    async fn attach_to_tangle(
        &self,
        req: AttachToTangleRequest,
    ) -> Result<TrytesResponse, ApiError>;
    async fn interrupt_attaching_to_tangle(&self) -> Result<DurationResponse, ApiError>;
    async fn broadcast_transactions(&self, req: TrytesRequest)
        -> Result<DurationResponse, ApiError>;
    async fn store_transactions(&self, req: TrytesRequest) -> Result<DurationResponse, ApiError>;
    async fn get_missing_transactions(&self) -> Result<HashesResponse, ApiError>;
    async fn check_consistency(
        &self,
        req: CheckConsistencyRequest,
    ) -> Result<CheckConsistencyResponse, ApiError>;
    async fn were_addresses_spent_from(
        &self,
        req: WereAddressesSpentFromRequest,
    ) -> Result<StatesResponse, ApiError>;
}

/// Wire envelope: the command name merged into the request body.
#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    command: &'a str,
    #[serde(flatten)]
    body: &'a T,
}

/// Body for commands that carry no arguments.
#[derive(Serialize)]
struct Empty {}

/// HTTP client for a single node endpoint
#[derive(Debug)]
pub struct NodeClient {
    uri: String,
    http: reqwest::Client,
}

impl NodeClient {
    /// Create a new client bound to `endpoint`. Extra headers from the
    /// network config are sent with every request, alongside the
    /// mandatory API version header. No network I/O happens here; the
    /// connection is established lazily on the first call.
    pub fn new(
        endpoint: &NodeEndpoint,
        additional_headers: &HashMap<String, String>,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_static(API_VERSION),
        );
        for (name, value) in additional_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            uri: endpoint.uri(),
            http,
        })
    }

    /// Issue one command against the node.
    async fn call<Req, Res>(&self, command: &str, body: &Req) -> Result<Res, ApiError>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        debug!(command, uri = %self.uri, "issuing node API call");

        let response = self
            .http
            .post(&self.uri)
            .json(&Envelope { command, body })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        decode_response(command, status, &text)
    }
}

/// Map an HTTP status and body to a typed response or error. Nodes
/// report failures as non-2xx with an `error` or `exception` field.
fn decode_response<Res>(command: &str, status: StatusCode, body: &str) -> Result<Res, ApiError>
where
    Res: DeserializeOwned,
{
    if status.is_success() {
        return serde_json::from_str(body).map_err(|source| ApiError::MalformedResponse {
            command: command.to_string(),
            source,
        });
    }

    #[derive(Deserialize)]
    struct NodeErrorBody {
        error: Option<String>,
        exception: Option<String>,
    }

    let message = serde_json::from_str::<NodeErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.exception))
        .unwrap_or_else(|| format!("HTTP status {}", status));

    Err(ApiError::Node {
        command: command.to_string(),
        message,
    })
}

#[async_trait]
impl NodeApi for NodeClient {
    fn uri(&self) -> &str {
        &self.uri
    }

    async fn get_node_info(&self) -> Result<NodeInfoResponse, ApiError> {
        self.call("getNodeInfo", &Empty {}).await
    }

    async fn get_neighbors(&self) -> Result<NeighborsResponse, ApiError> {
        self.call("getNeighbors", &Empty {}).await
    }

    async fn add_neighbors(
        &self,
        req: NeighborUrisRequest,
    ) -> Result<AddNeighborsResponse, ApiError> {
        self.call("addNeighbors", &req).await
    }

    async fn remove_neighbors(
        &self,
        req: NeighborUrisRequest,
    ) -> Result<RemoveNeighborsResponse, ApiError> {
        self.call("removeNeighbors", &req).await
    }

    async fn get_tips(&self) -> Result<HashesResponse, ApiError> {
        self.call("getTips", &Empty {}).await
    }

    async fn find_transactions(
        &self,
        req: FindTransactionsRequest,
    ) -> Result<HashesResponse, ApiError> {
        self.call("findTransactions", &req).await
    }

    async fn get_trytes(&self, req: GetTrytesRequest) -> Result<TrytesResponse, ApiError> {
        self.call("getTrytes", &req).await
    }

    async fn get_inclusion_states(
        &self,
        req: GetInclusionStatesRequest,
    ) -> Result<StatesResponse, ApiError> {
        self.call("getInclusionStates", &req).await
    }

    async fn get_balances(&self, req: GetBalancesRequest) -> Result<BalancesResponse, ApiError> {
        self.call("getBalances", &req).await
    }

    async fn get_transactions_to_approve(
        &self,
        req: GetTransactionsToApproveRequest,
    ) -> Result<TransactionsToApproveResponse, ApiError> {
        self.call("getTransactionsToApprove", &req).await
    }

    async fn attach_to_tangle(
        &self,
        req: AttachToTangleRequest,
    ) -> Result<TrytesResponse, ApiError> {
        self.call("attachToTangle", &req).await
    }

    async fn interrupt_attaching_to_tangle(&self) -> Result<DurationResponse, ApiError> {
        self.call("interruptAttachingToTangle", &Empty {}).await
    }

    async fn broadcast_transactions(
        &self,
        req: TrytesRequest,
    ) -> Result<DurationResponse, ApiError> {
        self.call("broadcastTransactions", &req).await
    }

    async fn store_transactions(&self, req: TrytesRequest) -> Result<DurationResponse, ApiError> {
        self.call("storeTransactions", &req).await
    }

    async fn get_missing_transactions(&self) -> Result<HashesResponse, ApiError> {
        self.call("getMissingTransactions", &Empty {}).await
    }

    async fn check_consistency(
        &self,
        req: CheckConsistencyRequest,
    ) -> Result<CheckConsistencyResponse, ApiError> {
        self.call("checkConsistency", &req).await
    }

    async fn were_addresses_spent_from(
        &self,
        req: WereAddressesSpentFromRequest,
    ) -> Result<StatesResponse, ApiError> {
        self.call("wereAddressesSpentFrom", &req).await
    }
}
