//! Request and response shapes for the node API
//!
//! Field names follow the node's camelCase wire format. Requests are
//! immutable once built; responses are read-only display material for
//! callers. Optional filter fields are omitted from the wire entirely
//! when unset.

use serde::{Deserialize, Serialize};

/// Filters for `findTransactions`. At least one filter list must be
/// set; the node rejects an empty query.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindTransactionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvees: Option<Vec<String>>,
}

impl FindTransactionsRequest {
    /// True when no filter list is present at all.
    pub fn is_empty(&self) -> bool {
        self.bundles.is_none()
            && self.addresses.is_none()
            && self.tags.is_none()
            && self.approvees.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTrytesRequest {
    pub hashes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetInclusionStatesRequest {
    pub transactions: Vec<String>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBalancesRequest {
    pub addresses: Vec<String>,
    pub threshold: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsToApproveRequest {
    pub depth: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachToTangleRequest {
    pub trunk_transaction: String,
    pub branch_transaction: String,
    pub min_weight_magnitude: u32,
    pub trytes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrytesRequest {
    pub trytes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckConsistencyRequest {
    pub tails: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WereAddressesSpentFromRequest {
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborUrisRequest {
    pub uris: Vec<String>,
}

/// `getNodeInfo` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfoResponse {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub app_version: String,
    #[serde(default)]
    pub latest_milestone: String,
    #[serde(default)]
    pub latest_milestone_index: u64,
    #[serde(default)]
    pub latest_solid_subtangle_milestone: String,
    #[serde(default)]
    pub latest_solid_subtangle_milestone_index: u64,
    #[serde(default)]
    pub neighbors: u32,
    #[serde(default)]
    pub packets_queue_size: u32,
    #[serde(default)]
    pub time: u64,
    #[serde(default)]
    pub tips: u64,
    #[serde(default)]
    pub transactions_to_request: u64,
    #[serde(default)]
    pub duration: u64,
}

/// One peer entry in a `getNeighbors` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighbor {
    pub address: String,
    #[serde(default)]
    pub number_of_all_transactions: u64,
    #[serde(default)]
    pub number_of_invalid_transactions: u64,
    #[serde(default)]
    pub number_of_new_transactions: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborsResponse {
    #[serde(default)]
    pub neighbors: Vec<Neighbor>,
    #[serde(default)]
    pub duration: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNeighborsResponse {
    #[serde(default)]
    pub added_neighbors: u32,
    #[serde(default)]
    pub duration: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveNeighborsResponse {
    #[serde(default)]
    pub removed_neighbors: u32,
    #[serde(default)]
    pub duration: u64,
}

/// Response shape shared by `getTips`, `findTransactions` and
/// `getMissingTransactions`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashesResponse {
    #[serde(default)]
    pub hashes: Vec<String>,
    #[serde(default)]
    pub duration: u64,
}

/// Response shape shared by `getTrytes` and `attachToTangle`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrytesResponse {
    #[serde(default)]
    pub trytes: Vec<String>,
    #[serde(default)]
    pub duration: u64,
}

/// Response shape shared by `getInclusionStates` and
/// `wereAddressesSpentFrom`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatesResponse {
    #[serde(default)]
    pub states: Vec<bool>,
    #[serde(default)]
    pub duration: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesResponse {
    #[serde(default)]
    pub balances: Vec<String>,
    #[serde(default)]
    pub milestone: String,
    #[serde(default)]
    pub milestone_index: u64,
    #[serde(default)]
    pub duration: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsToApproveResponse {
    pub trunk_transaction: String,
    pub branch_transaction: String,
    #[serde(default)]
    pub duration: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckConsistencyResponse {
    #[serde(default)]
    pub state: bool,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub duration: u64,
}

/// Responses that carry nothing beyond the call duration
/// (`broadcastTransactions`, `storeTransactions`,
/// `interruptAttachingToTangle`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationResponse {
    #[serde(default)]
    pub duration: u64,
}
