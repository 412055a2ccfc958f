//! Network configuration for the Tangle CLI
//!
//! The config file is a JSON document selecting the node to talk to:
//!
//! ```json
//! {
//!     "protocol": "https",
//!     "host": "node.example.org",
//!     "path": "/",
//!     "port": 443,
//!     "additionalHeaders": { "X-Api-Key": "secret" }
//! }
//! ```
//!
//! `protocol`, `host` and `port` are required; `path` and
//! `additionalHeaders` are optional. It is loaded once at startup and
//! immutable for the rest of the process.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tangle_api::{NodeClient, NodeEndpoint};

use crate::error::{CliError, CliResult};

/// Endpoint and header settings loaded from the JSON config file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub protocol: String,
    pub host: String,
    #[serde(default)]
    pub path: String,
    pub port: u16,
    #[serde(default)]
    pub additional_headers: HashMap<String, String>,
}

impl NetworkConfig {
    /// Load the configuration from `path`. Missing or malformed
    /// required fields produce a [`CliError::Config`] naming the field.
    pub fn load_from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            CliError::config(format!("invalid network config {}: {}", path.display(), e))
        })
    }

    /// Typed endpoint descriptor for the configured node.
    pub fn endpoint(&self) -> CliResult<NodeEndpoint> {
        NodeEndpoint::new(&self.protocol, &self.host, &self.path, self.port)
            .map_err(|e| CliError::config(e.to_string()))
    }

    /// Construct the transport-bound client handle. Performs no
    /// network I/O; the connection is established on the first call.
    pub fn build_client(&self) -> CliResult<NodeClient> {
        let endpoint = self.endpoint()?;
        NodeClient::new(&endpoint, &self.additional_headers)
            .map_err(|e| CliError::config(e.to_string()))
    }
}
