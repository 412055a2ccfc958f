//! Network endpoint descriptor for a Tangle node

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Location of a node's HTTP API. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEndpoint {
    protocol: String,
    host: String,
    path: String,
    port: u16,
}

impl NodeEndpoint {
    /// Create a new endpoint. The protocol must be `http` or `https`,
    /// the host must be non-empty and the port non-zero. A non-empty
    /// path is normalized to carry a leading slash.
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
        port: u16,
    ) -> Result<Self, ApiError> {
        let protocol = protocol.into();
        let host = host.into();
        let path = path.into();

        if protocol != "http" && protocol != "https" {
            return Err(ApiError::InvalidEndpoint(format!(
                "unsupported protocol '{}'",
                protocol
            )));
        }
        if host.is_empty() {
            return Err(ApiError::InvalidEndpoint("host must not be empty".into()));
        }
        if port == 0 {
            return Err(ApiError::InvalidEndpoint("port must not be zero".into()));
        }

        let path = if path.is_empty() || path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        Ok(Self {
            protocol,
            host,
            path,
            port,
        })
    }

    /// Full URI of the node API, e.g. `https://node.example.org:14265/api`.
    pub fn uri(&self) -> String {
        format!("{}://{}:{}{}", self.protocol, self.host, self.port, self.path)
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl std::fmt::Display for NodeEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri())
    }
}
