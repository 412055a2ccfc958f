//! Error types for the node API client

use thiserror::Error;

/// Errors surfaced by [`crate::NodeClient`]
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint descriptor could not be built
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// An additional header name or value was not valid HTTP
    #[error("Invalid header '{0}'")]
    InvalidHeader(String),

    /// The HTTP request itself failed (connect, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered with an error body
    #[error("Node error for command '{command}': {message}")]
    Node { command: String, message: String },

    /// The node answered 2xx but the body did not match the expected shape
    #[error("Malformed response for command '{command}': {source}")]
    MalformedResponse {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short kind tag used when formatting errors for the console.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidEndpoint(_) => "endpoint",
            ApiError::InvalidHeader(_) => "header",
            ApiError::Transport(_) => "transport",
            ApiError::Node { .. } => "node",
            ApiError::MalformedResponse { .. } => "response",
        }
    }
}
