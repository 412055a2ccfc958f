//! Error handling for the Tangle CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Bad or missing network configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required command option was not supplied. Carries the option
    /// name (or `/`-joined alternatives) exactly as shown in the
    /// error message.
    #[error("{0} option is required")]
    MissingOption(&'static str),

    /// A group of options that must be supplied together was
    /// incomplete.
    #[error("{0} options are required")]
    MissingOptions(&'static str),

    /// Error surfaced by the node API client
    #[error(transparent)]
    Api(#[from] tangle_api::ApiError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
