//! Tangle Node API command line examples
//!
//! One subcommand per node operation; each routine builds a request
//! from the parsed options, awaits a single [`tangle_api::NodeApi`]
//! call and formats the response (or error) through a [`reporter::Reporter`].

pub mod commands;
pub mod config;
pub mod error;
pub mod reporter;

pub use commands::{Cli, Command};
pub use error::{CliError, CliResult};
