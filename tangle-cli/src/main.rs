//! Entry point for the `tangle` binary

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tangle_cli::commands::Cli;
use tangle_cli::config::NetworkConfig;
use tangle_cli::error::CliResult;
use tangle_cli::reporter::Reporter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let cli = Cli::parse();

    let mut reporter = Reporter::stdio();
    reporter.banner("Tangle Node API command line examples");

    // Config and client failures print like any other routine error;
    // the process still exits normally.
    if let Err(err) = run(cli, &mut reporter).await {
        reporter.error(err);
    }
}

async fn run(cli: Cli, reporter: &mut Reporter) -> CliResult<()> {
    debug!(config = %cli.config.display(), "loading network configuration");
    let config = NetworkConfig::load_from_file(&cli.config)?;
    let client = config.build_client()?;
    cli.command.execute(&client, reporter).await
}
