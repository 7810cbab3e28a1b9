//! ceylon command-line entry point.
//!
//! Results are printed to stdout. Logging goes to stderr so that piped
//! output (HTML, JSON) stays clean.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod render;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = args::Cli::parse();
    init_tracing(cli.log_json);

    tracing::debug!(command = ?cli.command, "starting ceylon");

    commands::run(cli).await
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
