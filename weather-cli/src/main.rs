//! Binary crate for the `waybar-weather` status-bar module.
//!
//! This crate focuses on:
//! - Parsing the (optional) CLI arguments
//! - Logging setup (stderr only; stdout carries the JSON line)
//! - Printing the record and writing the cache file

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cmd = cli::Cli::parse();
    cmd.run().await
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
