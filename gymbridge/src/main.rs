//! # gymbridge
//!
//! Entry point for the `gymbridge` binary. Parses the command line, installs
//! the log subscriber and hands off to [`gymbridge::app::run`].

use anyhow::Result;
use clap::Parser;
use gymbridge::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    gymbridge::app::run(cli)
}

/// Logs go to stderr so stdout carries only records. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
