//! Command line definition.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gymbridge", version, about = "Translate simulator state snapshots into step records")]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported environments and the fields each one produces.
    List,
    /// Translate a JSON snapshot of a simulator object into a record.
    Translate(TranslateArgs),
}

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Snapshot file to read.
    pub snapshot: PathBuf,

    /// Environment identifier. Overrides the snapshot's `env` entry.
    #[arg(short, long)]
    pub env: Option<String>,

    /// Pretty-print the JSON record.
    #[arg(long)]
    pub pretty: bool,

    /// Re-translate every time the snapshot file is rewritten.
    #[arg(short, long)]
    pub watch: bool,
}
