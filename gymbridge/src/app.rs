//! # gymbridge Application Logic
//!
//! Runs the parsed command line. `list` prints the translation tables,
//! `translate` loads a [`Snapshot`], pushes it through
//! [`adapter::translate_env`] and writes the record to stdout as JSON. With
//! `--watch` the snapshot is re-read after every write so a simulator can dump
//! its state on each reset and have the record follow.

use crate::cli::{Cli, Command, TranslateArgs};
use crate::watcher;
use adapter::{field_names, EnvId, Family, Record};
use anyhow::{anyhow, Context, Result};
use snapshot::Snapshot;
use std::io::{self, Write};
use std::path::Path;

/// Settings for one translation, independent of how they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Identifier to translate with. Falls back to the snapshot's own `env`.
    pub env: Option<String>,
    pub pretty: bool,
}

impl From<&TranslateArgs> for TranslateOptions {
    fn from(args: &TranslateArgs) -> Self {
        Self { env: args.env.clone(), pretty: args.pretty }
    }
}

/// Runs a parsed command line.
///
/// # Errors
///
/// Returns any error from loading or translating the snapshot, writing to
/// stdout, or starting the file watcher.
pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::List => list_envs(&mut out),
        Command::Translate(args) => {
            let options = TranslateOptions::from(&args);
            if args.watch {
                watch_snapshot(&args.snapshot, &options, &mut out)
            } else {
                let record = translate_snapshot(&args.snapshot, &options)?;
                writeln!(out, "{}", render(&record, options.pretty)?)?;
                Ok(())
            }
        }
    }
}

/// Writes every supported environment, grouped by family, with its fields.
///
/// # Errors
///
/// Propagates write failures.
pub fn list_envs(out: &mut impl Write) -> Result<()> {
    for family in Family::ALL {
        writeln!(out, "{family}:")?;
        for id in family.envs() {
            let fields = field_names(id);
            if fields.is_empty() {
                writeln!(out, "  {id}  (no fields)")?;
            } else {
                writeln!(out, "  {id}  {}", fields.join(", "))?;
            }
        }
    }
    Ok(())
}

/// Picks the identifier for `snapshot`: the explicit one if given, else the
/// one recorded in the snapshot.
///
/// # Errors
///
/// Fails if the explicit identifier is unsupported or neither source names
/// one.
pub fn resolve_env(snapshot: &Snapshot, explicit: Option<&str>) -> Result<EnvId> {
    match (explicit, snapshot.env()) {
        (Some(name), recorded) => {
            let id: EnvId = name.parse()?;
            if let Some(recorded) = recorded.filter(|r| *r != id) {
                tracing::warn!("snapshot was taken from {recorded}, translating as {id}");
            }
            Ok(id)
        }
        (None, Some(recorded)) => Ok(recorded),
        (None, None) => Err(anyhow!(
            "no environment given: pass --env or record `env` in the snapshot"
        )),
    }
}

/// Loads the snapshot at `path` and translates it.
///
/// # Errors
///
/// Fails if the snapshot cannot be loaded, no supported identifier applies,
/// or an attribute the table needs cannot be read.
pub fn translate_snapshot(path: &Path, options: &TranslateOptions) -> Result<Record> {
    let snapshot = Snapshot::from_path(path)?;
    let id = resolve_env(&snapshot, options.env.as_deref())?;
    tracing::info!("Translating {} as {id}", path.display());
    adapter::translate_env(&snapshot, id)
        .with_context(|| format!("failed to translate {} as {id}", path.display()))
}

/// Serializes a record as JSON.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn render(record: &Record, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    Ok(json)
}

fn watch_snapshot(path: &Path, options: &TranslateOptions, out: &mut impl Write) -> Result<()> {
    let watch = watcher::start(path)?;

    emit(path, options, out)?;
    for () in watch {
        emit(path, options, out)?;
    }
    Ok(())
}

/// Translates and prints once. Bad snapshots are logged and skipped so a
/// half-written file does not end the watch.
fn emit(path: &Path, options: &TranslateOptions, out: &mut impl Write) -> Result<()> {
    match translate_snapshot(path, options) {
        Ok(record) => {
            writeln!(out, "{}", render(&record, options.pretty)?)?;
            out.flush()?;
        }
        Err(e) => tracing::error!("Skipping snapshot update: {e:#}"),
    }
    Ok(())
}
