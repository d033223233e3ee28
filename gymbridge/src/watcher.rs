//! # Snapshot Watching
//!
//! Notifies the caller whenever a snapshot file is written. A simulator dumps
//! its state to the same file on every reset; each write becomes one change
//! on the returned [`SnapshotWatch`].
//!
//! One write usually arrives as several raw events (truncate, then data,
//! sometimes a metadata touch). Events are coalesced until the file has been
//! quiet for [`SETTLE`], so each reset is reported once and the reader never
//! sees the truncated file.
//!
//! The parent directory is watched rather than the file itself, because many
//! writers replace the file (write to a temporary, then rename) and a watch on
//! the old inode would go quiet after the first reset.

use anyhow::{anyhow, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::ffi::OsString;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;
use tracing::{debug, error, info};

/// How long the snapshot must stay untouched before a change is reported.
pub const SETTLE: Duration = Duration::from_millis(100);

/// A running watch on one snapshot file.
///
/// Dropping it stops the watch. Iterating blocks until the next settled
/// change and ends when the underlying watcher shuts down.
pub struct SnapshotWatch {
    _watcher: RecommendedWatcher,
    changes: Changes,
}

impl SnapshotWatch {
    /// Blocks until the snapshot has been written and has settled.
    ///
    /// Returns `None` once the watcher has shut down.
    pub fn next_change(&self) -> Option<()> {
        self.changes.wait(None)
    }

    /// Like [`SnapshotWatch::next_change`], giving up if no write starts
    /// within `timeout`.
    pub fn next_change_timeout(&self, timeout: Duration) -> Option<()> {
        self.changes.wait(Some(timeout))
    }
}

impl Iterator for SnapshotWatch {
    type Item = ();

    fn next(&mut self) -> Option<()> {
        self.next_change()
    }
}

/// Raw write notifications, merged into one per burst.
struct Changes {
    rx: Receiver<()>,
    settle: Duration,
}

impl Changes {
    fn wait(&self, timeout: Option<Duration>) -> Option<()> {
        match timeout {
            None => self.rx.recv().ok()?,
            Some(timeout) => self.rx.recv_timeout(timeout).ok()?,
        }
        let mut merged = 0_usize;
        loop {
            match self.rx.recv_timeout(self.settle) {
                Ok(()) => merged += 1,
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
            }
        }
        if merged > 0 {
            debug!("Merged {merged} extra events into one snapshot change");
        }
        Some(())
    }
}

/// Starts watching `snapshot`.
///
/// # Errors
///
/// Fails if `snapshot` has no file name, its directory does not exist, or the
/// watcher cannot be created.
pub fn start(snapshot: &Path) -> Result<SnapshotWatch> {
    let file_name = snapshot
        .file_name()
        .map(OsString::from)
        .ok_or_else(|| anyhow!("snapshot path {} has no file name", snapshot.display()))?;
    let directory = match snapshot.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !directory.exists() {
        return Err(anyhow!("snapshot directory {} not found", directory.display()));
    }

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        handle_file_event(result, &file_name, &tx);
    })
    .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

    watcher
        .watch(directory, RecursiveMode::NonRecursive)
        .map_err(|e| anyhow!("Failed to watch {}: {}", directory.display(), e))?;

    info!("Watching {} for snapshot updates", snapshot.display());
    Ok(SnapshotWatch { _watcher: watcher, changes: Changes { rx, settle: SETTLE } })
}

fn handle_file_event(result: notify::Result<Event>, file_name: &OsString, tx: &Sender<()>) {
    match result {
        Ok(event) if is_snapshot_write(&event, file_name) => {
            debug!("Snapshot changed: {:?}", event.kind);
            // Receiver gone means the watch loop ended; nothing left to notify.
            let _ = tx.send(());
        }
        Ok(_) => {}
        Err(e) => error!("File watcher error: {:?}", e),
    }
}

/// True for creations and modifications that touch the watched file.
fn is_snapshot_write(event: &Event, file_name: &OsString) -> bool {
    if !event.kind.is_modify() && !event.kind.is_create() {
        return false;
    }
    event
        .paths
        .iter()
        .any(|path| path.file_name().is_some_and(|name| name == file_name.as_os_str()))
}
