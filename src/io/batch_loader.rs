//! One-shot file loading at startup
//!
//! Files are read line by line with tokio's buffered reader. Each line goes
//! through [`ingest_line`]; record files additionally echo every raw line,
//! valid or not, after it has been handled.
//!
//! # Error Handling
//!
//! - A missing file is not an error: nothing is loaded and nothing is printed.
//! - Any other open failure, or a read failure part way through, is logged and
//!   stops that file. Lines already applied stay applied.
//! - Malformed lines, including lines that are not valid UTF-8, are reported
//!   on the console and skipped.

use crate::core::TotalsStore;
use crate::io::console::Console;
use crate::io::ingest::ingest_line;
use crate::io::lines::LossyLines;
use crate::types::{InputKind, TrackerError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::BufReader;
use tracing::{debug, error, info};

/// A file to load and how to interpret its lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTask {
    pub path: PathBuf,
    pub kind: InputKind,
}

impl LoadTask {
    pub fn new(path: impl Into<PathBuf>, kind: InputKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Result of loading one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file does not exist; nothing was loaded
    Missing,
    /// The whole file was read
    Loaded { lines: u64 },
    /// Opening or reading failed; lines handled before that stay applied
    Aborted(TrackerError),
}

/// Load a single file into `store`
///
/// Bytes that are not valid UTF-8 make that line malformed; reading goes on.
pub async fn load_file<S: TotalsStore + ?Sized>(
    path: &Path,
    kind: InputKind,
    store: &S,
    console: &Console,
) -> LoadOutcome {
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), %kind, "File not found, skipping");
            return LoadOutcome::Missing;
        }
        Err(e) => {
            let error = TrackerError::file_open(path, &e);
            error!(%error, %kind, "Skipping file");
            return LoadOutcome::Aborted(error);
        }
    };

    let mut lines = LossyLines::new(BufReader::new(file));
    let mut count = 0u64;
    let mut rejected = 0u64;

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                let error = TrackerError::file_read(path, count, &e);
                error!(%error, %kind, "Stopped reading file");
                return LoadOutcome::Aborted(error);
            }
        };

        count += 1;
        if !ingest_line(&line, kind, store, console) {
            rejected += 1;
        }

        if kind.echoes() {
            console.line(&line);
        }
    }

    info!(path = %path.display(), %kind, lines = count, rejected, "Loaded file");
    LoadOutcome::Loaded { lines: count }
}

/// Load every task in order, each to completion before the next
pub async fn load_plan<S: TotalsStore + ?Sized>(
    plan: &[LoadTask],
    store: &S,
    console: &Console,
) -> Vec<LoadOutcome> {
    let mut outcomes = Vec::with_capacity(plan.len());
    for task in plan {
        outcomes.push(load_file(&task.path, task.kind, store, console).await);
    }
    outcomes
}
