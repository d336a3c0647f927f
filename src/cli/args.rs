use crate::config::{RATE_FILE_NAME, RECORD_FILE_NAME};
use crate::io::batch_loader::LoadTask;
use crate::types::InputKind;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Track payments per currency and report them every minute
#[derive(Parser, Debug)]
#[command(name = "payment-tracker")]
#[command(
    about = "Track payments per currency and report them every minute",
    long_about = None
)]
pub struct CliArgs {
    /// Files to load at startup: a record file, optionally followed by a rate file
    #[arg(
        value_name = "FILE",
        num_args = 0..=2,
        help = "record.txt or rate.txt alone, or a record file followed by a rate file"
    )]
    pub files: Vec<PathBuf>,
}

impl CliArgs {
    /// Decide which files to load and as which kind
    ///
    /// - no files: nothing to load
    /// - one file: loaded only if its name is `record.txt` or `rate.txt`
    /// - two files: the first is records, the second is rates
    pub fn load_plan(&self) -> Vec<LoadTask> {
        match self.files.as_slice() {
            [] => Vec::new(),
            [only] => match recognized_kind(only) {
                Some(kind) => vec![LoadTask::new(only, kind)],
                None => {
                    warn!(
                        path = %only.display(),
                        "Unrecognized file name, expected {} or {}; nothing loaded",
                        RECORD_FILE_NAME,
                        RATE_FILE_NAME
                    );
                    Vec::new()
                }
            },
            [records, rates, ..] => vec![
                LoadTask::new(records, InputKind::RecordFile),
                LoadTask::new(rates, InputKind::RateFile),
            ],
        }
    }
}

fn recognized_kind(path: &Path) -> Option<InputKind> {
    match path.file_name()?.to_str()? {
        RECORD_FILE_NAME => Some(InputKind::RecordFile),
        RATE_FILE_NAME => Some(InputKind::RateFile),
        _ => None,
    }
}
