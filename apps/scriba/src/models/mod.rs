//! Shared data models for header and logs results.

pub mod log_entry;

use serde::Serialize;
use std::path::PathBuf;

pub use log_entry::{LogEntry, LogSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// What happened to a single candidate file.
pub enum Outcome {
    Added,
    Skipped,
    Errored,
}

#[derive(Debug, Clone, Serialize)]
/// A single visited source file and its outcome.
pub struct FileRecord {
    pub path: PathBuf,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Lower-cased `.ext` for `path`; empty string when it has none.
pub fn extension_of(path: &std::path::Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
/// Counters printed at the end of a header run.
pub struct HeaderCounts {
    pub added: usize,
    pub skipped: usize,
    pub errored: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
/// Results container for a header run.
pub struct HeaderReport {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub wrote: bool,
    pub files: Vec<FileRecord>,
}

impl HeaderReport {
    pub fn counts(&self) -> HeaderCounts {
        let mut c = HeaderCounts::default();
        for f in &self.files {
            match f.outcome {
                Outcome::Added => c.added += 1,
                Outcome::Skipped => c.skipped += 1,
                Outcome::Errored => c.errored += 1,
            }
        }
        c.total = c.added + c.skipped + c.errored;
        c
    }

    /// True when check mode found files without the header.
    pub fn missing_headers(&self) -> bool {
        !self.wrote && self.files.iter().any(|f| f.outcome == Outcome::Added)
    }
}
