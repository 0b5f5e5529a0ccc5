//! Log entry extracted from a markdown document.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub date: String,
    pub subject: String,
    pub status: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.date, self.subject, self.status)
    }
}

#[derive(Debug, Clone, Serialize)]
/// Result of writing the summary file.
pub struct LogSummary {
    pub path: PathBuf,
    /// Rendered lines, sorted ascending.
    pub lines: Vec<String>,
    pub count: usize,
}
