//! Markdown log summarizer.
//!
//! Reads every `*.md` file directly inside a folder, extracts the
//! `**Data:**`, `# LOGnnn - <title>` and `**Status:**` fields, and writes one
//! `date - subject - status` line per document, sorted ascending, to a summary
//! file in the same folder.
//!
//! Unlike the header runner there is no per-file isolation here: the first
//! I/O failure aborts the run.

use crate::error::{Result, ScribaError};
use crate::models::{LogEntry, LogSummary};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

pub const DATE_MISSING: &str = "Data não encontrada";
pub const SUBJECT_MISSING: &str = "Assunto não encontrado";
pub const STATUS_MISSING: &str = "Status não encontrado";

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*Data:\*\* ([\d-]+)"));
static SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"# (LOG\d+) - (.+)"));
static STATUS_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*Status:\*\* (.+)"));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(err) => panic!("hardcoded log pattern must compile: {err}"),
    }
}

fn capture(re: &Regex, content: &str, group: usize, missing: &str) -> String {
    re.captures(content)
        .and_then(|c| c.get(group))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| missing.to_string())
}

/// Turn `\r\n` and lone `\r` into `\n` so captures never end in `\r`.
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Extract the three fields; a field without a match gets its placeholder.
pub fn extract_log_info(content: &str) -> LogEntry {
    let content = normalize_newlines(content);
    LogEntry {
        date: capture(&DATE_RE, &content, 1, DATE_MISSING),
        subject: capture(&SUBJECT_RE, &content, 2, SUBJECT_MISSING),
        status: capture(&STATUS_RE, &content, 1, STATUS_MISSING),
    }
}

/// Markdown files directly inside `folder`, in directory listing order.
pub fn list_markdown(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(folder).map_err(|e| ScribaError::io(folder, e))? {
        let entry = entry.map_err(|e| ScribaError::io(folder, e))?;
        if entry.file_name().to_string_lossy().ends_with(".md") {
            out.push(entry.path());
        }
    }
    Ok(out)
}

/// Read and extract every markdown file in `folder`.
pub fn collect_entries(folder: &Path) -> Result<Vec<LogEntry>> {
    let mut entries = Vec::new();
    for path in list_markdown(folder)? {
        let content = fs::read_to_string(&path).map_err(|e| ScribaError::io(&path, e))?;
        let entry = extract_log_info(&content);
        debug!(path = %path.display(), line = %entry, "extracted log entry");
        entries.push(entry);
    }
    Ok(entries)
}

/// Render entries as lines sorted ascending by the full line.
pub fn render_lines(entries: &[LogEntry]) -> Vec<String> {
    let mut lines: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
    lines.sort();
    lines
}

/// Build the summary for `folder` and write it to `folder/output_name`,
/// replacing any previous file.
pub fn create_log_summary(folder: &Path, output_name: &str) -> Result<LogSummary> {
    let entries = collect_entries(folder)?;
    let lines = render_lines(&entries);
    let mut body = String::new();
    for line in &lines {
        body.push_str(line);
        body.push('\n');
    }
    let path = folder.join(output_name);
    fs::write(&path, body).map_err(|e| ScribaError::io(&path, e))?;
    info!(path = %path.display(), count = lines.len(), "log summary written");
    Ok(LogSummary {
        path,
        count: lines.len(),
        lines,
    })
}
