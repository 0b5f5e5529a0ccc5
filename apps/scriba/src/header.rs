//! Copyright header injection.
//!
//! Walks a directory tree in file-name order and prepends the configured
//! header block to every source file whose extension is allowed and whose
//! content does not already contain the marker.
//!
//! - Directories named in `exclude` are pruned from the walk (the root
//!   itself is never pruned).
//! - Failures are isolated per file: an unreadable or unwritable file is
//!   recorded as `Errored` and the walk continues.
//! - When `write` is false nothing is modified; files that would receive a
//!   header are still reported as `Added`.

use crate::config::HeaderSettings;
use crate::models::{extension_of, FileRecord, HeaderReport, Outcome};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Run header injection below `root`.
pub fn run_header(root: &Path, settings: &HeaderSettings, write: bool) -> HeaderReport {
    let mut files: Vec<FileRecord> = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &settings.exclude));
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!(error = %err, "skipping unreadable walk entry");
                continue;
            }
        };
        // Follows symlinks to files; symlinked directories are not files.
        let path = entry.path();
        if !path.is_file() || !is_candidate(path, &settings.extensions) {
            continue;
        }
        files.push(process_file(path, settings, write));
    }

    let report = HeaderReport {
        root: root.to_path_buf(),
        extensions: settings.extensions.clone(),
        wrote: write,
        files,
    };
    let c = report.counts();
    info!(
        added = c.added,
        skipped = c.skipped,
        errored = c.errored,
        write,
        "header run finished"
    );
    report
}

fn is_excluded_dir(entry: &DirEntry, exclude: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && exclude
            .iter()
            .any(|name| entry.file_name().to_string_lossy() == name.as_str())
}

/// True when the lower-cased extension of `path` is in `extensions`.
pub fn is_candidate(path: &Path, extensions: &[String]) -> bool {
    let ext = extension_of(path);
    !ext.is_empty() && extensions.iter().any(|e| *e == ext)
}

/// Classify and (when `write`) update a single file.
pub fn process_file(path: &Path, settings: &HeaderSettings, write: bool) -> FileRecord {
    match apply_header(path, settings, write) {
        Ok(outcome) => {
            debug!(path = %path.display(), ?outcome, "classified");
            FileRecord {
                path: path.to_path_buf(),
                outcome,
                error: None,
            }
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to process file");
            FileRecord {
                path: path.to_path_buf(),
                outcome: Outcome::Errored,
                error: Some(err.to_string()),
            }
        }
    }
}

fn apply_header(path: &Path, settings: &HeaderSettings, write: bool) -> io::Result<Outcome> {
    let content = fs::read_to_string(path)?;
    if has_header(&content, &settings.marker) {
        return Ok(Outcome::Skipped);
    }
    if write {
        fs::write(path, with_header(&settings.text, &content))?;
    }
    Ok(Outcome::Added)
}

pub fn has_header(content: &str, marker: &str) -> bool {
    content.contains(marker)
}

/// `header`, one blank line, then the original content.
pub fn with_header(header: &str, content: &str) -> String {
    let mut out = String::with_capacity(header.len() + 2 + content.len());
    out.push_str(header);
    out.push_str("\n\n");
    out.push_str(content);
    out
}
