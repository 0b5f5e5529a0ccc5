//! Small helpers shared by the printers and `main`.

use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Render `p` relative to `root`, using `/` separators, for stable JSON output.
pub fn rel_to_root(p: &Path, root: &Path) -> String {
    let rel = pathdiff::diff_paths(p, root).unwrap_or_else(|| p.to_path_buf());
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Render `p` relative to the working directory when it lies below it;
/// otherwise `p` is shown as given.
pub fn rel_to_wd(p: &Path) -> String {
    match std::env::current_dir() {
        Ok(wd) => rel_below(p, &wd),
        Err(_) => p.to_string_lossy().to_string(),
    }
}

fn rel_below(p: &Path, base: &Path) -> String {
    let rel = pathdiff::diff_paths(absolute(p), absolute(base))
        .filter(|r| !r.starts_with(".."));
    match rel {
        Some(r) if r.as_os_str().is_empty() => ".".to_string(),
        Some(r) => r.to_string_lossy().to_string(),
        None => p.to_string_lossy().to_string(),
    }
}

/// Filter directive: `RUST_LOG` when set, else `debug` with `--verbose`,
/// else `warn`.
pub fn log_directive(rust_log: Option<String>, verbose: bool) -> String {
    match rust_log {
        Some(s) if !s.trim().is_empty() => s,
        _ if verbose => "debug".to_string(),
        _ => "warn".to_string(),
    }
}

pub fn log_filter(verbose: bool) -> EnvFilter {
    let directive = log_directive(std::env::var(EnvFilter::DEFAULT_ENV).ok(), verbose);
    EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

/// Absolute form of `p` without resolving symlinks; falls back to `p`.
pub fn absolute(p: &Path) -> PathBuf {
    std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_to_root_strips_prefix() {
        let root = Path::new("/repo");
        let p = root.join("src").join("lib.ts");
        assert_eq!(rel_to_root(&p, root), "src/lib.ts");
    }

    #[test]
    fn test_rel_to_root_with_dot_root() {
        assert_eq!(rel_to_root(Path::new("./a/b.py"), Path::new(".")), "a/b.py");
    }

    #[test]
    fn test_rel_below_inside_and_outside() {
        let base = Path::new("/work/repo");
        assert_eq!(rel_below(Path::new("/work/repo/src/a.py"), base), "src/a.py");
        assert_eq!(rel_below(Path::new("/work/repo"), base), ".");
        assert_eq!(rel_below(Path::new("/elsewhere/b.py"), base), "/elsewhere/b.py");
    }

    #[test]
    fn test_rel_to_wd_for_relative_walk_path() {
        assert_eq!(rel_to_wd(Path::new("./src/lib.ts")), "src/lib.ts");
    }

    #[test]
    fn test_log_directive_prefers_rust_log() {
        assert_eq!(log_directive(Some("scriba=trace".into()), true), "scriba=trace");
        assert_eq!(log_directive(Some("info".into()), false), "info");
        assert_eq!(log_directive(None, true), "debug");
        assert_eq!(log_directive(Some("  ".into()), false), "warn");
        assert_eq!(log_directive(None, false), "warn");
    }

    #[test]
    fn test_absolute_keeps_absolute_paths() {
        let p = Path::new("/tmp/x");
        assert_eq!(absolute(p), PathBuf::from("/tmp/x"));
    }
}
