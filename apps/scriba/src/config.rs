//! Configuration discovery and effective settings resolution.
//!
//! Scriba reads `scriba.toml|yaml|yml` from the working root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `header.text`: the Bloquinho copyright block
//! - `header.marker`: the copyright owner line
//! - `header.extensions`: `.dart .js .ts .java .cpp .c .h .cs .php .py`
//! - `header.exclude`: `.git node_modules build .dart_tool dist`
//! - `logs.output_file`: `logs.log`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Result, ScribaError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

// Blank comment lines keep their trailing space (" * ").
pub const DEFAULT_HEADER: &str = concat!(
    "/*\n",
    " * Copyright (c) 2025 Karim Hussen Patatas Hassam dos Santos\n",
    " * \n",
    " * This file is part of Bloquinho.\n",
    " * \n",
    " * Licensed under CC BY-NC-SA 4.0\n",
    " * Commercial use prohibited without permission.\n",
    " */",
);

pub const DEFAULT_MARKER: &str = "Copyright (c) 2025 Karim Hussen Patatas Hassam dos Santos";

pub const DEFAULT_EXTENSIONS: [&str; 10] = [
    ".dart", ".js", ".ts", ".java", ".cpp", ".c", ".h", ".cs", ".php", ".py",
];

pub const DEFAULT_EXCLUDE: [&str; 5] = [".git", "node_modules", "build", ".dart_tool", "dist"];

pub const DEFAULT_LOG_FILE: &str = "logs.log";

pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

const CONFIG_NAMES: [&str; 3] = ["scriba.toml", "scriba.yaml", "scriba.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Header injection section under `[header]`.
pub struct HeaderCfg {
    pub text: Option<String>,
    pub marker: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Log summary section under `[logs]`.
pub struct LogsCfg {
    pub output_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `scriba.toml|yaml`.
pub struct ScribaConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub header: Option<HeaderCfg>,
    #[serde(default)]
    pub logs: Option<LogsCfg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved header settings handed to `header::run_header`.
pub struct HeaderSettings {
    pub text: String,
    pub marker: String,
    /// Lower-cased, dot-prefixed extensions.
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    pub exclude: Vec<String>,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        HeaderSettings {
            text: DEFAULT_HEADER.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    /// Directory the command operates on (walk root for `header`).
    pub root: PathBuf,
    /// Directory the config file was discovered in.
    pub config_root: PathBuf,
    pub config_found: bool,
    pub output: String,
    pub header: HeaderSettings,
    pub log_file: String,
}

/// Walk upward from `start` to find where configuration lives.
///
/// Stops when a `scriba.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ScribaConfig` from `scriba.toml` or `scriba.yaml|yml` if present.
///
/// A file that exists but does not parse is reported as an error.
pub fn load_config(root: &Path) -> Result<Option<ScribaConfig>> {
    let toml_path = root.join("scriba.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).map_err(|e| ScribaError::io(&toml_path, e))?;
        let cfg: ScribaConfig = toml::from_str(&s).map_err(|e| ScribaError::Config {
            path: toml_path.clone(),
            message: e.to_string(),
        })?;
        return Ok(Some(cfg));
    }
    for yml in ["scriba.yaml", "scriba.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).map_err(|e| ScribaError::io(&p, e))?;
            let cfg: ScribaConfig = serde_yaml::from_str(&s).map_err(|e| ScribaError::Config {
                path: p.clone(),
                message: e.to_string(),
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

/// Accepts `py`, `.py`, or `.PY` and yields `.py`.
pub fn normalize_extension(ext: &str) -> String {
    let e = ext.trim().to_lowercase();
    if e.starts_with('.') {
        e
    } else {
        format!(".{}", e)
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_output: Option<&str>,
    cli_log_file: Option<&str>,
) -> Result<Effective> {
    let root = PathBuf::from(cli_root.unwrap_or("."));
    let config_root = detect_config_root(&crate::utils::absolute(&root));
    let loaded = load_config(&config_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if !OUTPUT_MODES.contains(&output.as_str()) {
        let path = CONFIG_NAMES
            .iter()
            .map(|n| config_root.join(n))
            .find(|p| p.exists())
            .unwrap_or_else(|| config_root.clone());
        return Err(ScribaError::Config {
            path,
            message: format!("unsupported output '{}' (expected human|json)", output),
        });
    }

    let hcfg = cfg.header.unwrap_or_default();
    let defaults = HeaderSettings::default();
    let header = HeaderSettings {
        text: hcfg.text.unwrap_or(defaults.text),
        marker: hcfg.marker.unwrap_or(defaults.marker),
        extensions: hcfg
            .extensions
            .map(|v| v.iter().map(|e| normalize_extension(e)).collect())
            .unwrap_or(defaults.extensions),
        exclude: hcfg.exclude.unwrap_or(defaults.exclude),
    };

    let log_file = cli_log_file
        .map(|s| s.to_string())
        .or_else(|| cfg.logs.and_then(|l| l.output_file))
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    Ok(Effective {
        root,
        config_root,
        config_found,
        output,
        header,
        log_file,
    })
}
