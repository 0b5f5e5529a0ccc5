//! CLI argument parsing via `clap`.

use crate::error::{Result, ScribaError};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

pub const FOLDER_PROMPT: &str = "Insira o caminho da pasta com os ficheiros markdown: ";

#[derive(Parser)]
#[command(
    name = "scriba",
    version,
    about = "Scriba: copyright headers and markdown log summaries",
    long_about = "Scriba — a tiny CLI that stamps copyright headers onto source files and summarizes markdown logs.\n\nConfiguration precedence: CLI > scriba.toml > defaults.",
    after_help = "Examples:\n  scriba header\n  scriba header --root packages/app --check\n  scriba logs docs/logs\n  scriba logs --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, global = true, action = clap::ArgAction::SetTrue, help = "Enable debug diagnostics on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current scriba version.")]
    Version,
    /// Add copyright headers to source files
    #[command(
        about = "Add copyright headers",
        long_about = "Walk the tree and prepend the copyright header to source files that lack it. Files already carrying the marker are skipped; per-file failures are reported and do not stop the walk.",
        after_help = "Examples:\n  scriba header\n  scriba header --check --output json"
    )]
    Header {
        #[arg(long, help = "Root directory to walk (default: current dir)")]
        root: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Report missing headers without writing; exit non-zero if any")]
        check: bool,
        #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Summarize markdown logs into logs.log
    #[command(
        about = "Summarize markdown logs",
        long_about = "Extract date, subject and status from every *.md file in FOLDER and write a sorted summary next to them. Prompts for FOLDER when omitted.",
        after_help = "Examples:\n  scriba logs docs/logs\n  scriba logs docs/logs --output-file summary.log"
    )]
    Logs {
        #[arg(help = "Folder containing the markdown logs (prompted when omitted)")]
        folder: Option<String>,
        #[arg(long, help = "Summary file name inside FOLDER (default: logs.log)")]
        output_file: Option<String>,
        #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

/// Ask for the logs folder on `out` and read one line from `input`.
///
/// Only the line terminator is stripped; surrounding spaces are kept.
pub fn prompt_folder<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "{}", FOLDER_PROMPT).map_err(ScribaError::Prompt)?;
    out.flush().map_err(ScribaError::Prompt)?;
    let mut line = String::new();
    let n = input.read_line(&mut line).map_err(ScribaError::Prompt)?;
    if n == 0 {
        return Err(ScribaError::Prompt(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no input",
        )));
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
