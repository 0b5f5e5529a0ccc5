//! Scriba core library.
//!
//! This crate exposes programmatic APIs for stamping copyright headers onto
//! source trees and for summarizing folders of markdown log documents.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing and the interactive folder prompt.
//! - `config`: Discovery and effective configuration resolution.
//! - `header`: Recursive header injection with per-file error isolation.
//! - `logs`: Markdown field extraction and `logs.log` generation.
//! - `models`: Data models for header and logs results.
//! - `output`: Human/JSON printers for header/logs.
//! - `error`: The crate error type.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod header;
pub mod logs;
pub mod models;
pub mod output;
pub mod utils;
