//! Error type shared by the header and logs runners.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScribaError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to read folder path from stdin: {0}")]
    Prompt(#[source] io::Error),

    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScribaError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScribaError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScribaError>;
