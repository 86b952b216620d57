//! Library error types.

use std::path::PathBuf;

/// Errors surfaced by the write path and the batch serializer.
///
/// The read path deliberately has no error type: the cascade swallows
/// transport failures and returns whatever text it could recover.
#[derive(Debug, thiserror::Error)]
pub enum ClipError {
    #[error("Preferred utility '{name}' not found in PATH")]
    PreferredToolNotFound { name: String },

    #[error("No suitable clipboard utility found. {hint}")]
    NoTransportAvailable { hint: &'static str },

    #[error("Clipboard copy via {tool} failed: {detail}")]
    TransportFailed { tool: String, detail: String },

    #[error("Error processing file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No text to copy")]
    EmptyInput,

    #[error("Failed to read keystroke: {0}")]
    Keystroke(#[source] std::io::Error),
}

impl ClipError {
    /// Helper for wrapping an I/O error with the file it concerned.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
