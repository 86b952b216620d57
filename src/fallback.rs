//! Persistent fallback store.

use std::fs;
use std::path::{Path, PathBuf};

/// Default well-known location shared by every invocation.
pub const DEFAULT_FALLBACK_PATH: &str = "/tmp/clipboard.dat";

/// A single file standing in for the clipboard when no live transport
/// exists. Raw text, overwritten wholesale; the only state that outlives
/// a process. Reading never deletes it, and the write path never writes
/// it automatically — persisting here is always an explicit choice.
///
/// Assumes a single consumer at a time; no locking. Concurrent access
/// would need atomic rename-based writes.
#[derive(Debug, Clone)]
pub struct FallbackStore {
    path: PathBuf,
}

impl FallbackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whole contents as text.
    pub fn read(&self) -> std::io::Result<String> {
        fs::read_to_string(&self.path)
    }

    /// Overwrite the store with `text`.
    pub fn write(&self, text: &str) -> std::io::Result<()> {
        fs::write(&self.path, text)
    }
}

impl Default for FallbackStore {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_PATH)
    }
}
