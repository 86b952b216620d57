//! Batch serialization for stream-mode transfer.
//!
//! Wraps any number of files into a single text payload with marker
//! lines around each file and around the batch. The marker lines are the
//! wire contract: consumers re-parse them to recover file names, sizes,
//! and ordering. The closing remark is cosmetic and non-normative.

use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

use crate::error::ClipError;

/// Timestamp layout used in batch and file markers, e.g. `05Oct2025PM161302`
/// (two-digit day, month abbreviation, year, AM/PM marker, then HHMMSS on
/// the 24-hour clock).
///
/// Chosen for lexical stability within a marker line; kept fixed so
/// parsers written against old payloads continue to work.
pub const TIMESTAMP_FORMAT: &str = "%d%b%Y%p%H%M%S";

/// Decorative line terminating every batch payload.
pub const CLOSING_LINE: &str = "============================================================";

/// Remarks appended after the batch footer, one chosen at random.
pub const CLOSING_REMARKS: &[&str] = &[
    "(Transfer complete: the world is now your clipboard.)",
    "Clipboard assembled: mission accomplished!",
    "Operation 'Copy-Paste' successful. Onward!",
    "Your data has been delivered. Now go forth and paste.",
    "Clipboard operation complete. You might want to brag about this.",
    "Files consolidated, clipboard activated. Let the pasting begin.",
    "Batch mode: engaged. Your files are now one with the clipboard.",
    "Data delivered. Now go forth and paste like a champion.",
    "Clipboard updated. It's not a revolution, just another day.",
    "Copy operation successful. Don't let it inflate your ego.",
    "Transfer complete. At least your clipboard works today.",
    "Files merged. A small victory in an indifferent cosmos.",
];

/// Chooses the closing remark. Injectable so tests can pin the output.
pub trait RemarkPicker {
    fn pick<'a>(&mut self, pool: &'a [&'a str]) -> &'a str;
}

/// Uniform random choice from the pool.
#[derive(Debug, Default)]
pub struct RandomRemark;

impl RemarkPicker for RandomRemark {
    fn pick<'a>(&mut self, pool: &'a [&'a str]) -> &'a str {
        pool.choose(&mut rand::thread_rng()).copied().unwrap_or("")
    }
}

/// Always picks the given index (for tests).
#[derive(Debug)]
pub struct FixedRemark(pub usize);

impl RemarkPicker for FixedRemark {
    fn pick<'a>(&mut self, pool: &'a [&'a str]) -> &'a str {
        pool[self.0 % pool.len()]
    }
}

/// Stat snapshot taken before a file's content is read. Callers that
/// display file details do so from this, so a later read failure still
/// leaves the operator knowing which file was in hand.
#[derive(Debug, Clone, Copy)]
pub struct FileStat {
    pub modified: DateTime<Local>,
    pub size: u64,
}

impl FileStat {
    pub fn capture(path: &Path) -> Result<Self, ClipError> {
        let metadata = std::fs::metadata(path).map_err(|e| ClipError::file(path, e))?;
        let modified = metadata
            .modified()
            .map_err(|e| ClipError::file(path, e))?
            .into();
        Ok(Self {
            modified,
            size: metadata.len(),
        })
    }
}

/// One file's content plus the metadata captured before reading it.
///
/// The size is the stat size, not the length of the text actually read:
/// if the file changes between stat and read the two can disagree. That
/// race is accepted and the stat size is what goes into the markers.
#[derive(Debug)]
pub struct FilePayload {
    pub name: PathBuf,
    pub modified: DateTime<Local>,
    pub size: u64,
    pub content: String,
}

impl FilePayload {
    /// Stat the file, then read its content as text.
    pub fn capture(path: &Path) -> Result<Self, ClipError> {
        let stat = FileStat::capture(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| ClipError::file(path, e))?;
        Ok(Self {
            name: path.to_path_buf(),
            modified: stat.modified,
            size: stat.size,
            content,
        })
    }

    /// Base name upper-cased, as it appears in marker lines. Not unique
    /// across a batch; collisions are not disambiguated.
    pub fn marker_name(&self) -> String {
        self.name
            .file_name()
            .map(|n| n.to_string_lossy().to_uppercase())
            .unwrap_or_default()
    }
}

/// Identity and timing stamped into the batch header.
#[derive(Debug, Clone)]
pub struct BatchContext {
    pub user: String,
    pub host: String,
    pub cwd: String,
    pub timestamp: String,
}

impl BatchContext {
    /// Capture from the running process.
    pub fn capture() -> Self {
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("LOGNAME"))
            .unwrap_or_else(|_| "unknown".to_string());
        let host = hostname::get()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_else(|_| "localhost".to_string());
        let cwd = std::env::current_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|_| ".".to_string());
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self {
            user,
            host,
            cwd,
            timestamp,
        }
    }
}

/// Serialize `files` into one batch payload, in input order.
///
/// All or nothing: the first file that cannot be stat'ed or read aborts
/// the whole batch with that file's path and reason, and nothing reaches
/// the clipboard. Totals in the footer accumulate the stat sizes.
pub fn serialize(
    files: &[PathBuf],
    ctx: &BatchContext,
    remarks: &mut dyn RemarkPicker,
) -> Result<String, ClipError> {
    let mut buffer = String::new();
    buffer.push_str(&format!(
        "========BEGIN BATCH TRANSFER FROM {}@{}:{} AT {}========\n",
        ctx.user, ctx.host, ctx.cwd, ctx.timestamp
    ));

    let mut total_files: usize = 0;
    let mut total_bytes: u64 = 0;

    for path in files {
        let payload = FilePayload::capture(path)?;
        total_files += 1;
        total_bytes += payload.size;

        let name = payload.marker_name();
        buffer.push_str(&format!(
            "===========BEGIN {}, MODIFIED {}===========\n",
            name,
            payload.modified.format(TIMESTAMP_FORMAT)
        ));
        buffer.push_str(&payload.content);
        buffer.push('\n');
        buffer.push_str(&format!(
            "===========END {}, TOTAL {} BYTES===========\n",
            name, payload.size
        ));
    }

    buffer.push_str(&format!(
        "========END BATCH TRANSFER, TOTAL {} FILES, {} bytes========\n",
        total_files, total_bytes
    ));
    buffer.push_str(remarks.pick(CLOSING_REMARKS));
    buffer.push('\n');
    buffer.push_str(CLOSING_LINE);
    buffer.push('\n');

    Ok(buffer)
}
