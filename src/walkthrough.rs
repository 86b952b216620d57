//! Interactive per-file walkthrough.

use std::io::Write as _;
use std::path::PathBuf;

use crate::batch::FileStat;
use crate::error::ClipError;
use crate::term::KeySource;
use crate::transport::{write_payload, CommandRunner, TransportCommand};

/// Prompt shown after each successful copy.
pub const PROMPT: &str = "Copied. Press SPACE for next file or Q to quit.";

/// Linear state machine over the input file list.
///
/// Each file at the head of the list is stat'ed, displayed, read, and
/// copied to the clipboard, then the operator chooses between advancing
/// and quitting with a single keystroke. Quitting early is a normal
/// termination; any file or clipboard error aborts the whole walkthrough
/// instead of silently skipping, so the operator never loses track of
/// which files made it.
pub struct Walkthrough<'a> {
    cmd: &'a TransportCommand,
    runner: &'a dyn CommandRunner,
    keys: &'a mut dyn KeySource,
}

/// How a walkthrough ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every file was processed.
    Completed { copied: usize },
    /// The operator pressed Q; the remaining files were left untouched.
    Quit { copied: usize },
}

impl Outcome {
    pub fn copied(&self) -> usize {
        match *self {
            Self::Completed { copied } | Self::Quit { copied } => copied,
        }
    }
}

impl<'a> Walkthrough<'a> {
    pub fn new(
        cmd: &'a TransportCommand,
        runner: &'a dyn CommandRunner,
        keys: &'a mut dyn KeySource,
    ) -> Self {
        Self { cmd, runner, keys }
    }

    /// Run over `files` in order. `Err` is an abort: the failing file was
    /// not copied and the rest were never reached.
    pub fn run(&mut self, files: &[PathBuf]) -> Result<Outcome, ClipError> {
        let mut copied = 0;

        for (index, path) in files.iter().enumerate() {
            // Details are shown from the stat alone, before the content
            // read, so a read failure still names what was in hand.
            let stat = FileStat::capture(path)?;
            println!(
                "{} (modified: {}, size: {} bytes)",
                path.display(),
                stat.modified.format("%Y-%m-%d %H:%M:%S"),
                stat.size
            );

            let content =
                std::fs::read_to_string(path).map_err(|e| ClipError::file(path, e))?;
            write_payload(content.as_bytes(), self.cmd, self.runner)?;
            copied += 1;

            // The prompt follows every copy, the last file included;
            // quitting on the last keystroke still counts as Quit only
            // when files remain.
            print!("{}", PROMPT);
            let _ = std::io::stdout().flush();
            let key = self.keys.next_key().map_err(ClipError::Keystroke)?;
            println!();

            if key.eq_ignore_ascii_case(&'q') && index + 1 < files.len() {
                return Ok(Outcome::Quit { copied });
            }
        }

        Ok(Outcome::Completed { copied })
    }
}
