//! Terminal keystroke input.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;

/// Scoped raw-mode acquisition. The prior terminal mode is restored on
/// drop, so every exit path (success, error, panic unwind) leaves the
/// terminal usable.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Source of single keystrokes for the interactive walkthrough.
///
/// A trait so tests can script the operator's keys.
pub trait KeySource {
    /// Block until one key is pressed; no echo, no line buffering.
    fn next_key(&mut self) -> io::Result<char>;
}

/// Reads from the real terminal, toggling raw mode around each read.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<char> {
        let _guard = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(match key.code {
                    KeyCode::Char(c) => c,
                    // Any non-character key advances, same as SPACE.
                    _ => ' ',
                });
            }
        }
    }
}
