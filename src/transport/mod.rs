//! Clipboard transport selection and execution.
//!
//! A transport is an external program (wl-copy, xclip, xsel) that can
//! consume clipboard text on stdin or produce it on stdout. The resolver
//! picks one based on the display session and PATH availability; the
//! writer and reader drive the chosen command through [`CommandRunner`].

mod reader;
mod resolver;
mod runner;
mod writer;

pub use reader::read_clipboard;
pub use resolver::{candidates, install_hint, resolve, ResolveError};
pub use runner::{CommandRunner, SystemRunner};
pub use writer::write_payload;

use std::fmt;
use std::str::FromStr;

/// The three supported clipboard utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportName {
    WlCopy,
    Xclip,
    Xsel,
}

/// Direction of a clipboard operation. A write-mode invocation of a
/// utility differs from its read-mode invocation (wl-copy vs wl-paste,
/// `-o` vs no `-o`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    Read,
}

impl TransportName {
    /// The program name to look up on PATH for the given mode.
    pub fn program(self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Self::WlCopy, Mode::Write) => "wl-copy",
            (Self::WlCopy, Mode::Read) => "wl-paste",
            (Self::Xclip, _) => "xclip",
            (Self::Xsel, _) => "xsel",
        }
    }

    /// Canonical invocation for the given mode.
    pub fn command(self, mode: Mode) -> TransportCommand {
        let argv: &[&str] = match (self, mode) {
            (Self::WlCopy, Mode::Write) => &["wl-copy"],
            (Self::WlCopy, Mode::Read) => &["wl-paste"],
            (Self::Xclip, Mode::Write) => &["xclip", "-selection", "clipboard"],
            (Self::Xclip, Mode::Read) => &["xclip", "-selection", "clipboard", "-o"],
            (Self::Xsel, Mode::Write) => &["xsel", "--clipboard", "--input"],
            (Self::Xsel, Mode::Read) => &["xsel", "--clipboard", "--output"],
        };
        TransportCommand {
            argv: argv.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for TransportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WlCopy => "wl-copy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
        })
    }
}

impl FromStr for TransportName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wl-copy" => Ok(Self::WlCopy),
            "xclip" => Ok(Self::Xclip),
            "xsel" => Ok(Self::Xsel),
            other => Err(format!(
                "unknown clipboard utility '{}' (expected wl-copy, xclip, or xsel)",
                other
            )),
        }
    }
}

/// One fully specified external invocation: program name plus flags.
///
/// Immutable once returned by the resolver; the argv is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportCommand {
    argv: Vec<String>,
}

impl TransportCommand {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

impl fmt::Display for TransportCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv.join(" "))
    }
}
