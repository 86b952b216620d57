//! Clipway library
//!
//! Copies text to, and reads text from, an external system clipboard on
//! Linux hosts, degrading gracefully when no clipboard transport exists.
//! The write side (`clip`) pipes payloads into wl-copy/xclip/xsel; the
//! read side (`unclip`) cascades through the matching readers and falls
//! back to a persistent file when every transport fails.

pub mod batch;
pub mod config;
pub mod error;
pub mod fallback;
pub mod lookup;
pub mod session;
pub mod term;
pub mod transport;
pub mod walkthrough;

pub use batch::{BatchContext, FilePayload, FileStat};
pub use config::Config;
pub use error::ClipError;
pub use fallback::FallbackStore;
pub use lookup::{PathLookup, ProgramLookup};
pub use session::DisplaySession;
pub use transport::{CommandRunner, Mode, SystemRunner, TransportCommand, TransportName};
pub use walkthrough::Walkthrough;
