//! Cascading transport selection.

use tracing::debug;

use super::{Mode, TransportCommand, TransportName};
use crate::lookup::ProgramLookup;
use crate::session::DisplaySession;

/// Why no transport command could be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The explicitly requested utility is not on PATH. No substitution
    /// is attempted: the caller asked for a specific tool.
    #[error("Preferred utility '{0}' not found in PATH")]
    PreferredNotFound(TransportName),

    /// None of the environment-appropriate candidates exist. Not an
    /// error by itself: the read path consults the fallback store, the
    /// write path aborts with installation guidance.
    #[error("no clipboard transport available")]
    Unavailable,
}

/// Candidate order for a session, most appropriate first.
///
/// Wayland sessions prefer the native tool but can often still reach the
/// clipboard through XWayland, so the X tools stay in the list. Headless
/// sessions have no candidates at all.
pub fn candidates(session: DisplaySession) -> &'static [TransportName] {
    use TransportName::*;
    if session.wayland {
        &[WlCopy, Xclip, Xsel]
    } else if session.x11 {
        &[Xclip, Xsel, WlCopy]
    } else {
        &[]
    }
}

/// Pick a transport command for `mode`.
///
/// With an explicit `preference` the named utility is the only one
/// considered. Without one, the first candidate (in session priority
/// order) whose program exists on the search path wins. Resolution is
/// idempotent for an unchanged session and lookup.
pub fn resolve(
    preference: Option<TransportName>,
    mode: Mode,
    session: DisplaySession,
    lookup: &dyn ProgramLookup,
) -> Result<TransportCommand, ResolveError> {
    if let Some(name) = preference {
        if lookup.exists(name.program(mode)) {
            return Ok(name.command(mode));
        }
        return Err(ResolveError::PreferredNotFound(name));
    }

    for &name in candidates(session) {
        if lookup.exists(name.program(mode)) {
            debug!(tool = %name, ?mode, "resolved clipboard transport");
            return Ok(name.command(mode));
        }
    }
    debug!(?session, "no clipboard transport available");
    Err(ResolveError::Unavailable)
}

/// Installation guidance for the session, independent of which specific
/// candidates were missing.
pub fn install_hint(session: DisplaySession) -> &'static str {
    if session.wayland {
        "Please install 'wl-clipboard' (e.g., sudo dnf install wl-clipboard or \
         sudo apt install wl-clipboard) for Wayland."
    } else if session.x11 {
        "Please install 'xclip' (e.g., sudo dnf install xclip or \
         sudo apt install xclip) or 'xsel' for X11."
    } else {
        "No graphical environment detected. Clipboard functionality requires a GUI session."
    }
}
