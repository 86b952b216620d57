//! Read-side cascade.

use tracing::debug;

use super::resolver::candidates;
use super::{CommandRunner, Mode};
use crate::fallback::FallbackStore;
use crate::lookup::ProgramLookup;
use crate::session::DisplaySession;

/// Best-effort clipboard retrieval. Never fails: tries each reader in
/// session priority order, then the fallback store, and returns empty
/// text when everything comes up dry.
///
/// Empty output and non-zero exit are treated identically as cascade
/// failures. A transport that legitimately holds empty text is therefore
/// indistinguishable from a broken one; this mirrors long-standing
/// behavior that downstream scripts rely on.
///
/// In verbose mode each attempt emits a diagnostic line on stderr; the
/// cascade still runs to completion and the process exits cleanly.
pub fn read_clipboard(
    session: DisplaySession,
    lookup: &dyn ProgramLookup,
    runner: &dyn CommandRunner,
    store: &FallbackStore,
    verbose: bool,
) -> String {
    if verbose {
        if session.wayland {
            eprintln!("[INFO] Detected Wayland session.");
        } else if session.x11 {
            eprintln!("[INFO] Detected X11 session.");
        } else {
            eprintln!("[INFO] No GUI session detected. Reading fallback file.");
        }
    }

    for &name in candidates(session) {
        let program = name.program(Mode::Read);
        if !lookup.exists(program) {
            debug!(tool = program, "reader not on PATH, skipping");
            continue;
        }
        let cmd = name.command(Mode::Read);
        match runner.capture(&cmd) {
            Ok(bytes) if !bytes.is_empty() => {
                if verbose {
                    eprintln!("[INFO] Data successfully read using {}.", program);
                }
                return String::from_utf8_lossy(&bytes).into_owned();
            }
            Ok(_) => {
                if verbose {
                    eprintln!("[WARNING] {} produced no output, trying next.", program);
                }
            }
            Err(detail) => {
                debug!(tool = program, %detail, "reader failed");
                if verbose {
                    eprintln!("[WARNING] {} read failed: {}", program, detail);
                }
            }
        }
    }

    read_from_fallback(store, verbose)
}

fn read_from_fallback(store: &FallbackStore, verbose: bool) -> String {
    if !store.exists() {
        if verbose {
            eprintln!(
                "[ERROR] Fallback file {} does not exist.",
                store.path().display()
            );
        }
        return String::new();
    }
    match store.read() {
        Ok(data) => {
            if verbose {
                eprintln!(
                    "[INFO] Read fallback data from {}",
                    store.path().display()
                );
            }
            data
        }
        Err(e) => {
            if verbose {
                eprintln!("[ERROR] Could not read from fallback file: {}", e);
            }
            String::new()
        }
    }
}
