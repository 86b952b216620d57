//! Display-server session detection.

/// Snapshot of which graphical session signals are present.
///
/// Read from the process environment once per invocation and threaded
/// through the resolver and reader, never cached across invocations —
/// two processes can legitimately see different environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySession {
    pub wayland: bool,
    pub x11: bool,
}

impl DisplaySession {
    /// Detect the session from `WAYLAND_DISPLAY` and `DISPLAY`.
    ///
    /// An empty variable counts as unset, matching what the clipboard
    /// utilities themselves would see.
    pub fn detect() -> Self {
        Self {
            wayland: env_set("WAYLAND_DISPLAY"),
            x11: env_set("DISPLAY"),
        }
    }

    /// A session with neither signal, i.e. a bare TTY.
    pub fn headless() -> Self {
        Self {
            wayland: false,
            x11: false,
        }
    }

    pub fn is_headless(&self) -> bool {
        !self.wayland && !self.x11
    }
}

fn env_set(name: &str) -> bool {
    std::env::var(name).map(|v| !v.is_empty()).unwrap_or(false)
}
