//! Executable lookup on the search path.

use std::ffi::OsString;
use std::path::PathBuf;

/// Answers "is this program available to execute".
///
/// The resolver takes this as a trait so tests can pin exactly which
/// utilities exist without touching the real PATH.
pub trait ProgramLookup {
    /// Full path of `program` if it exists and is executable.
    fn find(&self, program: &str) -> Option<PathBuf>;

    fn exists(&self, program: &str) -> bool {
        self.find(program).is_some()
    }
}

/// Real lookup over the `PATH` environment variable.
#[derive(Debug, Default)]
pub struct PathLookup {
    path_override: Option<OsString>,
}

impl PathLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed PATH value instead of the environment (for tests).
    pub fn with_path(path: impl Into<OsString>) -> Self {
        Self {
            path_override: Some(path.into()),
        }
    }

    fn path_value(&self) -> Option<OsString> {
        match &self.path_override {
            Some(p) => Some(p.clone()),
            None => std::env::var_os("PATH"),
        }
    }
}

impl ProgramLookup for PathLookup {
    fn find(&self, program: &str) -> Option<PathBuf> {
        let path = self.path_value()?;
        for dir in std::env::split_paths(&path) {
            if dir.as_os_str().is_empty() {
                continue;
            }
            let candidate = dir.join(program);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(unix)]
fn is_executable(path: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &std::path::Path) -> bool {
    path.is_file()
}
