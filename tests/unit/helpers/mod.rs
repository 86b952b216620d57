//! Shared fakes for unit tests: scripted PATH lookups, subprocess
//! runners, and keystroke sources.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::path::PathBuf;

use clipway::term::KeySource;
use clipway::transport::{CommandRunner, TransportCommand};
use clipway::{DisplaySession, ProgramLookup};

pub fn wayland() -> DisplaySession {
    DisplaySession {
        wayland: true,
        x11: false,
    }
}

pub fn x11() -> DisplaySession {
    DisplaySession {
        wayland: false,
        x11: true,
    }
}

/// Lookup over a fixed set of "installed" programs.
pub struct FakeLookup {
    programs: HashSet<String>,
}

impl FakeLookup {
    pub fn with(programs: &[&str]) -> Self {
        Self {
            programs: programs.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::with(&[])
    }
}

impl ProgramLookup for FakeLookup {
    fn find(&self, program: &str) -> Option<PathBuf> {
        self.programs
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }
}

/// Runner that records fed payloads and answers captures from a script.
#[derive(Default)]
pub struct FakeRunner {
    /// (program, payload) in feed order.
    pub fed: RefCell<Vec<(String, Vec<u8>)>>,
    /// When set, feeds fail once this many have succeeded.
    pub fail_feed_after: Option<usize>,
    /// Capture results keyed by program name; unscripted programs fail.
    pub captures: HashMap<String, Result<Vec<u8>, String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_feed_after(successes: usize) -> Self {
        Self {
            fail_feed_after: Some(successes),
            ..Self::default()
        }
    }

    pub fn with_capture(mut self, program: &str, result: Result<&[u8], &str>) -> Self {
        self.captures.insert(
            program.to_string(),
            result.map(|b| b.to_vec()).map_err(|e| e.to_string()),
        );
        self
    }

    pub fn fed_payloads(&self) -> Vec<Vec<u8>> {
        self.fed.borrow().iter().map(|(_, p)| p.clone()).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn feed(&self, cmd: &TransportCommand, payload: &[u8]) -> Result<(), String> {
        if let Some(limit) = self.fail_feed_after {
            if self.fed.borrow().len() >= limit {
                return Err(format!("{} exited with signal 9", cmd.program()));
            }
        }
        self.fed
            .borrow_mut()
            .push((cmd.program().to_string(), payload.to_vec()));
        Ok(())
    }

    fn capture(&self, cmd: &TransportCommand) -> Result<Vec<u8>, String> {
        self.captures
            .get(cmd.program())
            .cloned()
            .unwrap_or_else(|| Err(format!("{} is not installed", cmd.program())))
    }
}

/// Keystroke source playing back a fixed script.
pub struct ScriptedKeys {
    keys: VecDeque<char>,
}

impl ScriptedKeys {
    pub fn new(keys: &[char]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<char> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}
