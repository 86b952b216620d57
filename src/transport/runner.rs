//! Subprocess execution behind a capability interface.

use std::io::Write;
use std::process::{Command, Stdio};

use super::TransportCommand;

/// Runs a transport command, either feeding it a payload or capturing
/// its output. Blocking with no timeout: a hung clipboard utility hangs
/// the whole operation. Errors carry the diagnostic text only; callers
/// decide how to classify them.
pub trait CommandRunner {
    /// Spawn `cmd`, write the full payload to its stdin, wait for exit.
    /// Zero exit status is success.
    fn feed(&self, cmd: &TransportCommand, payload: &[u8]) -> Result<(), String>;

    /// Spawn `cmd`, collect its stdout, wait for exit. Non-zero exit is
    /// a failure carrying stderr text.
    fn capture(&self, cmd: &TransportCommand) -> Result<Vec<u8>, String>;
}

/// The real runner over `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn feed(&self, cmd: &TransportCommand, payload: &[u8]) -> Result<(), String> {
        let mut child = Command::new(cmd.program())
            .args(cmd.args())
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to spawn {}: {}", cmd.program(), e))?;

        // Take stdin so it is closed before waiting, otherwise the
        // utility blocks forever waiting for EOF.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(payload) {
                // Broken pipe: the utility exited early. Reap it before
                // reporting so no zombie lingers.
                drop(stdin);
                let _ = child.wait();
                return Err(format!("failed to write to {}: {}", cmd.program(), e));
            }
        }

        let status = child
            .wait()
            .map_err(|e| format!("failed to wait for {}: {}", cmd.program(), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("{} exited with {}", cmd.program(), status))
        }
    }

    fn capture(&self, cmd: &TransportCommand) -> Result<Vec<u8>, String> {
        let output = Command::new(cmd.program())
            .args(cmd.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| format!("failed to spawn {}: {}", cmd.program(), e))?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(format!(
                "{} returned {}: {}",
                cmd.program(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))
        }
    }
}
