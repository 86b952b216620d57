//! Write-side clipboard primitive.

use super::{CommandRunner, TransportCommand};
use crate::error::ClipError;

/// Pipe `payload` into the resolved transport command.
///
/// A single attempt, never retried: a failure is terminal for this
/// invocation and the caller decides whether to abort or move on
/// (interactive mode only).
pub fn write_payload(
    payload: &[u8],
    cmd: &TransportCommand,
    runner: &dyn CommandRunner,
) -> Result<(), ClipError> {
    runner
        .feed(cmd, payload)
        .map_err(|detail| ClipError::TransportFailed {
            tool: cmd.program().to_string(),
            detail,
        })
}
