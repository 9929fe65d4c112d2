//! Spawning of external commands.

use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::config::Step;
use crate::error::{FailureStatus, RunError, RunResult};

/// Runs one step to completion.
///
/// Implementations must block until the command has finished and return
/// `Ok` only when it succeeded.
pub trait CommandExecutor {
    fn execute(&mut self, step: &Step) -> RunResult<()>;
}

/// Executes steps as child processes of the current one.
///
/// The child inherits stdin, stdout and stderr, so the tool's own output
/// is shown as it runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn execute(&mut self, step: &Step) -> RunResult<()> {
        debug!(program = %step.program, args = ?step.args, "spawning {}", step.kind);

        let status = Command::new(&step.program)
            .args(&step.args)
            .status()
            .map_err(|source| RunError::Spawn {
                command: step.command_line(),
                source,
            })?;

        debug!(%status, "{} finished", step.kind);

        if status.success() {
            Ok(())
        } else {
            Err(RunError::CommandFailed {
                command: step.command_line(),
                status: failure_status(status),
            })
        }
    }
}

#[cfg(unix)]
fn failure_status(status: ExitStatus) -> FailureStatus {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => FailureStatus::Code(code),
        (None, Some(signal)) => FailureStatus::Signal(signal),
        (None, None) => FailureStatus::Unknown,
    }
}

#[cfg(not(unix))]
fn failure_status(status: ExitStatus) -> FailureStatus {
    match status.code() {
        Some(code) => FailureStatus::Code(code),
        None => FailureStatus::Unknown,
    }
}
