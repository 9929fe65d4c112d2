//! Runner error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for runner operations
pub type RunResult<T> = Result<T, RunError>;

/// How a failed command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStatus {
    /// Exited with a non-zero code
    Code(i32),
    /// Killed by a signal before exiting
    Signal(i32),
    /// No code or signal was reported
    Unknown,
}

impl std::fmt::Display for FailureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureStatus::Code(code) => write!(f, "returned non-zero exit status {}", code),
            FailureStatus::Signal(signal) => write!(f, "was terminated by signal {}", signal),
            FailureStatus::Unknown => write!(f, "failed with an unknown status"),
        }
    }
}

/// Runner error types
#[derive(Error, Debug, Diagnostic)]
pub enum RunError {
    /// External command finished unsuccessfully
    #[error("command `{command}` {status}")]
    #[diagnostic(code(migrate::command_failed))]
    CommandFailed {
        command: String,
        status: FailureStatus,
    },

    /// External command could not be started
    #[error("command `{command}` could not be started: {source}")]
    #[diagnostic(
        code(migrate::spawn),
        help("make sure Node.js and npx are installed and on PATH")
    )]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
