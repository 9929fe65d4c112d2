//! Fixed configuration: the invocation plan and the status messages.
//!
//! The runner recognizes no options. Everything it does is decided here at
//! compile time; `RUST_LOG` only controls diagnostic tracing.

use std::fmt;

/// Prefix printed in front of every status line
pub const LOG_PREFIX: &str = "[v0]";

/// Program used to reach the schema migration tool
pub const NPX_PROGRAM: &str = "npx";

/// Arguments for client generation
pub const GENERATE_ARGS: &[&str] = &["prisma", "generate"];

/// Arguments for pushing the schema to the database
pub const PUSH_ARGS: &[&str] = &["prisma", "db", "push"];

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Printed before the first step
pub const START_MESSAGE: &str = "Running Prisma migration to update database schema...";

/// Printed once both steps succeeded
pub const SUCCESS_MESSAGE: &str = "Database migration completed successfully!";

/// Header for the applied changes list
pub const CHANGES_HEADER: &str = "The following changes have been applied:";

/// Schema changes announced after a successful run.
///
/// This list is not derived from what the tool actually changed.
pub const APPLIED_CHANGES: [&str; 4] = [
    "Added activityCode field to Estimate",
    "Added cgst, sgst, lwCess, contingency fields to Estimate",
    "Created SubItem model for detailed work breakdowns",
    "Added relation between WorkItem and SubItem",
];

/// Which part of the migration a step performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Regenerate the data-access client from the schema
    Generate,
    /// Synchronize the database schema
    Push,
}

impl StepKind {
    /// Progress line printed before the step runs
    pub fn progress_message(self) -> &'static str {
        match self {
            StepKind::Generate => "Generating Prisma Client...",
            StepKind::Push => "Pushing schema changes to database...",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Generate => write!(f, "generate"),
            StepKind::Push => write!(f, "push"),
        }
    }
}

/// A single external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    /// Create a step from a program and its arguments
    pub fn new(kind: StepKind, program: &str, args: &[&str]) -> Self {
        Self {
            kind,
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The step's command line, for messages
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Ordered list of steps. Generation always precedes the push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationPlan {
    steps: Vec<Step>,
}

impl InvocationPlan {
    /// Steps in execution order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Default for InvocationPlan {
    fn default() -> Self {
        Self {
            steps: vec![
                Step::new(StepKind::Generate, NPX_PROGRAM, GENERATE_ARGS),
                Step::new(StepKind::Push, NPX_PROGRAM, PUSH_ARGS),
            ],
        }
    }
}
