//! Sequential execution of the invocation plan.

use tracing::info;

use crate::config::{self, InvocationPlan, StepKind};
use crate::error::RunResult;
use crate::executor::CommandExecutor;
use crate::output;

/// Where a run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Not started yet
    Pending,
    /// Client generation is running
    Generating,
    /// Schema push is running
    Pushing,
    /// Both steps succeeded
    Done,
    /// A step failed; nothing else runs
    Failed,
}

impl RunState {
    /// Whether no further transition is possible
    #[cfg(test)]
    fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }
}

impl From<StepKind> for RunState {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::Generate => RunState::Generating,
            StepKind::Push => RunState::Pushing,
        }
    }
}

/// Runs the plan's steps in order and stops at the first failure.
pub struct MigrationRunner<E> {
    executor: E,
    plan: InvocationPlan,
    state: RunState,
}

impl<E: CommandExecutor> MigrationRunner<E> {
    /// Create a runner for the default plan
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            plan: InvocationPlan::default(),
            state: RunState::Pending,
        }
    }

    /// Current state
    pub fn state(&self) -> RunState {
        self.state
    }

    #[cfg(test)]
    fn executor(&self) -> &E {
        &self.executor
    }

    /// Run every step, printing status lines along the way.
    ///
    /// Returns the first step error unchanged. The caller decides what a
    /// failure means for the process.
    pub fn run(&mut self) -> RunResult<()> {
        output::status(config::START_MESSAGE);

        for step in self.plan.steps() {
            self.state = RunState::from(step.kind);
            info!(state = ?self.state, command = %step, "starting step");
            output::status(step.kind.progress_message());

            if let Err(e) = self.executor.execute(step) {
                self.state = RunState::Failed;
                info!(state = ?self.state, command = %step, "step failed");
                return Err(e);
            }
        }

        self.state = RunState::Done;
        info!(state = ?self.state, "migration finished");

        output::success(config::SUCCESS_MESSAGE);
        output::status(config::CHANGES_HEADER);
        for change in config::APPLIED_CHANGES {
            output::list_item(change);
        }

        Ok(())
    }
}
