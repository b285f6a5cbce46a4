//! Command execution lifecycle.
//!
//! ```text
//! pending → running → completed   (exit code 0)
//!                   → failed      (any other exit code)
//! ```
//!
//! A non-zero exit code is a successful *tracking* call that records a failed
//! command. Only calls made from the wrong state are errors.

use chrono::Utc;

use trk_core::entities::CommandExecution;
use trk_core::enums::CommandStatus;
use trk_core::errors::TrackerError;

/// State machine for one executed command. Owned by a single execution flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLifecycle {
    execution: CommandExecution,
}

impl CommandLifecycle {
    /// A new lifecycle in `PENDING`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        command_line: impl Into<String>,
        command_type: impl Into<String>,
    ) -> Self {
        Self {
            execution: CommandExecution::pending(name, command_line, command_type),
        }
    }

    /// Tag the execution with the session it ran under.
    #[must_use]
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.execution.session_id = Some(session_id.into());
        self
    }

    #[must_use]
    pub const fn status(&self) -> CommandStatus {
        self.execution.status
    }

    /// True iff the command finished with exit code 0.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.execution.status == CommandStatus::Completed
    }

    #[must_use]
    pub const fn execution(&self) -> &CommandExecution {
        &self.execution
    }

    #[must_use]
    pub fn into_execution(self) -> CommandExecution {
        self.execution
    }

    /// `PENDING → RUNNING`. Stamps `started_at`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidTransition` unless the command is pending.
    pub fn start_execution(&mut self) -> Result<(), TrackerError> {
        self.ensure_transition(CommandStatus::Running)?;

        self.execution.started_at = Some(Utc::now());
        self.execution.status = CommandStatus::Running;

        tracing::debug!(command = %self.execution.name, "command started");
        Ok(())
    }

    /// `RUNNING → COMPLETED | FAILED`, chosen by `exit_code`. Stamps
    /// `completed_at` and records the results. Returns the new status.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidTransition` unless the command is running.
    /// State is untouched on error.
    pub fn complete_execution(
        &mut self,
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Result<CommandStatus, TrackerError> {
        let next = if exit_code == 0 {
            CommandStatus::Completed
        } else {
            CommandStatus::Failed
        };
        self.ensure_transition(next)?;

        self.execution.completed_at = Some(Utc::now());
        self.execution.exit_code = Some(exit_code);
        self.execution.stdout = Some(stdout.into());
        self.execution.stderr = Some(stderr.into());
        self.execution.status = next;

        tracing::debug!(
            command = %self.execution.name,
            exit_code,
            status = %next,
            "command finished"
        );
        Ok(next)
    }

    fn ensure_transition(&self, next: CommandStatus) -> Result<(), TrackerError> {
        let current = self.execution.status;
        if current.can_transition_to(next) {
            Ok(())
        } else {
            Err(TrackerError::InvalidTransition {
                command: self.execution.name.clone(),
                from: current,
                to: next,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lifecycle() -> CommandLifecycle {
        CommandLifecycle::new("test", "cargo test", "shell")
    }

    #[test]
    fn starts_pending_without_timestamps() {
        let cmd = lifecycle();
        assert_eq!(cmd.status(), CommandStatus::Pending);
        assert!(cmd.execution().started_at.is_none());
        assert!(cmd.execution().completed_at.is_none());
        assert!(!cmd.is_successful());
    }

    #[test]
    fn start_stamps_started_at() {
        let mut cmd = lifecycle();
        cmd.start_execution().unwrap();
        assert_eq!(cmd.status(), CommandStatus::Running);
        assert!(cmd.execution().started_at.is_some());
        assert!(cmd.execution().completed_at.is_none());
    }

    #[test]
    fn failed_transition_leaves_record_untouched() {
        let mut cmd = lifecycle();
        let before = cmd.clone();

        let err = cmd.complete_execution(0, "out", "err").unwrap_err();
        assert_eq!(
            err,
            TrackerError::InvalidTransition {
                command: "test".into(),
                from: CommandStatus::Pending,
                to: CommandStatus::Completed,
            }
        );
        assert_eq!(cmd, before);
    }

    #[test]
    fn with_session_tags_execution() {
        let cmd = lifecycle().with_session("6f1c2b1e-8c1d-4f0a-9d3e-7b1a2c3d4e5f");
        assert_eq!(
            cmd.execution().session_id.as_deref(),
            Some("6f1c2b1e-8c1d-4f0a-9d3e-7b1a2c3d4e5f")
        );
    }

    #[test]
    fn duration_available_after_completion() {
        let mut cmd = lifecycle();
        cmd.start_execution().unwrap();
        assert!(cmd.execution().duration().is_none());
        cmd.complete_execution(0, "", "").unwrap();
        let duration = cmd.execution().duration().unwrap();
        assert!(duration >= chrono::Duration::zero());
    }
}
