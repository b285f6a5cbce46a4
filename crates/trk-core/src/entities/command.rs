use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CommandStatus;

/// Record of one executed CLI command.
///
/// `started_at` is set iff `status != Pending`; `completed_at`, `exit_code`,
/// `stdout` and `stderr` are set iff the status is terminal. The transitions
/// that maintain this live in `trk-tracker`'s `CommandLifecycle`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommandExecution {
    pub name: String,
    pub command_line: String,
    pub command_type: String,
    pub status: CommandStatus,
    /// Opaque association with a tracked session. Never read by the registry.
    pub session_id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub exit_code: Option<i32>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl CommandExecution {
    /// A pending execution with no timestamps or results.
    #[must_use]
    pub fn pending(
        name: impl Into<String>,
        command_line: impl Into<String>,
        command_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            command_line: command_line.into(),
            command_type: command_type.into(),
            status: CommandStatus::Pending,
            session_id: None,
            started_at: None,
            completed_at: None,
            exit_code: None,
            stdout: None,
            stderr: None,
        }
    }

    /// Wall-clock run time, available once the command has finished.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(started), Some(completed)) => Some(completed - started),
            _ => None,
        }
    }
}
