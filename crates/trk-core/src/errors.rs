//! Tracker error taxonomy.
//!
//! Every variant is a local, recoverable condition. Operations that return
//! one of these leave tracker state exactly as it was. Mapping them to exit
//! codes or messages is the front-end's job.

use thiserror::Error;

use crate::enums::CommandStatus;

/// Errors returned by the session registry and the command lifecycle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// A registry operation was attempted while tracking is switched off.
    #[error("Session tracking is disabled")]
    TrackingDisabled,

    /// An empty session ID was supplied.
    #[error("Session ID must not be empty")]
    EmptySessionId,

    /// A session ID that is not a UUID was supplied.
    #[error("Invalid session ID: {id}")]
    InvalidSessionId { id: String },

    /// Well-formed ID with no matching active session.
    #[error("Session not found: {id}")]
    SessionNotFound { id: String },

    /// A command lifecycle transition was attempted that is not allowed.
    #[error("Invalid state transition for command '{command}': {from} to {to}")]
    InvalidTransition {
        command: String,
        from: CommandStatus,
        to: CommandStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = TrackerError::InvalidSessionId {
            id: "not-a-uuid".into(),
        };
        assert_eq!(err.to_string(), "Invalid session ID: not-a-uuid");

        let err = TrackerError::InvalidTransition {
            command: "build".into(),
            from: CommandStatus::Completed,
            to: CommandStatus::Running,
        };
        assert_eq!(
            err.to_string(),
            "Invalid state transition for command 'build': COMPLETED to RUNNING"
        );
    }
}
