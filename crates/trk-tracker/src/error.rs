//! Runner error types.

use thiserror::Error;
use trk_core::errors::TrackerError;

/// Errors from driving a lifecycle around a child process.
#[derive(Debug, Error)]
pub enum RunError {
    /// The lifecycle refused a transition.
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// The child process could not be spawned or waited on.
    #[error("Failed to run command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
