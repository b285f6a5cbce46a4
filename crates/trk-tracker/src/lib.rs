//! # trk-tracker
//!
//! Process-local tracking of CLI invocation sessions and executed commands.
//!
//! - [`SessionRegistry`] owns the active session set behind a single lock and
//!   answers queries about it, gated by a tracking-enabled flag.
//! - [`CommandLifecycle`] is a standalone state machine for one command
//!   execution (`PENDING → RUNNING → COMPLETED | FAILED`).
//! - [`runner::run`] is an optional collaborator outside the core that
//!   drives a lifecycle around a real child process.
//!
//! The registry is an ordinary value: construct one and hand it (or an
//! `Arc` of it) to whoever needs it.
//!
//! ```
//! use trk_tracker::{CommandLifecycle, SessionRegistry};
//!
//! let registry = SessionRegistry::new();
//! let session = registry.create_session(Some("alice")).unwrap();
//!
//! let mut build = CommandLifecycle::new("build", "cargo build", "shell")
//!     .with_session(session.session_id.clone());
//! build.start_execution().unwrap();
//! build.complete_execution(0, "ok", "").unwrap();
//! assert!(build.is_successful());
//!
//! let ended = registry.end_session(&session.session_id).unwrap();
//! assert!(ended.end_time.is_some());
//! ```

mod error;
mod lifecycle;
mod registry;
pub mod runner;

pub use error::RunError;
pub use lifecycle::CommandLifecycle;
pub use registry::SessionRegistry;

pub use trk_core::entities::{CommandExecution, Session};
pub use trk_core::enums::CommandStatus;
pub use trk_core::errors::TrackerError;
pub use trk_core::stats::SessionStatistics;
