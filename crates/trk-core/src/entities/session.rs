use chrono::{DateTime, Duration, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tracked CLI invocation. Created when a user-facing invocation begins
/// and ended when it completes.
///
/// A session is active while `end_time` is `None`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    /// Normalized user identity. `None` means anonymous.
    pub user_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a fresh active session starting at `start_time`.
    #[must_use]
    pub const fn new(
        session_id: String,
        user_id: Option<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            user_id,
            start_time,
            end_time: None,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    /// Time since `start_time`, measured against `end_time` when the session
    /// has ended and against `now` otherwise. Never negative.
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        let until = self.end_time.unwrap_or(now);
        (until - self.start_time).max(Duration::zero())
    }
}
