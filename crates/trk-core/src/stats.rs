//! Aggregate statistics over active sessions.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Session;
use crate::ids::user_bucket;

/// Snapshot of the active session set, polled by the reporting side.
///
/// Durations are elapsed time so far for each active session, in seconds.
/// With no active sessions every duration field is `0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SessionStatistics {
    pub total_active_sessions: usize,
    pub average_duration_seconds: f64,
    pub longest_session_seconds: f64,
    pub shortest_session_seconds: f64,
    /// Session count per normalized user ID, `"anonymous"` for no user.
    /// Counts always sum to `total_active_sessions`.
    pub sessions_by_user: BTreeMap<String, usize>,
}

impl SessionStatistics {
    /// Compute statistics for `sessions` as of `now`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute<'a, I>(sessions: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = &'a Session>,
    {
        let mut stats = Self::default();
        let mut total_seconds = 0.0_f64;
        let mut longest = f64::MIN;
        let mut shortest = f64::MAX;

        for session in sessions {
            let seconds = session.elapsed(now).num_milliseconds() as f64 / 1000.0;
            total_seconds += seconds;
            longest = longest.max(seconds);
            shortest = shortest.min(seconds);

            *stats
                .sessions_by_user
                .entry(user_bucket(session.user_id.as_deref()).to_string())
                .or_default() += 1;
            stats.total_active_sessions += 1;
        }

        if stats.total_active_sessions > 0 {
            stats.average_duration_seconds = total_seconds / stats.total_active_sessions as f64;
            stats.longest_session_seconds = longest;
            stats.shortest_session_seconds = shortest;
        }

        stats
    }
}
