//! Session registry.
//!
//! Owns the set of active sessions. Every operation takes the single registry
//! lock for its whole duration, so readers never observe a half-applied write.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use trk_config::TrackerConfig;
use trk_core::entities::Session;
use trk_core::errors::TrackerError;
use trk_core::ids::{generate_session_id, normalize_user_id, validate_session_id};
use trk_core::stats::SessionStatistics;

#[derive(Debug)]
struct RegistryState {
    enabled: bool,
    active: HashMap<String, Session>,
}

/// Registry of active CLI sessions.
///
/// Callers only ever receive clones; all mutation goes through the methods
/// below. Safe to share across threads (`Arc<SessionRegistry>`).
#[derive(Debug)]
pub struct SessionRegistry {
    state: Mutex<RegistryState>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    /// An empty registry with tracking enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tracking(true)
    }

    /// An empty registry with the tracking flag taken from config.
    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::with_tracking(config.tracking.enabled)
    }

    fn with_tracking(enabled: bool) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                enabled,
                active: HashMap::new(),
            }),
        }
    }

    // The guarded state is only replaced by whole-value writes, so a panic in
    // another holder cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_enabled(&self) -> Result<MutexGuard<'_, RegistryState>, TrackerError> {
        let guard = self.lock();
        if guard.enabled {
            Ok(guard)
        } else {
            Err(TrackerError::TrackingDisabled)
        }
    }

    /// Whether tracking is currently enabled. Always callable.
    #[must_use]
    pub fn is_tracking_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Start a new session.
    ///
    /// `user_id` is normalized: `None`, empty, and whitespace-only become
    /// anonymous; anything else is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::TrackingDisabled` if tracking is off.
    pub fn create_session(&self, user_id: Option<&str>) -> Result<Session, TrackerError> {
        let mut state = self.lock_enabled()?;

        let mut session_id = generate_session_id();
        while state.active.contains_key(&session_id) {
            session_id = generate_session_id();
        }

        let session = Session::new(session_id.clone(), normalize_user_id(user_id), Utc::now());
        state.active.insert(session_id, session.clone());

        tracing::debug!(
            session_id = %session.session_id,
            user_id = ?session.user_id,
            "session created"
        );
        Ok(session)
    }

    /// Start a new session for a non-string user identity (numeric IDs,
    /// typed handles, and the like).
    ///
    /// The value is stringified and then normalized like
    /// [`Self::create_session`]. Every call is logged at `warn` as a
    /// coercion, so callers that already hold a `&str` or `String` should
    /// use [`Self::create_session`] instead.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::TrackingDisabled` if tracking is off.
    pub fn create_session_for<T: Display>(&self, user: T) -> Result<Session, TrackerError> {
        let user = user.to_string();
        tracing::warn!(user_id = %user, "coercing non-string user id to string");
        self.create_session(Some(&user))
    }

    /// End an active session and return its final state.
    ///
    /// The session leaves the active set; later lookups report it missing.
    ///
    /// # Errors
    ///
    /// Returns `TrackingDisabled`, `EmptySessionId`, `InvalidSessionId`, or
    /// `SessionNotFound` (including sessions that already ended).
    pub fn end_session(&self, session_id: &str) -> Result<Session, TrackerError> {
        let mut state = self.lock_enabled()?;
        let key = validate_session_id(session_id)?;

        let mut session = state
            .active
            .remove(&key)
            .ok_or_else(|| TrackerError::SessionNotFound {
                id: session_id.to_string(),
            })?;
        let now = Utc::now();
        session.end_time = Some(now);

        tracing::debug!(
            session_id = %session.session_id,
            elapsed_ms = session.elapsed(now).num_milliseconds(),
            "session ended"
        );
        Ok(session)
    }

    /// Look up an active session.
    ///
    /// # Errors
    ///
    /// Returns `TrackingDisabled`, `EmptySessionId`, `InvalidSessionId`, or
    /// `SessionNotFound`.
    pub fn get_session(&self, session_id: &str) -> Result<Session, TrackerError> {
        let state = self.lock_enabled()?;
        let key = validate_session_id(session_id)?;

        state
            .active
            .get(&key)
            .cloned()
            .ok_or_else(|| TrackerError::SessionNotFound {
                id: session_id.to_string(),
            })
    }

    /// All active sessions, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::TrackingDisabled` if tracking is off.
    pub fn list_active_sessions(&self) -> Result<Vec<Session>, TrackerError> {
        let state = self.lock_enabled()?;
        Ok(state.active.values().cloned().collect())
    }

    /// Statistics over the active sessions as of now.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::TrackingDisabled` if tracking is off.
    pub fn get_statistics(&self) -> Result<SessionStatistics, TrackerError> {
        self.get_statistics_at(Utc::now())
    }

    /// Statistics over the active sessions as of `now`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::TrackingDisabled` if tracking is off.
    pub fn get_statistics_at(&self, now: DateTime<Utc>) -> Result<SessionStatistics, TrackerError> {
        let state = self.lock_enabled()?;
        Ok(SessionStatistics::compute(state.active.values(), now))
    }

    /// Set the tracking flag.
    ///
    /// Always discards every active session, whichever way the flag moves:
    /// re-enabling starts from an empty registry.
    pub fn configure_tracking(&self, enabled: bool) {
        let mut state = self.lock();
        let discarded = state.active.len();
        state.active.clear();
        state.enabled = enabled;

        tracing::info!(enabled, discarded, "session tracking reconfigured");
    }

    /// Discard every active session and return how many there were.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::TrackingDisabled` if tracking is off.
    pub fn clear_all_sessions(&self) -> Result<usize, TrackerError> {
        let mut state = self.lock_enabled()?;
        let cleared = state.active.len();
        state.active.clear();

        tracing::debug!(cleared, "active sessions cleared");
        Ok(cleared)
    }
}
