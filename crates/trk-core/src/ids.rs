//! Session ID generation/validation and user ID normalization.

use uuid::Uuid;

use crate::errors::TrackerError;

/// Statistics bucket for sessions without a user.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Generate a fresh session ID (random UUID, lowercase hyphenated).
#[must_use]
pub fn generate_session_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Validate a caller-supplied session ID and return its canonical form.
///
/// Any textual UUID form accepted by [`Uuid::parse_str`] is allowed
/// (hyphenated, simple, braced, URN, any case); the result is always the
/// lowercase hyphenated form used as the registry key.
///
/// # Errors
///
/// Returns `TrackerError::EmptySessionId` for `""` and
/// `TrackerError::InvalidSessionId` for anything that does not parse.
pub fn validate_session_id(session_id: &str) -> Result<String, TrackerError> {
    if session_id.is_empty() {
        return Err(TrackerError::EmptySessionId);
    }
    Uuid::parse_str(session_id)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| TrackerError::InvalidSessionId {
            id: session_id.to_string(),
        })
}

/// Normalize an optional user ID.
///
/// `None`, `""`, and whitespace-only strings all become `None`. Anything else
/// is kept verbatim (no trimming).
#[must_use]
pub fn normalize_user_id(user_id: Option<&str>) -> Option<String> {
    user_id
        .filter(|user| !user.trim().is_empty())
        .map(str::to_string)
}

/// Statistics key for a normalized user ID.
#[must_use]
pub fn user_bucket(user_id: Option<&str>) -> &str {
    user_id.unwrap_or(ANONYMOUS_USER)
}
