//! Session tracking configuration.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TrackingConfig {
    /// Initial value of the registry's tracking-enabled flag.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}
