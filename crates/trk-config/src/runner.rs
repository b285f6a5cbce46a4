//! Command runner configuration.

use serde::{Deserialize, Serialize};

/// Default cap on captured stdout/stderr per stream (1 MiB).
pub const DEFAULT_MAX_OUTPUT_BYTES: u64 = 1024 * 1024;

const fn default_max_output_bytes() -> u64 {
    DEFAULT_MAX_OUTPUT_BYTES
}

const fn default_inherit_env() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Maximum bytes of stdout and of stderr kept on a command execution.
    /// Longer output is truncated.
    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: u64,

    /// Whether spawned commands inherit the parent process environment.
    #[serde(default = "default_inherit_env")]
    pub inherit_env: bool,
}

impl RunnerConfig {
    /// `max_output_bytes` as a `usize`, saturating on narrow targets.
    #[must_use]
    pub fn output_limit(&self) -> usize {
        usize::try_from(self.max_output_bytes).unwrap_or(usize::MAX)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_output_bytes: default_max_output_bytes(),
            inherit_env: default_inherit_env(),
        }
    }
}
