//! # trk-config
//!
//! Layered configuration loading for trk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TRK_*` prefix, `__` as separator)
//! 2. Project-level `.trk/config.toml`
//! 3. User-level `~/.config/trk/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TRK_TRACKING__ENABLED` -> `tracking.enabled`,
//! `TRK_RUNNER__MAX_OUTPUT_BYTES` -> `runner.max_output_bytes`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use trk_config::TrackerConfig;
//!
//! let config = TrackerConfig::load_with_dotenv().expect("config");
//! if !config.tracking.enabled {
//!     println!("session tracking starts switched off");
//! }
//! ```

mod error;
mod runner;
mod tracking;

pub use error::ConfigError;
pub use runner::{DEFAULT_MAX_OUTPUT_BYTES, RunnerConfig};
pub use tracking::TrackingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TrackerConfig {
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl TrackerConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse and
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load configuration after reading environment variables from a specific
    /// `.env` file. Variables already set in the process take precedence over
    /// the file.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`]. A missing or unreadable `.env` file is ignored.
    pub fn load_with_dotenv_file(path: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::from_path(path);
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".trk/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TRK_").split("__"))
    }

    /// Reject values that would make the runner useless.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runner.max_output_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "runner.max_output_bytes".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trk").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current dir.
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
