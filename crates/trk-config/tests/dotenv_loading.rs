//! `.env` values flow through figment's env layer.
//!
//! Kept in its own test binary: `dotenvy` writes straight into the process
//! environment, which `Jail` does not restore.

use figment::Jail;
use trk_config::TrackerConfig;

#[test]
fn dotenv_file_feeds_env_layer_without_overriding_process_env() {
    Jail::expect_with(|jail| {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        jail.set_env("TRK_RUNNER__MAX_OUTPUT_BYTES", "4096");
        jail.create_file(
            ".env",
            "TRK_TRACKING__ENABLED=false\nTRK_RUNNER__MAX_OUTPUT_BYTES=2048\n",
        )?;

        let config = TrackerConfig::load_with_dotenv_file(&jail.directory().join(".env"))
            .expect("config loads");

        assert!(!config.tracking.enabled);
        assert_eq!(config.runner.max_output_bytes, 4096);
        assert!(config.runner.inherit_env);
        Ok(())
    });
}
