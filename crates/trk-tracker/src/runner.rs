//! Run a child process under a [`CommandLifecycle`].
//!
//! Optional collaborator, not part of the tracker core: the registry and the
//! lifecycle never spawn processes or touch I/O. Front-ends that execute
//! commands themselves can drive `CommandLifecycle` directly and skip this
//! module.
//!
//! The lifecycle is started before spawning and completed with the child's
//! exit code. Captured output is lossily decoded as UTF-8 and capped at
//! `RunnerConfig::max_output_bytes` per stream. With `inherit_env = false`
//! the child sees only the variables set explicitly on the `Command`.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use trk_config::RunnerConfig;
use trk_core::enums::CommandStatus;

use crate::error::RunError;
use crate::lifecycle::CommandLifecycle;

/// Exit code recorded when the child never produced one (spawn failure or
/// killed by a signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Start `lifecycle`, run `command` to completion, and record the outcome.
///
/// Returns the terminal status. A non-zero exit is `Ok(CommandStatus::Failed)`.
///
/// # Errors
///
/// Returns `RunError::Tracker` if the lifecycle is not pending (nothing is
/// spawned). Returns `RunError::Spawn` if the process cannot be started; the
/// lifecycle is then completed as `FAILED` with [`NO_EXIT_CODE`] and the I/O
/// error text in `stderr`.
pub fn run(
    lifecycle: &mut CommandLifecycle,
    mut command: Command,
    config: &RunnerConfig,
) -> Result<CommandStatus, RunError> {
    lifecycle.start_execution()?;

    if !config.inherit_env {
        let explicit: Vec<(OsString, OsString)> = command
            .get_envs()
            .filter_map(|(key, value)| value.map(|value| (key.to_owned(), value.to_owned())))
            .collect();
        command.env_clear().envs(explicit);
    }
    command.stdin(Stdio::null());

    let limit = config.output_limit();
    match command.output() {
        Ok(output) => {
            let exit_code = output.status.code().unwrap_or(NO_EXIT_CODE);
            let status = lifecycle.complete_execution(
                exit_code,
                capture(&output.stdout, limit),
                capture(&output.stderr, limit),
            )?;
            Ok(status)
        }
        Err(source) => {
            let name = lifecycle.execution().name.clone();
            tracing::warn!(command = %name, error = %source, "failed to spawn command");
            lifecycle.complete_execution(NO_EXIT_CODE, String::new(), source.to_string())?;
            Err(RunError::Spawn {
                command: name,
                source,
            })
        }
    }
}

fn capture(bytes: &[u8], limit: usize) -> String {
    let text = String::from_utf8_lossy(bytes);
    if text.len() <= limit {
        return text.into_owned();
    }

    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
