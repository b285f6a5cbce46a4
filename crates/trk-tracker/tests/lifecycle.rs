//! Behavioral tests for `CommandLifecycle`.

use pretty_assertions::assert_eq;
use rstest::rstest;
use trk_tracker::{CommandLifecycle, CommandStatus, TrackerError};

fn running() -> CommandLifecycle {
    let mut cmd = CommandLifecycle::new("build", "cargo build", "shell");
    cmd.start_execution().unwrap();
    cmd
}

#[test]
fn zero_exit_completes_successfully() {
    let mut cmd = running();
    let status = cmd.complete_execution(0, "Finished", "").unwrap();

    assert_eq!(status, CommandStatus::Completed);
    assert_eq!(cmd.status(), CommandStatus::Completed);
    assert!(cmd.is_successful());

    let execution = cmd.execution();
    assert_eq!(execution.exit_code, Some(0));
    assert_eq!(execution.stdout.as_deref(), Some("Finished"));
    assert_eq!(execution.stderr.as_deref(), Some(""));
    assert!(execution.completed_at.is_some());
    assert!(execution.started_at <= execution.completed_at);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(127)]
#[case(-1)]
fn nonzero_exit_is_a_successful_call_recording_failure(#[case] exit_code: i32) {
    let mut cmd = running();
    let result = cmd.complete_execution(exit_code, "", "boom");

    assert_eq!(result, Ok(CommandStatus::Failed));
    assert_eq!(cmd.status(), CommandStatus::Failed);
    assert!(!cmd.is_successful());
    assert_eq!(cmd.execution().exit_code, Some(exit_code));
    assert_eq!(cmd.execution().stderr.as_deref(), Some("boom"));
}

#[test]
fn completing_before_starting_is_rejected() {
    let mut cmd = CommandLifecycle::new("build", "cargo build", "shell");
    let err = cmd.complete_execution(0, "", "").unwrap_err();

    assert!(matches!(
        err,
        TrackerError::InvalidTransition {
            from: CommandStatus::Pending,
            ..
        }
    ));
    assert_eq!(cmd.status(), CommandStatus::Pending);
    assert!(cmd.execution().started_at.is_none());
    assert!(cmd.execution().exit_code.is_none());
}

#[test]
fn starting_twice_is_rejected() {
    let mut cmd = running();
    let started_at = cmd.execution().started_at;

    assert_eq!(
        cmd.start_execution(),
        Err(TrackerError::InvalidTransition {
            command: "build".into(),
            from: CommandStatus::Running,
            to: CommandStatus::Running,
        })
    );
    assert_eq!(cmd.status(), CommandStatus::Running);
    assert_eq!(cmd.execution().started_at, started_at);
}

#[rstest]
#[case(0)]
#[case(3)]
fn terminal_states_accept_no_further_calls(#[case] exit_code: i32) {
    let mut cmd = running();
    cmd.complete_execution(exit_code, "first", "").unwrap();
    let snapshot = cmd.execution().clone();

    assert!(matches!(
        cmd.start_execution(),
        Err(TrackerError::InvalidTransition { .. })
    ));
    assert!(matches!(
        cmd.complete_execution(0, "second", ""),
        Err(TrackerError::InvalidTransition { .. })
    ));
    assert!(matches!(
        cmd.complete_execution(9, "second", ""),
        Err(TrackerError::InvalidTransition { .. })
    ));
    assert_eq!(cmd.execution(), &snapshot);
}

#[test]
fn timestamp_invariants_hold_at_every_step() {
    let mut cmd = CommandLifecycle::new("lint", "cargo clippy", "shell");
    let check = |cmd: &CommandLifecycle| {
        let e = cmd.execution();
        assert_eq!(e.started_at.is_some(), e.status != CommandStatus::Pending);
        assert_eq!(e.completed_at.is_some(), e.status.is_terminal());
    };

    check(&cmd);
    cmd.start_execution().unwrap();
    check(&cmd);
    cmd.complete_execution(1, "", "").unwrap();
    check(&cmd);
}

#[test]
fn into_execution_keeps_session_tag() {
    let mut cmd = CommandLifecycle::new("fmt", "cargo fmt", "shell")
        .with_session("6f1c2b1e-8c1d-4f0a-9d3e-7b1a2c3d4e5f");
    cmd.start_execution().unwrap();
    cmd.complete_execution(0, "", "").unwrap();

    let execution = cmd.into_execution();
    assert_eq!(execution.name, "fmt");
    assert_eq!(execution.command_line, "cargo fmt");
    assert_eq!(execution.command_type, "shell");
    assert_eq!(
        execution.session_id.as_deref(),
        Some("6f1c2b1e-8c1d-4f0a-9d3e-7b1a2c3d4e5f")
    );
}
