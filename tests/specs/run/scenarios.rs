//! Scenario outcome specs
//!
//! Each simulated scenario must leave the flow in its documented terminal
//! state, reflected in the last status line and the exit code.

use crate::prelude::*;

#[test]
fn granted_flow_ends_activated() {
    let install = Install::trusted_layout();
    let run = install.flow("granted").run();

    assert!(run.success(), "stderr: {}", run.stderr);
    assert_eq!(run.last_line(), "status: activated");
}

#[test]
fn cycle_returns_to_idle() {
    let install = Install::trusted_layout();
    let run = install.flow("granted").arg("--cycle").run();

    assert!(run.success(), "stderr: {}", run.stderr);
    assert_eq!(run.last_line(), "status: idle");
    assert!(run.stdout.contains("status: requested-deactivation"));
}

#[test]
fn reboot_flow_succeeds_without_activating() {
    let install = Install::trusted_layout();
    let run = install.flow("reboot").run();

    assert!(run.success(), "stderr: {}", run.stderr);
    assert_eq!(run.last_line(), "status: needs-reboot");
    assert!(!run.stdout.contains("status: activated"));
}

#[test]
fn denied_flow_exits_nonzero_and_names_the_policy() {
    let install = Install::trusted_layout();
    let run = install.flow("denied").run();

    assert_eq!(run.status.code(), Some(1));
    assert!(run.last_line().starts_with("status: failed"));
    assert!(run
        .stderr
        .contains("system policy forbids activating the extension"));
}

#[test]
fn untrusted_install_never_reaches_the_service() {
    let install = Install::untrusted_layout();
    let run = install.flow("granted").run();

    assert_eq!(run.status.code(), Some(1));
    assert!(!run.stdout.contains("status: requested"));
    assert!(run.last_line().starts_with("status: failed"));
}

#[test]
fn every_transition_is_written_as_its_own_line() {
    let install = Install::trusted_layout();
    let run = install.flow("approval").arg("--approval-delay-ms").arg("25").run();

    assert!(run.success(), "stderr: {}", run.stderr);
    for line in run.stdout.lines() {
        assert!(
            line.starts_with("status: "),
            "unexpected stdout line: {line}"
        );
    }
    assert!(run.stdout.contains("status: needs-user-approval"));
}

#[test]
fn json_lines_name_the_status() {
    let install = Install::trusted_layout();
    let run = install.flow("granted").args(["--output", "json"]).run();

    assert!(run.success(), "stderr: {}", run.stderr);
    for line in run.stdout.lines() {
        assert!(
            line.starts_with("{\"status\":\""),
            "unexpected stdout line: {line}"
        );
    }
    assert_eq!(run.last_line(), "{\"status\":\"activated\"}");
}
