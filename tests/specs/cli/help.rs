//! Help and version output specs

use crate::prelude::*;

#[test]
fn help_names_every_subcommand() {
    let run = vcamctl().arg("--help").run();

    assert!(run.success());
    assert!(run.stdout.contains("run"));
    assert!(run.stdout.contains("preflight"));
    assert!(run.stdout.contains("settings"));
}

#[test]
fn run_help_documents_the_scenarios() {
    let run = vcamctl().args(["run", "--help"]).run();

    assert!(run.success());
    for scenario in ["granted", "approval", "reboot", "denied", "future"] {
        assert!(
            run.stdout.contains(scenario),
            "help should list the {scenario} scenario:\n{}",
            run.stdout
        );
    }
    assert!(run.stdout.contains("--cycle"));
    assert!(run.stdout.contains("--open-settings"));
}

#[test]
fn preflight_help_shows_the_default_trusted_dir() {
    let run = vcamctl().args(["preflight", "--help"]).run();

    assert!(run.success());
    assert!(run.stdout.contains("/Applications"));
}

#[test]
fn settings_help_shows_the_security_pane_uri() {
    let run = vcamctl().args(["settings", "--help"]).run();

    assert!(run.success());
    assert!(run
        .stdout
        .contains("x-apple.systempreferences:com.apple.preference.security"));
}

#[test]
fn version_prints_the_package_version() {
    let run = vcamctl().arg("--version").run();

    assert!(run.success());
    assert!(run.stdout.contains("0.1.0"));
}
