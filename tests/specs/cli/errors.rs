//! Argument validation specs
//!
//! Bad invocations must fail with clap's usage exit code before any flow
//! starts.

use crate::prelude::*;

#[test]
fn no_subcommand_is_a_usage_error() {
    let run = vcamctl().run();

    assert_eq!(run.status.code(), Some(2));
    assert!(run.stderr.contains("Usage"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    let run = vcamctl().arg("frobnicate").run();

    assert_eq!(run.status.code(), Some(2));
    assert!(run.stderr.contains("unrecognized subcommand"));
}

#[test]
fn unknown_scenario_is_rejected() {
    let run = vcamctl().args(["run", "--scenario", "sideways"]).run();

    assert_eq!(run.status.code(), Some(2));
    assert!(run.stderr.contains("invalid value 'sideways'"));
}

#[test]
fn unknown_output_format_is_rejected() {
    let run = vcamctl().args(["run", "--output", "yaml"]).run();

    assert_eq!(run.status.code(), Some(2));
    assert!(run.stderr.contains("invalid value 'yaml'"));
}
