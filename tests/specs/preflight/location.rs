//! Install-location preflight specs
//!
//! The check passes only when the app sits directly inside the trusted
//! directory, with every path resolved before comparison.

use crate::prelude::*;

#[test]
fn app_directly_under_trusted_dir_passes() {
    let install = Install::trusted_layout();
    let run = install.preflight().run();

    assert_eq!(run.status.code(), Some(0));
    assert!(run.stdout.contains("is installed under"));
}

#[test]
fn app_outside_trusted_dir_fails() {
    let install = Install::untrusted_layout();
    let run = install.preflight().run();

    assert_eq!(run.status.code(), Some(1));
    assert!(run.stderr.contains("is not installed under"));
}

#[test]
fn app_nested_below_trusted_dir_fails() {
    let install = Install::nested_layout();
    let run = install.preflight().run();

    assert_eq!(run.status.code(), Some(1));
    assert!(run.stderr.contains("is not installed under"));
}

#[test]
fn dot_dot_components_are_resolved_before_the_check() {
    let install = Install::trusted_layout();
    let indirect = install.app.join("..").join("VCam.app");

    let run = vcamctl()
        .arg("preflight")
        .arg(&indirect)
        .arg("--trusted-dir")
        .arg(&install.trusted)
        .run();

    assert!(run.success(), "stderr: {}", run.stderr);
}

#[cfg(unix)]
#[test]
fn symlink_to_a_trusted_install_passes() {
    let install = Install::trusted_layout();
    let link = install.path().join("VCam alias.app");
    std::os::unix::fs::symlink(&install.app, &link).expect("Failed to create symlink");

    let run = vcamctl()
        .arg("preflight")
        .arg(&link)
        .arg("--trusted-dir")
        .arg(&install.trusted)
        .run();

    assert!(run.success(), "stderr: {}", run.stderr);
}
