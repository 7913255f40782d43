// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Lay out `<root>/Apps/VCam.app` so the install-location preflight passes.
/// Returns the tempdir plus the app path and the trusted directory.
pub fn installed_app() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let trusted = temp.path().join("Apps");
    let app = trusted.join("VCam.app");
    fs::create_dir_all(&app).expect("Failed to create app directory");
    (temp, app, trusted)
}

/// Lay out an app outside the trusted directory so the preflight rejects it.
pub fn misplaced_app() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let trusted = temp.path().join("Apps");
    let app = temp.path().join("Downloads").join("VCam.app");
    fs::create_dir_all(&trusted).expect("Failed to create trusted directory");
    fs::create_dir_all(&app).expect("Failed to create app directory");
    (temp, app, trusted)
}
