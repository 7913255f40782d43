// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Install-location preflight
//!
//! The OS refuses to manage system extensions for apps installed outside
//! its trusted applications directory. Checking the location up front turns
//! that refusal into a clear diagnostic instead of an opaque service error
//! after a round trip through the OS.

use std::path::{Path, PathBuf};

/// Directory the OS requires host apps to be installed under
pub const APPLICATIONS_DIR: &str = "/Applications";

/// Whether `app_path`'s parent directory is `trusted_dir`, with symlinks
/// resolved on both sides before comparison
///
/// Fails closed: a path that cannot be resolved counts as untrusted.
pub fn is_in_trusted_location(app_path: &Path, trusted_dir: &Path) -> bool {
    let Ok(app) = app_path.canonicalize() else {
        return false;
    };
    let Ok(trusted) = trusted_dir.canonicalize() else {
        return false;
    };
    app.parent().is_some_and(|parent| parent == trusted)
}

/// Verdict of the install-location check
///
/// Computed by the caller and handed to the coordinator at construction;
/// `Untrusted` carries the rejected path for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallCheck {
    Trusted,
    Untrusted(PathBuf),
}

impl InstallCheck {
    /// Check `app_path` against `trusted_dir`
    pub fn for_app(app_path: &Path, trusted_dir: &Path) -> Self {
        if is_in_trusted_location(app_path, trusted_dir) {
            InstallCheck::Trusted
        } else {
            InstallCheck::Untrusted(app_path.to_path_buf())
        }
    }

    /// Check `app_path` against the OS applications directory
    pub fn for_installed_app(app_path: &Path) -> Self {
        Self::for_app(app_path, Path::new(APPLICATIONS_DIR))
    }

    pub fn is_trusted(&self) -> bool {
        matches!(self, InstallCheck::Trusted)
    }
}

#[cfg(test)]
#[path = "preflight_tests.rs"]
mod tests;
