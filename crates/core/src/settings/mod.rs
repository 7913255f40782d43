// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! System-settings seam
//!
//! Extension approval happens in the OS settings app, outside this process.
//! The coordinator can only send the user there; it never observes what
//! they do.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSettingsOpener;

use async_trait::async_trait;
use thiserror::Error;

/// URI of the privacy & security pane where extension approval lives
pub const SECURITY_PANE_URI: &str = "x-apple.systempreferences:com.apple.preference.security";

/// Errors from opening the settings UI
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to launch settings: {0}")]
    SpawnFailed(String),
    #[error("settings command failed: {0}")]
    CommandFailed(String),
}

/// Adapter for revealing a system-settings pane to the user
#[async_trait]
pub trait SettingsOpener: Clone + Send + Sync + 'static {
    /// Open the settings pane identified by `uri`
    async fn open_pane(&self, uri: &str) -> Result<(), SettingsError>;
}
