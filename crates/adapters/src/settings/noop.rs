// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! No-op settings opener for wiring without a UI

use async_trait::async_trait;
use tracing::debug;
use vcam_core::{SettingsError, SettingsOpener};

/// Settings opener that logs the pane instead of opening anything
///
/// Used where sending the user to a settings window is undesirable, such
/// as scripted runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpSettingsOpener;

impl NoOpSettingsOpener {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SettingsOpener for NoOpSettingsOpener {
    async fn open_pane(&self, uri: &str) -> Result<(), SettingsError> {
        debug!(uri, "settings open skipped");
        Ok(())
    }
}
