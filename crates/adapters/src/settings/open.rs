// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Settings opener backed by the system `open` command

use async_trait::async_trait;
use tokio::process::Command;
use vcam_core::{SettingsError, SettingsOpener};

/// Opens settings panes by handing the URI to the OS `open` command
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenCommandSettings;

impl OpenCommandSettings {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SettingsOpener for OpenCommandSettings {
    async fn open_pane(&self, uri: &str) -> Result<(), SettingsError> {
        let output = Command::new("open")
            .arg(uri)
            .output()
            .await
            .map_err(|e| SettingsError::SpawnFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SettingsError::CommandFailed(stderr.trim().to_string()));
        }

        Ok(())
    }
}
