// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Fake settings opener for testing

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SettingsError, SettingsOpener};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Fake settings opener that records opened pane URIs
#[derive(Clone, Default)]
pub struct FakeSettingsOpener {
    opened: Arc<Mutex<Vec<String>>>,
    open_fails: Arc<Mutex<bool>>,
}

impl FakeSettingsOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// All pane URIs opened so far, in order
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Make subsequent `open_pane` calls fail
    pub fn set_open_fails(&self, fails: bool) {
        *self.open_fails.lock().unwrap_or_else(|e| e.into_inner()) = fails;
    }
}

#[async_trait]
impl SettingsOpener for FakeSettingsOpener {
    async fn open_pane(&self, uri: &str) -> Result<(), SettingsError> {
        if *self.open_fails.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(SettingsError::SpawnFailed("open_fails is set".to_string()));
        }
        self.opened
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(uri.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
