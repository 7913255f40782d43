// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Fake extension service for testing

#![cfg_attr(coverage_nightly, coverage(off))]

use super::ExtensionService;
use crate::identity::ExtensionIdentity;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Call record for extension service submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCall {
    Activate(ExtensionIdentity),
    Deactivate(ExtensionIdentity),
}

/// Fake extension service that records every submission
///
/// Clones share the same ledger, so a copy kept by the test observes calls
/// made through the copy owned by the coordinator. Delivering callbacks is
/// out of scope here: tests invoke the coordinator's handlers directly.
#[derive(Clone, Default)]
pub struct FakeExtensionService {
    calls: Arc<Mutex<Vec<ServiceCall>>>,
}

impl FakeExtensionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded submissions, in order
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Total number of submissions of any kind
    pub fn submission_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl ExtensionService for FakeExtensionService {
    async fn submit_activation(&self, identity: &ExtensionIdentity) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ServiceCall::Activate(identity.clone()));
    }

    async fn submit_deactivation(&self, identity: &ExtensionIdentity) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ServiceCall::Deactivate(identity.clone()));
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
