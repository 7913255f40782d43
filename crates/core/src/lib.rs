// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! vcam-core: Core library for the vcam virtual-camera host tools
//!
//! This crate provides:
//! - The activation coordinator state machine for the camera system extension
//! - The install-location preflight check
//! - Adapter traits for the OS extension service and the system settings UI
//! - Recording fakes for driving the coordinator in tests

pub mod coordinator;
pub mod failure;
pub mod identity;
pub mod preflight;
pub mod service;
pub mod settings;
pub mod status;

// Re-exports
pub use coordinator::{ActivationCoordinator, Command, IllegalCommand, OutstandingRequest};
pub use failure::Failure;
pub use identity::ExtensionIdentity;
pub use preflight::{is_in_trusted_location, InstallCheck, APPLICATIONS_DIR};
pub use service::{
    ExtensionProperties, ExtensionService, ReplacementAction, RequestOutcome, ServiceError,
    ServiceErrorCode, ServiceEvent,
};
pub use settings::{SettingsError, SettingsOpener, SECURITY_PANE_URI};
pub use status::Status;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use service::{FakeExtensionService, ServiceCall};
#[cfg(any(test, feature = "test-support"))]
pub use settings::FakeSettingsOpener;
