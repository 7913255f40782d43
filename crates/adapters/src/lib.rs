// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Concrete adapters for the coordinator's external seams
//!
//! The real OS extension manager only exists on the target platform, so
//! this crate ships a simulated service that honors the same callback
//! contract, plus settings openers for sending the user to the approval
//! pane.

pub mod settings;
pub mod sim;

pub use settings::{NoOpSettingsOpener, OpenCommandSettings};
pub use sim::{ApprovalProfile, SimService};
