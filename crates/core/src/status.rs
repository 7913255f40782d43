// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Extension activation status
//!
//! The observable lifecycle state of the camera extension. The coordinator
//! owns exactly one `Status` at a time and replaces it wholesale on every
//! transition; the presentation layer renders whichever variant is current.

use crate::failure::Failure;
use serde::Serialize;

/// Lifecycle state of the extension activation flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Status {
    /// No request has been submitted yet
    Idle,
    /// An activation request is outstanding with the OS
    Requested,
    /// The OS is waiting for the user to approve the extension
    NeedsUserApproval,
    /// The change is staged and takes effect after the next reboot
    NeedsReboot,
    /// The extension is installed and available
    Activated,
    /// A deactivation request is outstanding with the OS
    RequestedDeactivation,
    /// The flow ended in an error
    Failed(Failure),
}

impl Status {
    /// Short stable name for logs and machine-readable output
    pub fn name(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Requested => "requested",
            Status::NeedsUserApproval => "needs-user-approval",
            Status::NeedsReboot => "needs-reboot",
            Status::Activated => "activated",
            Status::RequestedDeactivation => "requested-deactivation",
            Status::Failed(_) => "failed",
        }
    }

    /// Whether an activation request may be submitted from this state
    pub fn can_request_activation(&self) -> bool {
        matches!(self, Status::Idle)
    }

    /// Whether a deactivation request may be submitted from this state
    pub fn can_request_deactivation(&self) -> bool {
        matches!(self, Status::Activated)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Status::Failed(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Failed(failure) => write!(f, "failed: {failure}"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
