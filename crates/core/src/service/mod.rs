// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! OS extension-service seam
//!
//! The coordinator talks to the system's extension manager through the
//! `ExtensionService` trait. Submissions return immediately; everything the
//! OS has to say arrives later as `ServiceEvent`s on the driving event loop.

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeExtensionService, ServiceCall};

use crate::identity::ExtensionIdentity;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::oneshot;

/// Adapter for the OS extension-management service
///
/// One activation or deactivation request may be outstanding per
/// coordinator; the service delivers exactly one terminal event per
/// submitted request, possibly preceded by a replacement query and an
/// approval notification.
#[async_trait]
pub trait ExtensionService: Clone + Send + Sync + 'static {
    /// Submit an activation request for the extension
    async fn submit_activation(&self, identity: &ExtensionIdentity);

    /// Submit a deactivation request for the extension
    async fn submit_deactivation(&self, identity: &ExtensionIdentity);
}

/// Error codes the OS extension service can report, as known at build time
///
/// Codes from OS releases newer than this build arrive as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceErrorCode {
    Unknown,
    MissingEntitlement,
    UnsupportedParentBundleLocation,
    ExtensionNotFound,
    ExtensionMissingIdentifier,
    DuplicateExtensionIdentifier,
    UnknownExtensionCategory,
    CodeSignatureInvalid,
    ValidationFailed,
    ForbiddenBySystemPolicy,
    RequestCanceled,
    RequestSuperseded,
    AuthorizationRequired,
    Other(i64),
}

impl ServiceErrorCode {
    /// Map a raw OS error code to its known variant
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => Self::Unknown,
            2 => Self::MissingEntitlement,
            3 => Self::UnsupportedParentBundleLocation,
            4 => Self::ExtensionNotFound,
            5 => Self::ExtensionMissingIdentifier,
            6 => Self::DuplicateExtensionIdentifier,
            7 => Self::UnknownExtensionCategory,
            8 => Self::CodeSignatureInvalid,
            9 => Self::ValidationFailed,
            10 => Self::ForbiddenBySystemPolicy,
            11 => Self::RequestCanceled,
            12 => Self::RequestSuperseded,
            13 => Self::AuthorizationRequired,
            other => Self::Other(other),
        }
    }

    /// The raw OS error code
    pub fn raw(&self) -> i64 {
        match self {
            Self::Unknown => 1,
            Self::MissingEntitlement => 2,
            Self::UnsupportedParentBundleLocation => 3,
            Self::ExtensionNotFound => 4,
            Self::ExtensionMissingIdentifier => 5,
            Self::DuplicateExtensionIdentifier => 6,
            Self::UnknownExtensionCategory => 7,
            Self::CodeSignatureInvalid => 8,
            Self::ValidationFailed => 9,
            Self::ForbiddenBySystemPolicy => 10,
            Self::RequestCanceled => 11,
            Self::RequestSuperseded => 12,
            Self::AuthorizationRequired => 13,
            Self::Other(raw) => *raw,
        }
    }
}

impl std::fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown error"),
            Self::MissingEntitlement => {
                f.write_str("app is missing the system extension entitlement")
            }
            Self::UnsupportedParentBundleLocation => {
                f.write_str("app is installed in a location the OS does not allow extensions from")
            }
            Self::ExtensionNotFound => f.write_str("extension not found in the app bundle"),
            Self::ExtensionMissingIdentifier => {
                f.write_str("extension is missing its bundle identifier")
            }
            Self::DuplicateExtensionIdentifier => {
                f.write_str("another extension with the same identifier exists")
            }
            Self::UnknownExtensionCategory => {
                f.write_str("extension category is not recognized by the OS")
            }
            Self::CodeSignatureInvalid => f.write_str("extension code signature is invalid"),
            Self::ValidationFailed => f.write_str("extension failed system validation"),
            Self::ForbiddenBySystemPolicy => {
                f.write_str("system policy forbids activating the extension")
            }
            Self::RequestCanceled => f.write_str("request was canceled"),
            Self::RequestSuperseded => f.write_str("request was superseded by a newer request"),
            Self::AuthorizationRequired => {
                f.write_str("authorization is required to activate the extension")
            }
            Self::Other(raw) => write!(f, "unrecognized service error code {raw}"),
        }
    }
}

/// An error reported by the OS extension service
///
/// `message` carries whatever text the OS attached; the `Display` impl
/// sticks to the stable per-code description so the presentation layer
/// renders the same text for the same code on every OS version.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{code}")]
pub struct ServiceError {
    pub code: ServiceErrorCode,
    pub message: String,
}

impl ServiceError {
    pub fn new(code: ServiceErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Build from the raw OS error code and its attached text
    pub fn from_raw(raw: i64, message: impl Into<String>) -> Self {
        Self::new(ServiceErrorCode::from_raw(raw), message)
    }
}

/// Terminal result of an activation or deactivation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestOutcome {
    /// The request finished and the change is in effect
    Completed,
    /// The change is staged and takes effect after the next reboot
    WillCompleteAfterReboot,
    /// An outcome code introduced after this build
    Unrecognized(i64),
}

impl RequestOutcome {
    /// Map a raw OS outcome code to its known variant
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::Completed,
            1 => Self::WillCompleteAfterReboot,
            other => Self::Unrecognized(other),
        }
    }

    pub fn raw(&self) -> i64 {
        match self {
            Self::Completed => 0,
            Self::WillCompleteAfterReboot => 1,
            Self::Unrecognized(raw) => *raw,
        }
    }
}

/// Decision for an activation request that would replace an installed copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReplacementAction {
    Replace,
    Cancel,
}

/// Descriptor of one extension version, as reported by the OS
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionProperties {
    pub identifier: String,
    pub version: String,
}

impl ExtensionProperties {
    pub fn new(identifier: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for ExtensionProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.identifier, self.version)
    }
}

/// Callbacks from the OS extension service
///
/// An implementation delivers these to whatever loop drives the
/// coordinator. Per request the service sends zero or one
/// `ReplacementRequired`, zero or one `NeedsUserApproval`, then exactly one
/// of `Finished` or `Failed`.
#[derive(Debug)]
pub enum ServiceEvent {
    /// The request would replace an installed extension; the service is
    /// waiting on a decision
    ReplacementRequired {
        existing: ExtensionProperties,
        replacement: ExtensionProperties,
        decision: oneshot::Sender<ReplacementAction>,
    },
    /// The OS is waiting for the user to approve the extension
    NeedsUserApproval,
    /// The request reached a terminal outcome
    Finished(RequestOutcome),
    /// The request failed
    Failed(ServiceError),
}
