// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Failure taxonomy for the activation flow
//!
//! Everything that can land the coordinator in `Status::Failed`. Each
//! variant renders a stable human-readable description for the
//! presentation layer.

use crate::service::ServiceError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Terminal failure reasons carried by `Status::Failed`
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Failure {
    /// The OS reported a terminal outcome code this build does not recognize
    #[error("request finished with unrecognized outcome code {0}")]
    UnexpectedOutcome(i64),
    /// The app is not installed under the trusted applications directory
    #[error("app is installed in an invalid location: {}", .0.display())]
    InstalledInInvalidLocation(PathBuf),
    /// The OS extension service reported an error
    #[error(transparent)]
    Service(#[from] ServiceError),
}
