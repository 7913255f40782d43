// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Extension identity

use serde::{Deserialize, Serialize};

/// Bundle identifier of the camera system extension
///
/// Reverse-DNS, ending in the OS's camera-extension suffix, e.g.
/// `io.vcam.host.avextension`. The format is not validated here; the OS
/// service rejects identifiers it does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtensionIdentity(pub String);

impl std::fmt::Display for ExtensionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ExtensionIdentity {
    fn from(s: String) -> Self {
        ExtensionIdentity(s)
    }
}

impl From<&str> for ExtensionIdentity {
    fn from(s: &str) -> Self {
        ExtensionIdentity(s.to_string())
    }
}
