// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! CLI command implementations

pub mod preflight;
pub mod run;
pub mod settings;
