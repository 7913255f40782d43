// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Settings opener implementations

mod noop;
mod open;

pub use noop::NoOpSettingsOpener;
pub use open::OpenCommandSettings;
