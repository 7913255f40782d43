// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! `vcamctl preflight` - check an app install location

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;
use vcam_core::{is_in_trusted_location, APPLICATIONS_DIR};

#[derive(Args)]
pub struct PreflightArgs {
    /// App path to check (defaults to this executable)
    pub app_path: Option<PathBuf>,

    /// Trusted applications directory to check against
    #[arg(long, default_value = APPLICATIONS_DIR)]
    pub trusted_dir: PathBuf,
}

pub fn preflight(args: PreflightArgs) -> Result<()> {
    let app_path = match args.app_path {
        Some(path) => path,
        None => std::env::current_exe()?,
    };

    if is_in_trusted_location(&app_path, &args.trusted_dir) {
        println!(
            "ok: {} is installed under {}",
            app_path.display(),
            args.trusted_dir.display()
        );
        Ok(())
    } else {
        bail!(
            "{} is not installed under {}",
            app_path.display(),
            args.trusted_dir.display()
        );
    }
}
