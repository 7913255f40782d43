// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! `vcamctl settings` - open the extension approval pane

use anyhow::Result;
use clap::Args;
use vcam_adapters::OpenCommandSettings;
use vcam_core::{SettingsOpener, SECURITY_PANE_URI};

#[derive(Args)]
pub struct SettingsArgs {
    /// Settings pane URI to open
    #[arg(long, default_value = SECURITY_PANE_URI)]
    pub uri: String,
}

pub async fn settings(args: SettingsArgs) -> Result<()> {
    OpenCommandSettings::new().open_pane(&args.uri).await?;
    println!("opened {}", args.uri);
    Ok(())
}
