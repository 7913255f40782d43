// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print one value in the specified format
pub fn print<T: Serialize + std::fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string(value) {
                println!("{}", json);
            }
        }
    }
}
