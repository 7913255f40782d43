//! Shared helpers for behavioral specs.
//!
//! Specs run the real binary against throwaway install layouts, so the
//! helpers here are about building those layouts and capturing output.

#![allow(dead_code)]

use assert_cmd::Command;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use tempfile::TempDir;

/// A throwaway application install used to exercise the location preflight.
pub struct Install {
    temp: TempDir,
    pub app: PathBuf,
    pub trusted: PathBuf,
}

impl Install {
    /// App directory placed directly inside the trusted directory.
    pub fn trusted_layout() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let trusted = temp.path().join("Apps");
        let app = trusted.join("VCam.app");
        fs::create_dir_all(&app).expect("Failed to create app directory");
        Self { temp, app, trusted }
    }

    /// App directory outside the trusted directory.
    pub fn untrusted_layout() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let trusted = temp.path().join("Apps");
        let app = temp.path().join("Downloads").join("VCam.app");
        fs::create_dir_all(&trusted).expect("Failed to create trusted directory");
        fs::create_dir_all(&app).expect("Failed to create app directory");
        Self { temp, app, trusted }
    }

    /// App directory one level too deep below the trusted directory.
    pub fn nested_layout() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let trusted = temp.path().join("Apps");
        let app = trusted.join("Bundles").join("VCam.app");
        fs::create_dir_all(&app).expect("Failed to create app directory");
        Self { temp, app, trusted }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// A `run` invocation pointed at this layout.
    pub fn flow(&self, scenario: &str) -> Vcamctl {
        vcamctl()
            .arg("run")
            .arg("--app-path")
            .arg(&self.app)
            .arg("--trusted-dir")
            .arg(&self.trusted)
            .arg("--scenario")
            .arg(scenario)
    }

    /// A `preflight` invocation pointed at this layout.
    pub fn preflight(&self) -> Vcamctl {
        vcamctl()
            .arg("preflight")
            .arg(&self.app)
            .arg("--trusted-dir")
            .arg(&self.trusted)
    }
}

/// Start building a vcamctl invocation.
pub fn vcamctl() -> Vcamctl {
    Vcamctl {
        cmd: Command::cargo_bin("vcamctl").expect("vcamctl binary should be built"),
    }
}

pub struct Vcamctl {
    cmd: Command,
}

impl Vcamctl {
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.cmd.args(args);
        self
    }

    /// Run to completion and capture everything the process wrote.
    pub fn run(mut self) -> SpecRun {
        let output = self.cmd.output().expect("vcamctl should spawn");
        SpecRun::from(output)
    }
}

/// Captured result of one vcamctl invocation.
pub struct SpecRun {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for SpecRun {
    fn from(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl SpecRun {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Last line written to stdout, for asserting on the final status.
    pub fn last_line(&self) -> &str {
        self.stdout.lines().last().unwrap_or("")
    }
}
