// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! `vcamctl run` - drive an activation flow against the simulated service
//!
//! Builds a coordinator the way a host app would, wires it to the
//! simulator, and pumps the event loop until the flow reaches a state that
//! needs nothing further from this process. Every status transition is
//! printed as it is observed.

use crate::output::{print, OutputFormat};
use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::watch;
use tracing::info;
use vcam_adapters::{ApprovalProfile, NoOpSettingsOpener, OpenCommandSettings, SimService};
use vcam_core::{
    ActivationCoordinator, ExtensionIdentity, ExtensionService, InstallCheck, ServiceEvent,
    SettingsOpener, Status, APPLICATIONS_DIR,
};

/// Extension identity used when none is given
pub const DEFAULT_EXTENSION_ID: &str = "io.vcam.host.avextension";

#[derive(Args)]
pub struct RunArgs {
    /// How the simulated OS responds
    #[arg(long, value_enum, default_value_t = Scenario::Granted)]
    pub scenario: Scenario,

    /// Extension bundle identifier
    #[arg(long, default_value = DEFAULT_EXTENSION_ID)]
    pub extension_id: String,

    /// App path for the install-location preflight (defaults to this executable)
    #[arg(long)]
    pub app_path: Option<PathBuf>,

    /// Trusted applications directory for the preflight
    #[arg(long, default_value = APPLICATIONS_DIR)]
    pub trusted_dir: PathBuf,

    /// Deactivate again after a successful activation
    #[arg(long)]
    pub cycle: bool,

    /// Open system settings when approval is required
    #[arg(long)]
    pub open_settings: bool,

    /// Approval delay for the approval scenario, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub approval_delay_ms: u64,

    /// Output format for status transitions
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Approval is granted immediately
    Granted,
    /// The user must approve in system settings first
    Approval,
    /// The change lands after the next reboot
    Reboot,
    /// System policy rejects the extension
    Denied,
    /// The OS reports an outcome code this build does not know
    Future,
}

impl Scenario {
    fn profile(self, delay: Duration) -> ApprovalProfile {
        match self {
            Scenario::Granted => ApprovalProfile::Granted,
            Scenario::Approval => ApprovalProfile::RequiresApproval { delay },
            Scenario::Reboot => ApprovalProfile::NeedsReboot,
            Scenario::Denied => ApprovalProfile::Denied,
            Scenario::Future => ApprovalProfile::FutureOutcome(99),
        }
    }
}

struct Plan {
    cycle: bool,
    open_settings: bool,
    output: OutputFormat,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let app_path = match &args.app_path {
        Some(path) => path.clone(),
        None => std::env::current_exe()?,
    };
    let install = InstallCheck::for_app(&app_path, &args.trusted_dir);
    let delay = Duration::from_millis(args.approval_delay_ms);
    let (service, events) = SimService::new(args.scenario.profile(delay));
    let identity = ExtensionIdentity::from(args.extension_id.as_str());
    info!(%identity, scenario = ?args.scenario, "starting simulated activation flow");

    let plan = Plan {
        cycle: args.cycle,
        open_settings: args.open_settings,
        output: args.output,
    };

    if args.open_settings {
        let coordinator =
            ActivationCoordinator::new(identity, service, OpenCommandSettings::new(), install);
        drive(coordinator, events, plan).await
    } else {
        let coordinator =
            ActivationCoordinator::new(identity, service, NoOpSettingsOpener::new(), install);
        drive(coordinator, events, plan).await
    }
}

async fn drive<S, O>(
    mut coordinator: ActivationCoordinator<S, O>,
    mut events: UnboundedReceiver<ServiceEvent>,
    plan: Plan,
) -> Result<()>
where
    S: ExtensionService,
    O: SettingsOpener,
{
    let mut status_rx = coordinator.subscribe();
    let initial = status_rx.borrow_and_update().clone();
    report(&initial, plan.output);
    if let Status::Failed(failure) = initial {
        return Err(failure.into());
    }

    coordinator.request_activation().await?;
    let mut cycled = false;
    let mut settings_opened = false;

    loop {
        print_changes(&mut status_rx, plan.output);
        match coordinator.status() {
            Status::Activated if plan.cycle && !cycled => {
                cycled = true;
                coordinator.request_deactivation().await?;
                continue;
            }
            Status::Activated | Status::NeedsReboot => return Ok(()),
            // Only reachable once the cycle's deactivation completes
            Status::Idle => return Ok(()),
            Status::Failed(failure) => return Err(failure.into()),
            Status::NeedsUserApproval if plan.open_settings && !settings_opened => {
                settings_opened = true;
                coordinator.open_system_settings().await;
            }
            _ => {}
        }

        let Some(event) = events.recv().await else {
            bail!("extension service disconnected");
        };
        coordinator.handle_event(event);
    }
}

fn print_changes(rx: &mut watch::Receiver<Status>, output: OutputFormat) {
    while rx.has_changed().unwrap_or(false) {
        let status = rx.borrow_and_update().clone();
        report(&status, output);
    }
}

fn report(status: &Status, output: OutputFormat) {
    print(&StatusLine::from(status), output);
}

#[derive(Serialize)]
struct StatusLine {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl From<&Status> for StatusLine {
    fn from(status: &Status) -> Self {
        Self {
            status: status.name(),
            detail: match status {
                Status::Failed(failure) => Some(failure.to_string()),
                _ => None,
            },
        }
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "status: {} ({})", self.status, detail),
            None => write!(f, "status: {}", self.status),
        }
    }
}
