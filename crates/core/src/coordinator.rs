// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Activation coordinator
//!
//! The state machine at the center of the crate: commands submit requests
//! to the OS extension service, OS callbacks drive the status forward, and
//! every transition is published to subscribers. All methods are meant to
//! run on one logical task; the coordinator itself takes no locks.

use crate::failure::Failure;
use crate::identity::ExtensionIdentity;
use crate::preflight::InstallCheck;
use crate::service::{
    ExtensionProperties, ExtensionService, ReplacementAction, RequestOutcome, ServiceError,
    ServiceEvent,
};
use crate::settings::{SettingsOpener, SECURITY_PANE_URI};
use crate::status::Status;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

/// Commands a caller can issue against the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RequestActivation,
    RequestDeactivation,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::RequestActivation => f.write_str("request-activation"),
            Command::RequestDeactivation => f.write_str("request-deactivation"),
        }
    }
}

/// A command was invoked from a state that does not permit it
///
/// This is a caller bug, not a runtime condition: the presentation layer is
/// expected to consult `Status` and disable the relevant controls. Nothing
/// is submitted to the OS when this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{command} is not permitted while status is {status}")]
pub struct IllegalCommand {
    pub command: Command,
    pub status: Status,
}

/// Purpose of the request currently awaiting a terminal outcome
///
/// Recorded at submission and consulted when the terminal callback
/// arrives, so that a completion during deactivation lands back in `Idle`
/// rather than being mistaken for a finished activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutstandingRequest {
    Activation,
    Deactivation,
}

/// Coordinates activation and deactivation of the camera extension
///
/// Construction decides the initial status from the install-location
/// check; afterwards the status moves only in response to a command or an
/// OS callback, and is replaced wholesale on every transition.
pub struct ActivationCoordinator<S, O> {
    identity: ExtensionIdentity,
    service: S,
    settings: O,
    status: watch::Sender<Status>,
    outstanding: Option<OutstandingRequest>,
}

impl<S, O> ActivationCoordinator<S, O>
where
    S: ExtensionService,
    O: SettingsOpener,
{
    /// Create a coordinator for `identity`, starting from the preflight verdict
    ///
    /// An untrusted install location yields `Status::Failed` immediately;
    /// no request can ever be submitted from that state.
    pub fn new(identity: ExtensionIdentity, service: S, settings: O, install: InstallCheck) -> Self {
        let initial = match install {
            InstallCheck::Trusted => Status::Idle,
            InstallCheck::Untrusted(path) => {
                warn!(
                    path = %path.display(),
                    "app is outside the trusted directory, activation disabled"
                );
                Status::Failed(Failure::InstalledInInvalidLocation(path))
            }
        };
        let (status, _) = watch::channel(initial);
        Self {
            identity,
            service,
            settings,
            status,
            outstanding: None,
        }
    }

    /// The extension this coordinator manages
    pub fn identity(&self) -> &ExtensionIdentity {
        &self.identity
    }

    /// Current status
    pub fn status(&self) -> Status {
        self.status.borrow().clone()
    }

    /// Subscribe to status changes
    ///
    /// The receiver starts at the current value and sees every subsequent
    /// transition.
    pub fn subscribe(&self) -> watch::Receiver<Status> {
        self.status.subscribe()
    }

    /// Submit an activation request for the configured identity
    ///
    /// Legal only while `Idle`. Returns once the request is submitted; the
    /// outcome arrives later through the callback handlers.
    pub async fn request_activation(&mut self) -> Result<(), IllegalCommand> {
        let status = self.status();
        if !status.can_request_activation() {
            return Err(self.illegal(Command::RequestActivation, status));
        }
        info!(identity = %self.identity, "requesting extension activation");
        self.service.submit_activation(&self.identity).await;
        self.outstanding = Some(OutstandingRequest::Activation);
        self.set_status(Status::Requested);
        Ok(())
    }

    /// Submit a deactivation request for the configured identity
    ///
    /// Legal only while `Activated`.
    pub async fn request_deactivation(&mut self) -> Result<(), IllegalCommand> {
        let status = self.status();
        if !status.can_request_deactivation() {
            return Err(self.illegal(Command::RequestDeactivation, status));
        }
        info!(identity = %self.identity, "requesting extension deactivation");
        self.service.submit_deactivation(&self.identity).await;
        self.outstanding = Some(OutstandingRequest::Deactivation);
        self.set_status(Status::RequestedDeactivation);
        Ok(())
    }

    /// Send the user to the settings pane where extension approval lives
    ///
    /// Side action only: the status does not change, and failures are
    /// logged rather than surfaced.
    pub async fn open_system_settings(&self) {
        info!(pane = SECURITY_PANE_URI, "opening system settings");
        if let Err(err) = self.settings.open_pane(SECURITY_PANE_URI).await {
            warn!(error = %err, "failed to open system settings");
        }
    }

    /// Dispatch one service event to the matching handler
    pub fn handle_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::ReplacementRequired {
                existing,
                replacement,
                decision,
            } => {
                let action = self.resolve_replacement(&existing, &replacement);
                // The service may have abandoned the request in the meantime
                let _ = decision.send(action);
            }
            ServiceEvent::NeedsUserApproval => self.note_user_approval_required(),
            ServiceEvent::Finished(outcome) => self.handle_outcome(outcome),
            ServiceEvent::Failed(error) => self.handle_error(error),
        }
    }

    /// Decide what to do about an already-installed copy of the extension
    ///
    /// Policy is fixed: the new version always replaces the old one, with
    /// no prompting.
    pub fn resolve_replacement(
        &self,
        existing: &ExtensionProperties,
        replacement: &ExtensionProperties,
    ) -> ReplacementAction {
        info!(%existing, %replacement, "replacing installed extension");
        ReplacementAction::Replace
    }

    /// The OS is waiting for the user to approve the extension
    ///
    /// Intermediate notification: the request stays outstanding and its
    /// purpose is preserved for the eventual terminal callback.
    pub fn note_user_approval_required(&mut self) {
        if self.outstanding.is_none() {
            warn!("approval notification with no outstanding request, ignoring");
            return;
        }
        self.set_status(Status::NeedsUserApproval);
    }

    /// A request reached its terminal outcome
    pub fn handle_outcome(&mut self, outcome: RequestOutcome) {
        let Some(purpose) = self.outstanding.take() else {
            warn!(?outcome, "terminal outcome with no outstanding request, ignoring");
            return;
        };
        let next = match (purpose, outcome) {
            (_, RequestOutcome::WillCompleteAfterReboot) => Status::NeedsReboot,
            (_, RequestOutcome::Unrecognized(raw)) => {
                warn!(code = raw, "request finished with unrecognized outcome code");
                Status::Failed(Failure::UnexpectedOutcome(raw))
            }
            (OutstandingRequest::Activation, RequestOutcome::Completed) => Status::Activated,
            (OutstandingRequest::Deactivation, RequestOutcome::Completed) => Status::Idle,
        };
        self.set_status(next);
    }

    /// A request failed with a service-reported error
    pub fn handle_error(&mut self, error: ServiceError) {
        if self.outstanding.take().is_none() {
            warn!(error = %error, "error callback with no outstanding request, ignoring");
            return;
        }
        warn!(
            code = error.code.raw(),
            error = %error,
            detail = %error.message,
            "extension request failed"
        );
        self.set_status(Status::Failed(Failure::Service(error)));
    }

    fn illegal(&self, command: Command, status: Status) -> IllegalCommand {
        warn!(%command, %status, "command not permitted in current status");
        IllegalCommand { command, status }
    }

    fn set_status(&mut self, next: Status) {
        info!(from = self.status().name(), to = next.name(), "status changed");
        self.status.send_replace(next);
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
