// SPDX-License-Identifier: MIT
// Copyright (c) 2026 VCam Contributors

//! Simulated extension service
//!
//! An in-process model of the OS extension manager, used to exercise the
//! full activation conversation without touching the real system. It
//! honors the service contract: per submitted request, zero or one
//! replacement query, zero or one approval notification, then exactly one
//! terminal event.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;
use vcam_core::{
    ExtensionIdentity, ExtensionProperties, ExtensionService, ReplacementAction, RequestOutcome,
    ServiceError, ServiceErrorCode, ServiceEvent,
};

/// How the simulated OS responds to requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalProfile {
    /// Requests complete immediately
    Granted,
    /// Requests need user approval, granted after `delay`
    RequiresApproval { delay: Duration },
    /// Requests are rejected by system policy
    Denied,
    /// Requests are staged until the next reboot
    NeedsReboot,
    /// Requests finish with an outcome code from a future OS release
    FutureOutcome(i64),
}

struct SimState {
    installed: Option<ExtensionProperties>,
    generation: u64,
}

/// Simulated OS extension-management service
///
/// Submissions return immediately; the scripted conversation plays out on
/// a spawned task and arrives on the receiver returned by [`SimService::new`].
/// Clones share the installed-extension registry.
#[derive(Clone)]
pub struct SimService {
    profile: ApprovalProfile,
    state: Arc<Mutex<SimState>>,
    events: mpsc::UnboundedSender<ServiceEvent>,
}

impl SimService {
    /// Create a service plus the receiver its callbacks arrive on
    pub fn new(profile: ApprovalProfile) -> (Self, mpsc::UnboundedReceiver<ServiceEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let service = Self {
            profile,
            state: Arc::new(Mutex::new(SimState {
                installed: None,
                generation: 0,
            })),
            events,
        };
        (service, rx)
    }

    /// Whether the simulated OS currently has the extension installed
    pub fn installed(&self) -> bool {
        self.lock().installed.is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SimState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn send(&self, event: ServiceEvent) {
        // The driving loop may already be gone during shutdown
        let _ = self.events.send(event);
    }

    /// Properties the next successful install would register
    fn next_properties(&self, identity: &ExtensionIdentity) -> ExtensionProperties {
        let state = self.lock();
        ExtensionProperties::new(identity.0.clone(), format!("1.{}", state.generation))
    }

    fn finish_install(&self, identity: &ExtensionIdentity) {
        let mut state = self.lock();
        let props = ExtensionProperties::new(identity.0.clone(), format!("1.{}", state.generation));
        state.generation += 1;
        state.installed = Some(props);
        drop(state);
        self.send(ServiceEvent::Finished(RequestOutcome::Completed));
    }

    async fn play_activation(self, identity: ExtensionIdentity) {
        let existing = self.lock().installed.clone();
        if let Some(existing) = existing {
            let (tx, rx) = oneshot::channel();
            self.send(ServiceEvent::ReplacementRequired {
                existing,
                replacement: self.next_properties(&identity),
                decision: tx,
            });
            match rx.await {
                Ok(ReplacementAction::Replace) => {}
                Ok(ReplacementAction::Cancel) | Err(_) => {
                    self.send(ServiceEvent::Failed(ServiceError::new(
                        ServiceErrorCode::RequestCanceled,
                        "replacement declined",
                    )));
                    return;
                }
            }
        }

        match self.profile {
            ApprovalProfile::Granted => self.finish_install(&identity),
            ApprovalProfile::RequiresApproval { delay } => {
                self.send(ServiceEvent::NeedsUserApproval);
                tokio::time::sleep(delay).await;
                self.finish_install(&identity);
            }
            ApprovalProfile::Denied => self.send(ServiceEvent::Failed(ServiceError::new(
                ServiceErrorCode::ForbiddenBySystemPolicy,
                "denied by simulated policy",
            ))),
            // The staged install never lands: the simulated machine does not reboot
            ApprovalProfile::NeedsReboot => self.send(ServiceEvent::Finished(
                RequestOutcome::WillCompleteAfterReboot,
            )),
            ApprovalProfile::FutureOutcome(raw) => {
                self.send(ServiceEvent::Finished(RequestOutcome::from_raw(raw)));
            }
        }
    }

    async fn play_deactivation(self, _identity: ExtensionIdentity) {
        if self.lock().installed.is_none() {
            self.send(ServiceEvent::Failed(ServiceError::new(
                ServiceErrorCode::ExtensionNotFound,
                "extension is not installed",
            )));
            return;
        }

        match self.profile {
            ApprovalProfile::Granted => {
                self.lock().installed = None;
                self.send(ServiceEvent::Finished(RequestOutcome::Completed));
            }
            ApprovalProfile::RequiresApproval { delay } => {
                self.send(ServiceEvent::NeedsUserApproval);
                tokio::time::sleep(delay).await;
                self.lock().installed = None;
                self.send(ServiceEvent::Finished(RequestOutcome::Completed));
            }
            ApprovalProfile::Denied => self.send(ServiceEvent::Failed(ServiceError::new(
                ServiceErrorCode::ForbiddenBySystemPolicy,
                "denied by simulated policy",
            ))),
            ApprovalProfile::NeedsReboot => self.send(ServiceEvent::Finished(
                RequestOutcome::WillCompleteAfterReboot,
            )),
            ApprovalProfile::FutureOutcome(raw) => {
                self.send(ServiceEvent::Finished(RequestOutcome::from_raw(raw)));
            }
        }
    }
}

#[async_trait]
impl ExtensionService for SimService {
    async fn submit_activation(&self, identity: &ExtensionIdentity) {
        debug!(identity = %identity, "sim: activation submitted");
        tokio::spawn(self.clone().play_activation(identity.clone()));
    }

    async fn submit_deactivation(&self, identity: &ExtensionIdentity) {
        debug!(identity = %identity, "sim: deactivation submitted");
        tokio::spawn(self.clone().play_deactivation(identity.clone()));
    }
}

#[cfg(test)]
#[path = "sim_tests.rs"]
mod tests;
