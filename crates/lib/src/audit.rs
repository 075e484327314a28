//! Audit sink for gate failures
//!
//! Every failure the gate returns is also recorded through an [`AuditSink`], keyed
//! by its error kind. Injection attempts and authorization denials are security
//! events and are kept distinguishable from ordinary client errors.

use std::sync::Mutex;

use tracing::{error, info, warn};

use crate::{
    constants::AUDIT_TARGET,
    outcome::{ErrorKind, Failure, FailureContext},
};

/// A failure as seen by the audit sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    pub kind: ErrorKind,
    pub message: String,
    pub context: FailureContext,
}

impl AuditEvent {
    pub fn is_security_event(&self) -> bool {
        self.kind.is_security_event()
    }
}

impl From<&Failure> for AuditEvent {
    fn from(failure: &Failure) -> Self {
        Self {
            kind: failure.kind,
            message: failure.message.clone(),
            context: failure.context.clone(),
        }
    }
}

/// Destination for audit events.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: &AuditEvent);
}

/// Audit sink that emits events through `tracing` on the `txguard::audit` target.
///
/// Security events are logged at `warn`, system errors at `error`, and invalid
/// input at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: &AuditEvent) {
        let kind = event.kind.as_str();
        match (&event.kind, &event.context) {
            (ErrorKind::SqlInjectionDetected, FailureContext::SuspiciousInput(raw)) => {
                warn!(target: AUDIT_TARGET, error_kind = kind, security = true, suspicious_input = ?raw, "{}", event.message);
            }
            (
                ErrorKind::AuthorizationDenied,
                FailureContext::Denied {
                    requested,
                    authorized,
                },
            ) => {
                warn!(target: AUDIT_TARGET, error_kind = kind, security = true, requested = %requested, authorized_id = %authorized, "{}", event.message);
            }
            (ErrorKind::InvalidInput, FailureContext::ProvidedInput(raw)) => {
                info!(target: AUDIT_TARGET, error_kind = kind, security = false, provided_input = ?raw, "{}", event.message);
            }
            (ErrorKind::SystemError, _) => {
                error!(target: AUDIT_TARGET, error_kind = kind, security = false, "{}", event.message);
            }
            _ => {
                warn!(target: AUDIT_TARGET, error_kind = kind, security = event.is_security_event(), context = ?event.context, "{}", event.message);
            }
        }
    }
}

/// Audit sink that keeps every event in memory.
///
/// Useful for tests and for embedders that forward events in batches.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Recorded events that are security-relevant.
    pub fn security_events(&self) -> Vec<AuditEvent> {
        self.events()
            .into_iter()
            .filter(AuditEvent::is_security_event)
            .collect()
    }

    /// Recorded events of one kind.
    pub fn events_of_kind(&self, kind: ErrorKind) -> Vec<AuditEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.kind == kind)
            .collect()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: &AuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
