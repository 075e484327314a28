//! The access gate
//!
//! [`AccessGate::handle_request`] is the single entry point the conversational layer
//! calls with a raw `userId` argument. It runs a fixed decision chain and returns
//! exactly one [`Outcome`]:
//!
//! 1. Validate the argument. Attack signatures are checked before anything else and
//!    end the request with `SQL_INJECTION_DETECTED`.
//! 2. Malformed identifiers end the request with `INVALID_INPUT`.
//! 3. Resolve the caller's owner id and authorize the request. A different owner ends
//!    the request with `AUTHORIZATION_DENIED`.
//! 4. Only an approved request reaches the transaction store.
//!
//! Collaborator failures in steps 3 and 4 become `SYSTEM_ERROR` with a short fixed
//! description. Nothing is retried and no state is kept between requests.


use std::sync::Arc;

use tracing::{debug, error};

use crate::{
    audit::{AuditEvent, AuditSink, TracingAuditSink},
    auth::{AuthorizationVerdict, authorize},
    constants::{FETCH_FAILURE_MESSAGE, IDENTITY_FAILURE_MESSAGE},
    identity::{CallerIdentity, OwnerResolver},
    outcome::{Failure, Outcome},
    store::TransactionSource,
    validation::{ValidationVerdict, validate},
};

/// Authorization and input-validation gate in front of the transaction store.
///
/// The gate holds only shared handles to its collaborators and is safe to use from
/// many threads at once. Cloning it is cheap.
#[derive(Clone)]
pub struct AccessGate {
    resolver: Arc<dyn OwnerResolver>,
    source: Arc<dyn TransactionSource>,
    audit: Arc<dyn AuditSink>,
}

impl AccessGate {
    /// Create a gate over an identity resolver and a transaction source.
    ///
    /// Failures are audited through [`TracingAuditSink`] unless another sink is set
    /// with [`AccessGate::with_audit_sink`].
    pub fn new(resolver: Arc<dyn OwnerResolver>, source: Arc<dyn TransactionSource>) -> Self {
        Self {
            resolver,
            source,
            audit: Arc::new(TracingAuditSink),
        }
    }

    /// Replace the audit sink.
    pub fn with_audit_sink(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Handle one request for the transactions named by `raw`, on behalf of `caller`.
    pub fn handle_request(&self, raw: &str, caller: &CallerIdentity) -> Outcome {
        let outcome = self.decide(raw, caller);
        if let Outcome::Failure(failure) = &outcome {
            self.audit.record(&AuditEvent::from(failure));
        }
        outcome
    }

    fn decide(&self, raw: &str, caller: &CallerIdentity) -> Outcome {
        let requested = match validate(raw) {
            ValidationVerdict::Malicious(_) => return Failure::sql_injection(raw).into(),
            ValidationVerdict::Malformed => return Failure::invalid_input(raw).into(),
            ValidationVerdict::Valid(id) => id,
        };

        let approved = match authorize(requested, caller, self.resolver.as_ref()) {
            Ok(AuthorizationVerdict::Approved(id)) => id,
            Ok(AuthorizationVerdict::Denied {
                requested,
                authorized,
            }) => return Failure::authorization_denied(requested, authorized).into(),
            Err(e) => {
                error!(error = %e, "Failed to resolve caller identity");
                return Failure::system_error(IDENTITY_FAILURE_MESSAGE).into();
            }
        };

        match self.source.fetch_for_owner(approved) {
            Ok(records) => {
                debug!(owner_id = %approved, count = records.len(), "Request approved");
                Outcome::Success(records)
            }
            Err(e) => {
                error!(owner_id = %approved, error = %e, "Failed to fetch transactions");
                Failure::system_error(FETCH_FAILURE_MESSAGE).into()
            }
        }
    }
}
