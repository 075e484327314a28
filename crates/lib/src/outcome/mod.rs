//! Gate outcomes and their encoding
//!
//! Every request presented to the access gate ends in exactly one [`Outcome`]. This
//! module defines the outcome types, the fixed failure messages, and the encoder
//! that turns an outcome into the structured record returned to the caller and
//! handed to the audit sink.

mod encode;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{INVALID_INPUT_MESSAGE, SQL_INJECTION_MESSAGE},
    identity::{OwnerId, RequestedId},
    store::TransactionRecord,
};

pub use encode::{EncodedOutcome, encode};

/// Failure categories reported by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The argument matched an attack signature.
    SqlInjectionDetected,
    /// The argument is not a well-formed identifier.
    InvalidInput,
    /// The argument names an owner other than the caller.
    AuthorizationDenied,
    /// A collaborator failed; not attributable to the caller's input.
    SystemError,
}

impl ErrorKind {
    /// The stable wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SqlInjectionDetected => "SQL_INJECTION_DETECTED",
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::AuthorizationDenied => "AUTHORIZATION_DENIED",
            ErrorKind::SystemError => "SYSTEM_ERROR",
        }
    }

    /// Check if failures of this kind are security events for the audit sink.
    pub fn is_security_event(&self) -> bool {
        matches!(
            self,
            ErrorKind::SqlInjectionDetected | ErrorKind::AuthorizationDenied
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contextual fields echoed back with a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureContext {
    None,
    /// The raw argument that matched an attack signature, verbatim.
    SuspiciousInput(String),
    /// The raw argument that failed format validation, verbatim.
    ProvidedInput(String),
    /// Both owner ids involved in a denied request.
    Denied {
        requested: RequestedId,
        authorized: OwnerId,
    },
}

/// A terminal failure produced by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
    pub context: FailureContext,
}

impl Failure {
    /// Failure for an argument that matched an attack signature.
    pub fn sql_injection(raw: &str) -> Self {
        Self {
            kind: ErrorKind::SqlInjectionDetected,
            message: SQL_INJECTION_MESSAGE.to_string(),
            context: FailureContext::SuspiciousInput(raw.to_string()),
        }
    }

    /// Failure for an argument that is not a decimal identifier.
    pub fn invalid_input(raw: &str) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            message: INVALID_INPUT_MESSAGE.to_string(),
            context: FailureContext::ProvidedInput(raw.to_string()),
        }
    }

    /// Failure for a request naming another owner's resource.
    pub fn authorization_denied(requested: impl Into<RequestedId>, authorized: OwnerId) -> Self {
        let requested = requested.into();
        Self {
            kind: ErrorKind::AuthorizationDenied,
            message: format!(
                "Access denied. You can only view transactions for your own account (userId {authorized}). Attempted access to userId {requested} has been logged."
            ),
            context: FailureContext::Denied {
                requested,
                authorized,
            },
        }
    }

    /// Failure caused by a collaborator. `message` must be a short fixed description,
    /// never internal error text.
    pub fn system_error(message: &str) -> Self {
        Self {
            kind: ErrorKind::SystemError,
            message: message.to_string(),
            context: FailureContext::None,
        }
    }
}

/// The single terminal result of a gate invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The caller's own transactions.
    Success(Vec<TransactionRecord>),
    Failure(Failure),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The failure kind, or `None` for a success.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure.kind),
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    pub fn payload(&self) -> Option<&[TransactionRecord]> {
        match self {
            Outcome::Success(records) => Some(records.as_slice()),
            Outcome::Failure(_) => None,
        }
    }
}

impl From<Failure> for Outcome {
    fn from(failure: Failure) -> Self {
        Outcome::Failure(failure)
    }
}
