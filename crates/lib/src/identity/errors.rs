//! Identity error types for the txguard library.

use thiserror::Error as ThisError;

use crate::Error;

/// Errors that can occur while resolving a caller's identity.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum IdentityError {
    /// No session exists for the presented token.
    #[error("Session not found")]
    SessionNotFound,

    /// The session table lock was poisoned by a panicking writer.
    #[error("Session store lock poisoned")]
    LockPoisoned,

    /// An external identity provider failed.
    #[error("Identity lookup failed: {reason}")]
    LookupFailed {
        /// Description of the failure
        reason: String,
    },
}

impl IdentityError {
    /// Check if this error indicates the session does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, IdentityError::SessionNotFound)
    }
}

impl From<IdentityError> for Error {
    fn from(err: IdentityError) -> Self {
        Error::Identity(err)
    }
}
