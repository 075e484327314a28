//! Caller identity for the access gate
//!
//! The identity of the caller is bound to an authenticated session owned by the
//! surrounding service layer. It is passed into every gate invocation explicitly and
//! resolved to an owner id through an [`OwnerResolver`] each time, so a session that
//! switches users is picked up on the very next request.

pub mod errors;
pub mod session;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

pub use errors::IdentityError;
pub use session::{SessionStore, SessionToken};

/// Numeric identifier of a resource owner (a bank user).
///
/// This is the canonical identifier once a raw argument has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(u64);

impl OwnerId {
    /// Create an owner id from its numeric value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The numeric value of this id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OwnerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Owner id named by a request, in canonical decimal form.
///
/// Produced by validation from a digit-only argument with leading zeros removed.
/// The digit string is not bounded, so an id too large to be any [`OwnerId`] is
/// still a well-formed request and can only ever be denied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestedId(String);

impl RequestedId {
    /// Canonicalize a non-empty string of ASCII digits.
    pub(crate) fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// The canonical decimal digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The owner this request names, if the id fits an [`OwnerId`].
    pub fn owner_id(&self) -> Option<OwnerId> {
        self.0.parse().ok().map(OwnerId::new)
    }
}

impl fmt::Display for RequestedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OwnerId> for RequestedId {
    fn from(id: OwnerId) -> Self {
        Self(id.to_string())
    }
}

/// Opaque identity of the caller, bound to an authenticated session.
///
/// A `CallerIdentity` is only ever constructed by the session layer. It is never
/// derived from the argument the conversational layer forwards to the gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerIdentity {
    session: SessionToken,
}

impl CallerIdentity {
    /// Wrap a session token issued by the session layer.
    pub fn from_session(session: impl Into<SessionToken>) -> Self {
        Self {
            session: session.into(),
        }
    }

    /// The session token this identity is bound to.
    pub fn session_token(&self) -> &str {
        &self.session
    }
}

/// Resolves a caller's identity to the single owner id it may access.
///
/// Implementations are the `resolveCallerOwnerId` collaborator of the gate. They must
/// look the identity up on every call; any failure is reported to the caller as a
/// system error without its internal detail.
pub trait OwnerResolver: Send + Sync {
    /// Resolve the owner id bound to `caller`.
    fn resolve_owner(&self, caller: &CallerIdentity) -> Result<OwnerId>;
}
