//! Authorization for the access gate
//!
//! A caller is authorized for exactly one resource: the transactions of the owner
//! its session is bound to. There are no ranges, wildcards, or administrative
//! overrides.

use tracing::debug;

use crate::{
    Result,
    identity::{CallerIdentity, OwnerId, OwnerResolver, RequestedId},
};

/// Result of comparing a requested owner id against the caller's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationVerdict {
    /// The caller asked for another owner's resource.
    Denied {
        requested: RequestedId,
        authorized: OwnerId,
    },
    /// The caller asked for its own resource.
    Approved(OwnerId),
}

impl AuthorizationVerdict {
    pub fn is_approved(&self) -> bool {
        matches!(self, AuthorizationVerdict::Approved(_))
    }

    /// The resource id that may be fetched, only present when approved.
    pub fn resource_id(&self) -> Option<OwnerId> {
        match self {
            AuthorizationVerdict::Approved(id) => Some(*id),
            AuthorizationVerdict::Denied { .. } => None,
        }
    }
}

/// Decide whether `caller` may read the resource of `requested`.
///
/// The authorized owner id is resolved through `resolver` on every call. Ids are
/// compared in canonical form, so a requested id that does not fit an [`OwnerId`]
/// is always denied.
///
/// # Errors
/// Propagates the resolver's error if the caller's identity cannot be resolved.
pub fn authorize(
    requested: RequestedId,
    caller: &CallerIdentity,
    resolver: &dyn OwnerResolver,
) -> Result<AuthorizationVerdict> {
    let authorized = resolver.resolve_owner(caller)?;
    if requested.owner_id() != Some(authorized) {
        debug!(requested = %requested, authorized = %authorized, "Authorization denied");
        return Ok(AuthorizationVerdict::Denied {
            requested,
            authorized,
        });
    }
    Ok(AuthorizationVerdict::Approved(authorized))
}
