//! Session management for the gate's callers
//!
//! Provides in-memory session storage mapping session tokens to the owner id of the
//! user who is logged in on that session.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use uuid::Uuid;

use super::{CallerIdentity, IdentityError, OwnerId, OwnerResolver};
use crate::Result;

/// Session token (UUID handed to the presentation layer)
pub type SessionToken = String;

/// In-memory session store
///
/// Maps session tokens to the owner id currently logged in on that session.
/// Sessions are ephemeral and lost on restart. Cloning the store shares the
/// underlying table.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, OwnerId>>>,
}

impl SessionStore {
    /// Create a new empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session for a user
    ///
    /// Generates a random UUID token, binds it to `owner` and returns the caller
    /// identity to present to the gate.
    pub fn create_session(&self, owner: OwnerId) -> Result<CallerIdentity> {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| IdentityError::LockPoisoned)?;
        sessions.insert(token.clone(), owner);
        tracing::debug!(owner_id = %owner, "Session created");
        Ok(CallerIdentity::from_session(token))
    }

    /// Switch the user logged in on an existing session.
    ///
    /// The next gate invocation for this session authorizes against `owner`.
    pub fn switch_user(&self, caller: &CallerIdentity, owner: OwnerId) -> Result<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| IdentityError::LockPoisoned)?;
        let bound = sessions
            .get_mut(caller.session_token())
            .ok_or(IdentityError::SessionNotFound)?;
        tracing::info!(from = %bound, to = %owner, "Session switched user");
        *bound = owner;
        Ok(())
    }

    /// Destroy a session
    ///
    /// Later lookups with the same identity fail with `SessionNotFound`.
    pub fn destroy_session(&self, caller: &CallerIdentity) -> Result<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| IdentityError::LockPoisoned)?;
        sessions.remove(caller.session_token());
        Ok(())
    }

    /// Get the number of active sessions
    pub fn session_count(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }
}

impl OwnerResolver for SessionStore {
    fn resolve_owner(&self, caller: &CallerIdentity) -> Result<OwnerId> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| IdentityError::LockPoisoned)?;
        sessions
            .get(caller.session_token())
            .copied()
            .ok_or_else(|| IdentityError::SessionNotFound.into())
    }
}
