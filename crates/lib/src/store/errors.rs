//! Storage error types for the txguard library.
//!
//! This module defines structured error types for store operations.

use thiserror::Error;

use crate::identity::OwnerId;

/// Errors that can occur during store operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// No user exists with the given id.
    #[error("User not found: {user_id}")]
    UserNotFound {
        /// The id that was looked up
        user_id: OwnerId,
    },

    /// A user with the given id already exists.
    #[error("User already exists: {user_id}")]
    UserAlreadyExists {
        /// The conflicting id
        user_id: OwnerId,
    },

    /// A store lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// Serialization of the store failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization of a store file failed.
    #[error("Deserialization failed")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Check if this error indicates a user was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::UserNotFound { .. })
    }

    /// Check if this error indicates a conflict.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::UserAlreadyExists { .. })
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StoreError::FileIo { .. })
    }

    /// Check if this error came from (de)serializing the store.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StoreError::SerializationFailed { .. } | StoreError::DeserializationFailed { .. }
        )
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
