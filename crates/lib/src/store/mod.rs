//! Transaction storage for txguard
//!
//! This module defines the records the gate hands back to the caller and the
//! `TransactionSource` trait through which the gate reads them. The gate never
//! issues queries itself: it only calls `fetch_for_owner` with an owner id that has
//! already been validated and authorized.

pub mod errors;
pub mod in_memory;

use serde::{Deserialize, Serialize};

use crate::{Result, identity::OwnerId};

pub use errors::StoreError;
pub use in_memory::InMemory;

/// A single bank transaction, as returned to the conversational layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Store-assigned identifier, increasing in insertion order
    pub transaction_id: u64,
    /// Owner of the account the transaction belongs to
    pub user_id: OwnerId,
    /// Payment reference
    pub reference: String,
    pub recipient: String,
    pub amount: f64,
}

/// Public view of a bank user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: OwnerId,
    pub username: String,
}

/// Data-access trait the gate reads transactions through.
///
/// Implementations must be `Send` and `Sync` so a single store can serve gate
/// invocations on many threads. Each call is expected to complete or fail within a
/// bounded time chosen by the implementation; the gate adds no timeout of its own.
pub trait TransactionSource: Send + Sync {
    /// Fetch every transaction belonging to `owner`, ordered by transaction id.
    ///
    /// # Returns
    /// The owner's transactions, or `StoreError::UserNotFound` if the owner does not exist.
    fn fetch_for_owner(&self, owner: OwnerId) -> Result<Vec<TransactionRecord>>;

    /// Look up the public record of a user.
    fn get_user(&self, owner: OwnerId) -> Result<UserRecord>;
}
