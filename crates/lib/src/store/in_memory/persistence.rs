//! Persistence operations for the InMemory store
//!
//! This module handles serialization and file I/O for saving/loading
//! the in-memory store to/from JSON files.

use std::{collections::BTreeMap, path::Path, sync::RwLock};

use serde::{Deserialize, Deserializer, Serialize};

use super::InMemory;
use crate::{
    Result,
    store::{StoreError, TransactionRecord, UserRecord},
};

/// The current persistence file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const PERSISTENCE_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the persistence version during deserialization.
fn validate_persistence_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != PERSISTENCE_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported persistence version {version}; only version {PERSISTENCE_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// Serializable snapshot of the InMemory store
#[derive(Serialize, Deserialize)]
struct SerializableStore {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_persistence_version"
    )]
    version: u8,
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    transactions: Vec<TransactionRecord>,
}

pub(super) fn save_to_file<P: AsRef<Path>>(store: &InMemory, path: P) -> Result<()> {
    let snapshot = SerializableStore {
        version: PERSISTENCE_VERSION,
        users: store.list_users()?,
        transactions: store.transactions()?.values().cloned().collect(),
    };
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|source| StoreError::SerializationFailed { source })?;
    std::fs::write(path.as_ref(), json).map_err(|source| StoreError::FileIo { source })?;
    tracing::info!(path = %path.as_ref().display(), "Store saved");
    Ok(())
}

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<InMemory> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No store file, starting empty");
        return Ok(InMemory::new());
    }

    let json = std::fs::read_to_string(path).map_err(|source| StoreError::FileIo { source })?;
    let snapshot: SerializableStore = serde_json::from_str(&json)
        .map_err(|source| StoreError::DeserializationFailed { source })?;

    let users: BTreeMap<_, _> = snapshot
        .users
        .into_iter()
        .map(|user| (user.user_id, user))
        .collect();
    let transactions: BTreeMap<_, _> = snapshot
        .transactions
        .into_iter()
        .map(|record| (record.transaction_id, record))
        .collect();

    Ok(InMemory {
        users: RwLock::new(users),
        transactions: RwLock::new(transactions),
    })
}
