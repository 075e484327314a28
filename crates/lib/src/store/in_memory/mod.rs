//! In-memory transaction store
//!
//! This module provides an in-memory implementation of [`TransactionSource`],
//! suitable for testing, development, and small deployments where the whole data set
//! fits in memory. State can be saved to and loaded from a JSON file.

mod persistence;

use std::{
    collections::BTreeMap,
    path::Path,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use super::{StoreError, TransactionRecord, TransactionSource, UserRecord};
use crate::{Result, identity::OwnerId};

/// A simple in-memory store keyed by owner id and transaction id.
///
/// Reads and writes go through `RwLock`s so a single store can be shared between
/// gate invocations on many threads.
#[derive(Debug, Default)]
pub struct InMemory {
    pub(crate) users: RwLock<BTreeMap<OwnerId, UserRecord>>,
    pub(crate) transactions: RwLock<BTreeMap<u64, TransactionRecord>>,
}

impl InMemory {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the demo bank's users and their transactions.
    pub fn with_sample_data() -> Result<Self> {
        let store = Self::new();
        for (id, username) in [
            (1, "MartyMcFly"),
            (2, "DocBrown"),
            (3, "BiffTannen"),
            (4, "GeorgeMcFly"),
        ] {
            store.insert_user(UserRecord {
                user_id: OwnerId::new(id),
                username: username.to_string(),
            })?;
        }

        for (owner, reference, recipient, amount) in [
            (1, "DeLoreanRepairs", "Doc Brown Labs", 1000.0),
            (1, "SkateboardUpgrade", "Hill Valley Sports", 150.0),
            (1, "GuitarStrings", "Chuck Berry Music", 25.0),
            (2, "PlutoniumPurchase", "Libyan Nationalists", 5000.0),
            (2, "FluxCapacitorParts", "Hill Valley Hardware", 3000.0),
            (3, "SportsAlmanac", "Blast From The Past Antiques", 200.0),
            (3, "CarWash", "Biff's Auto Detailing", 50.0),
            (4, "SciFiNovelPublishing", "Space Fiction Monthly", 75.0),
            (4, "TypewriterRibbon", "Hill Valley Stationery", 12.5),
        ] {
            store.add_transaction(OwnerId::new(owner), reference, recipient, amount)?;
        }
        Ok(store)
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// `StoreError::UserAlreadyExists` if the id is taken.
    pub fn insert_user(&self, user: UserRecord) -> Result<()> {
        let mut users = self.users_mut()?;
        if users.contains_key(&user.user_id) {
            return Err(StoreError::UserAlreadyExists {
                user_id: user.user_id,
            }
            .into());
        }
        users.insert(user.user_id, user);
        Ok(())
    }

    /// Appends a transaction for an existing user and returns its id.
    pub fn add_transaction(
        &self,
        owner: OwnerId,
        reference: &str,
        recipient: &str,
        amount: f64,
    ) -> Result<u64> {
        if !self.users()?.contains_key(&owner) {
            return Err(StoreError::UserNotFound { user_id: owner }.into());
        }

        let mut transactions = self.transactions_mut()?;
        let transaction_id = transactions
            .keys()
            .next_back()
            .map_or(1, |last| last + 1);
        transactions.insert(
            transaction_id,
            TransactionRecord {
                transaction_id,
                user_id: owner,
                reference: reference.to_string(),
                recipient: recipient.to_string(),
                amount,
            },
        );
        Ok(transaction_id)
    }

    /// Returns every user, ordered by id.
    pub fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(self.users()?.values().cloned().collect())
    }

    /// Saves the entire store to a file as JSON.
    ///
    /// # Arguments
    /// * `path` - The path to the file where the state should be saved.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persistence::save_to_file(self, path)
    }

    /// Loads the store from a JSON file.
    ///
    /// If the file does not exist, a new, empty store is returned.
    ///
    /// # Arguments
    /// * `path` - The path to the file from which to load the state.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        persistence::load_from_file(path)
    }

    fn users(&self) -> Result<RwLockReadGuard<'_, BTreeMap<OwnerId, UserRecord>>> {
        self.users
            .read()
            .map_err(|_| StoreError::LockPoisoned.into())
    }

    fn users_mut(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<OwnerId, UserRecord>>> {
        self.users
            .write()
            .map_err(|_| StoreError::LockPoisoned.into())
    }

    fn transactions(&self) -> Result<RwLockReadGuard<'_, BTreeMap<u64, TransactionRecord>>> {
        self.transactions
            .read()
            .map_err(|_| StoreError::LockPoisoned.into())
    }

    fn transactions_mut(
        &self,
    ) -> Result<RwLockWriteGuard<'_, BTreeMap<u64, TransactionRecord>>> {
        self.transactions
            .write()
            .map_err(|_| StoreError::LockPoisoned.into())
    }
}

impl TransactionSource for InMemory {
    fn fetch_for_owner(&self, owner: OwnerId) -> Result<Vec<TransactionRecord>> {
        if !self.users()?.contains_key(&owner) {
            return Err(StoreError::UserNotFound { user_id: owner }.into());
        }

        let transactions = self.transactions()?;
        let records: Vec<_> = transactions
            .values()
            .filter(|record| record.user_id == owner)
            .cloned()
            .collect();
        tracing::debug!(owner_id = %owner, count = records.len(), "Fetched transactions");
        Ok(records)
    }

    fn get_user(&self, owner: OwnerId) -> Result<UserRecord> {
        self.users()?
            .get(&owner)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound { user_id: owner }.into())
    }
}
