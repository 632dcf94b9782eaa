//! Process-lifetime waitlist storage.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::WaitlistStorage;
use crate::domain::{InsertWaitlistEntry, WaitlistEntry};
use crate::error::WaitlistError;

/// In-memory waitlist store.
///
/// The id counter and the entry map live behind a single
/// [`tokio::sync::RwLock`], so taking an id and inserting the entry happen
/// atomically even on a multi-threaded runtime. Entries are keyed by id,
/// which makes iteration order equal to insertion order.
#[derive(Debug)]
pub struct MemoryStorage {
    state: RwLock<MemoryState>,
}

#[derive(Debug)]
struct MemoryState {
    next_id: i64,
    entries: BTreeMap<i64, WaitlistEntry>,
}

impl MemoryStorage {
    /// Creates an empty store whose first entry gets id `1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                entries: BTreeMap::new(),
            }),
        }
    }

    /// Returns the number of stored entries.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    /// Returns `true` if nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WaitlistStorage for MemoryStorage {
    async fn create_waitlist_entry(
        &self,
        entry: InsertWaitlistEntry,
    ) -> Result<WaitlistEntry, WaitlistError> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| WaitlistError::Storage("waitlist id space exhausted".to_string()))?;

        let stored = WaitlistEntry::from_insert(id, entry, Utc::now());
        state.entries.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_waitlist_entries(&self) -> Result<Vec<WaitlistEntry>, WaitlistError> {
        let state = self.state.read().await;
        Ok(state.entries.values().cloned().collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
