//! # Memory Store
//!
//! [`ReceiptStore`] backed by a `HashMap` behind a `RwLock`.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  put(id, entry)            get(id)              get(id)                 │
//! │       │                       │                    │                    │
//! │       ▼                       ▼                    ▼                    │
//! │  write lock (exclusive)   read lock (shared)   read lock (shared)      │
//! │       │                                                                 │
//! │       └── insert completes before the lock is released, so any get     │
//! │           that starts after put returns sees the whole entry           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Contents live for the lifetime of the process only.

use std::collections::HashMap;
use std::sync::RwLock;

use points_core::{ReceiptId, ScoredReceipt};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::ReceiptStore;

/// In-memory, process-lifetime receipt store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<ReceiptId, ScoredReceipt>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryStore {
    fn put(&self, id: ReceiptId, entry: ScoredReceipt) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned { operation: "put" })?;

        if entries.contains_key(&id) {
            return Err(StoreError::duplicate(id));
        }
        entries.insert(id, entry);

        debug!(%id, stored = entries.len(), "Receipt stored");
        Ok(())
    }

    fn get(&self, id: &ReceiptId) -> StoreResult<Option<ScoredReceipt>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned { operation: "get" })?;
        Ok(entries.get(id).cloned())
    }

    fn len(&self) -> StoreResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned { operation: "len" })?;
        Ok(entries.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
