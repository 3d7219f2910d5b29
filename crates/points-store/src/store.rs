//! # Receipt Store Abstraction
//!
//! The only way the rest of the system touches stored receipts.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  put(id, entry) → Ok(())            entry visible to every later get   │
//! │                 → Err(DuplicateId)  entries are never overwritten      │
//! │                                                                         │
//! │  get(id)        → Ok(Some(entry))   known id                           │
//! │                 → Ok(None)          unknown id (NOT an error, NOT 0)   │
//! │                                                                         │
//! │  No update. No delete. Contents vanish with the process.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use points_core::{ReceiptId, ScoredReceipt};

use crate::error::StoreResult;

/// Write-once map from receipt id to scored receipt.
///
/// Implementations must be safe to share across threads: one writer per
/// submission alongside any number of concurrent readers.
pub trait ReceiptStore: Send + Sync {
    /// Stores `entry` under `id`.
    fn put(&self, id: ReceiptId, entry: ScoredReceipt) -> StoreResult<()>;

    /// Looks up the entry stored under `id`.
    fn get(&self, id: &ReceiptId) -> StoreResult<Option<ScoredReceipt>>;

    /// Number of stored receipts.
    fn len(&self) -> StoreResult<usize>;

    /// True when nothing has been stored yet.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
