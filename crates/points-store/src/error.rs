//! # Store Error Types
//!
//! Error types for receipt store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::sync::PoisonError / duplicate key                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in points-api) ← 500 Internal Server Error                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that "not found" is NOT an error here: `get` returns `Ok(None)` so an
//! unknown id can never be mistaken for a failed read.

use thiserror::Error;

/// Receipt store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An entry already exists under this id.
    ///
    /// ## When This Occurs
    /// - A caller reuses an id instead of generating a fresh one
    /// - Entries are write-once, so this is never treated as an update
    #[error("Receipt {id} is already stored")]
    DuplicateId { id: String },

    /// A writer panicked while holding the lock.
    #[error("Receipt store lock poisoned during {operation}")]
    LockPoisoned { operation: &'static str },
}

impl StoreError {
    /// Creates a DuplicateId error.
    pub fn duplicate(id: impl ToString) -> Self {
        StoreError::DuplicateId { id: id.to_string() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
