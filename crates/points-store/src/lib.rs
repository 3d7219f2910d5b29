//! # points-store: Receipt Store for Receipt Points
//!
//! Keeps every scored receipt in memory, keyed by its generated id.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Data Flow                            │
//! │                                                                         │
//! │  ReceiptService::submit / lookup                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   points-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐        ┌────────────────────────────┐ │   │
//! │  │   │   ReceiptStore     │        │        MemoryStore         │ │   │
//! │  │   │   (store.rs)       │◄───────│        (memory.rs)         │ │   │
//! │  │   │                    │        │                            │ │   │
//! │  │   │ put / get / len    │        │ RwLock<HashMap<Id, Entry>> │ │   │
//! │  │   └────────────────────┘        └────────────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use points_core::{Points, Receipt, ReceiptId, ScoredReceipt};
//! use points_store::{MemoryStore, ReceiptStore};
//!
//! let store = MemoryStore::new();
//! let receipt = Receipt {
//!     retailer: "Target".into(),
//!     purchase_date: "2022-01-02".into(),
//!     purchase_time: "13:13".into(),
//!     items: vec![],
//!     total: "1.25".into(),
//! };
//!
//! let id = ReceiptId::generate();
//! store.put(id, ScoredReceipt::new(receipt, Points::new(31))).unwrap();
//! assert_eq!(store.get(&id).unwrap().unwrap().points.value(), 31);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use store::ReceiptStore;
