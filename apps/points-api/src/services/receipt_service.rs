//! Receipt submission and lookup.
//!
//! ## Submit Flow
//! ```text
//! raw JSON ──► receipt_from_json ──► score_breakdown ──► ReceiptId::generate
//!                  │ shape error          │ absorbed parse        │
//!                  ▼                      │ failures logged       ▼
//!            InvalidReceipt (400)         ▼                 store.put ──► id
//!                                    Points (never fails)
//! ```
//!
//! ## Lookup Flow
//! ```text
//! id text ──► ReceiptId::from_str ──► store.get ──► Some(entry) ──► points
//!                  │ not a UUID                 └─► None ──► NotFound (404)
//!                  └──────────────────────────────────────► NotFound (404)
//! ```

use std::sync::Arc;

use points_core::validation::{receipt_from_json, validate_receipt};
use points_core::{score_breakdown, Points, Receipt, ReceiptId, ScoredReceipt};
use points_store::{MemoryStore, ReceiptStore};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};

/// Scores receipts and remembers their points.
///
/// Holds the store behind an `Arc`, so clones share the same receipts.
pub struct ReceiptService<S = MemoryStore> {
    store: Arc<S>,
}

impl<S> Clone for ReceiptService<S> {
    fn clone(&self) -> Self {
        ReceiptService {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ReceiptStore> ReceiptService<S> {
    /// Creates a service over an explicitly constructed store.
    pub fn new(store: Arc<S>) -> Self {
        ReceiptService { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates, scores and stores a raw JSON receipt.
    ///
    /// ## Errors
    /// - [`ApiError::InvalidReceipt`] when the payload is not receipt-shaped
    /// - [`ApiError::Store`] when the store rejects the write
    pub fn submit(&self, raw: serde_json::Value) -> ApiResult<ReceiptId> {
        let receipt = receipt_from_json(raw)?;
        self.store_scored(receipt)
    }

    /// Validates, scores and stores an already-typed receipt.
    pub fn submit_receipt(&self, receipt: Receipt) -> ApiResult<ReceiptId> {
        validate_receipt(&receipt)?;
        self.store_scored(receipt)
    }

    /// Returns the points stored for `id`.
    ///
    /// Text that is not a UUID cannot name a stored receipt, so it is reported
    /// as not found rather than as a bad request.
    pub fn lookup(&self, id: &str) -> ApiResult<Points> {
        self.receipt(id).map(|entry| entry.points)
    }

    /// Returns the whole stored entry for `id`.
    pub fn receipt(&self, id: &str) -> ApiResult<ScoredReceipt> {
        let receipt_id: ReceiptId = id.trim().parse().map_err(|_| ApiError::not_found(id))?;

        match self.store.get(&receipt_id)? {
            Some(entry) => {
                debug!(id = %receipt_id, points = entry.points.value(), "Receipt found");
                Ok(entry)
            }
            None => {
                debug!(id = %receipt_id, "Receipt not found");
                Err(ApiError::not_found(id))
            }
        }
    }

    fn store_scored(&self, receipt: Receipt) -> ApiResult<ReceiptId> {
        let id = ReceiptId::generate();
        let breakdown = score_breakdown(&receipt);
        let points = breakdown.total();

        for failure in &breakdown.parse_failures {
            debug!(%id, error = %failure, "Parse failure absorbed while scoring");
        }
        for rule in breakdown.rules.iter().filter(|r| r.points != Points::ZERO) {
            debug!(%id, rule = rule.rule.name(), points = rule.points.value(), "Rule matched");
        }

        let retailer = receipt.retailer.clone();
        self.store.put(id, ScoredReceipt::new(receipt, points))?;

        info!(%id, %retailer, points = points.value(), "Receipt processed");
        Ok(id)
    }
}
