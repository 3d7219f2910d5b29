//! # points-core: Pure Scoring Logic for Receipt Points
//!
//! This crate is the **heart** of Receipt Points. It turns a purchase receipt
//! into a reward-points score with pure functions and zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    points-api (axum)                            │   │
//! │  │    POST /receipts/process        GET /receipts/{id}/points     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ points-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ temporal  │  │  scoring  │  │   │
//! │  │   │  Receipt  │  │   Money   │  │ NaiveDate │  │  8 rules  │  │   │
//! │  │   │   Item    │  │  parser   │  │ NaiveTime │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 points-store (memory only)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, Points, ReceiptId)
//! - [`money`] - Money type and amount parser (integer cents, no floats)
//! - [`temporal`] - Purchase date/time parsing
//! - [`scoring`] - The scoring engine
//! - [`validation`] - Receipt shape validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use points_core::{score, validation::receipt_from_json};
//!
//! let raw = serde_json::json!({
//!     "retailer": "Target",
//!     "purchaseDate": "2022-01-01",
//!     "purchaseTime": "13:01",
//!     "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
//!     "total": "6.49"
//! });
//!
//! let receipt = receipt_from_json(raw).unwrap();
//! // 6 (retailer) + 6 (odd day)
//! assert_eq!(score(&receipt).value(), 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod scoring;
pub mod temporal;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ParseError, ValidationError};
pub use money::Money;
pub use scoring::{score, score_breakdown, Rule, ScoreBreakdown};
pub use types::*;
