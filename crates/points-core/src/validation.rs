//! # Validation Module
//!
//! Shape validation for submitted receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON body (axum Json extractor)                              │
//! │  └── Is it JSON at all?                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Shape (THIS MODULE)                                          │
//! │  ├── receipt_from_json: every key present with the right JSON type     │
//! │  └── validate_receipt:  required text fields are not blank             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring rules                                                │
//! │  └── Amount/date/time CONTENT. Malformed values are absorbed:          │
//! │      the dependent rule scores zero, nothing is rejected.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::validation::receipt_from_json;
//!
//! let raw = serde_json::json!({ "retailer": "Target" });
//! assert!(receipt_from_json(raw).is_err()); // purchaseDate, ... missing
//! ```

use crate::error::ValidationError;
use crate::types::Receipt;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reads a receipt out of an arbitrary JSON value.
///
/// Missing keys, `null`s and wrong JSON types (a number where a string is
/// expected, an object where `items` should be an array) all become
/// [`ValidationError::InvalidShape`] carrying serde's description.
pub fn receipt_from_json(raw: serde_json::Value) -> ValidationResult<Receipt> {
    let receipt: Receipt =
        serde_json::from_value(raw).map_err(|e| ValidationError::InvalidShape {
            reason: e.to_string(),
        })?;
    validate_receipt(&receipt)?;
    Ok(receipt)
}

/// Checks that a typed receipt carries every field scoring reads.
///
/// ## Rules
/// - `retailer`, `purchaseDate`, `purchaseTime`, `total` must not be blank
/// - every item `price` must not be blank
/// - item descriptions MAY be blank (they simply never qualify for rule 5)
/// - an empty `items` list is allowed
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    require("retailer", &receipt.retailer)?;
    require("purchaseDate", &receipt.purchase_date)?;
    require("purchaseTime", &receipt.purchase_time)?;
    require("total", &receipt.total)?;

    for (index, item) in receipt.items.iter().enumerate() {
        if item.price.trim().is_empty() {
            return Err(ValidationError::required(format!("items[{index}].price")));
        }
    }

    Ok(())
}

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
