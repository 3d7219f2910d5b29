//! # Error Types
//!
//! Domain-specific error types for points-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  points-core errors (this file)                                        │
//! │  ├── ValidationError  - Receipt shape failures (surfaced to caller)    │
//! │  └── ParseError       - Amount/date/time failures (absorbed by rules)  │
//! │                                                                         │
//! │  points-store errors (separate crate)                                  │
//! │  └── StoreError       - Store operation failures                       │
//! │                                                                         │
//! │  points-api errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see (JSON body + status)     │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError::InvalidReceipt → 400                │
//! │        ParseError      → ScoreBreakdown.parse_failures → log only      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt shape errors.
///
/// Raised before scoring when the submitted payload does not look like a
/// receipt at all. Content problems inside well-shaped fields (a total of
/// `"abc"`) are not validation errors; scoring absorbs them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// The payload could not be read as a receipt (missing key, wrong JSON type).
    #[error("receipt has invalid shape: {reason}")]
    InvalidShape { reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field path.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// Failure to read an amount, date or time out of a receipt field.
///
/// ## Policy
/// These never abort scoring. The engine records them in
/// [`ScoreBreakdown::parse_failures`](crate::scoring::ScoreBreakdown) and every
/// rule that depends on the failed value contributes zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text is not a decimal amount.
    #[error("invalid amount '{input}': {reason}")]
    Amount { input: String, reason: &'static str },

    /// Text is not a `YYYY-MM-DD` date.
    #[error("invalid date '{input}': {reason}")]
    Date { input: String, reason: String },

    /// Text is not an `HH:MM` time.
    #[error("invalid time '{input}': {reason}")]
    Time { input: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for parse results.
pub type ParseResult<T> = Result<T, ParseError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("retailer");
        assert_eq!(err.to_string(), "retailer is required");

        let err = ValidationError::InvalidShape {
            reason: "missing field `total`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "receipt has invalid shape: missing field `total`"
        );
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::Amount {
            input: "abc".to_string(),
            reason: "no digits",
        };
        assert_eq!(err.to_string(), "invalid amount 'abc': no digits");
    }
}
