//! # Domain Types
//!
//! Core domain types used throughout Receipt Points.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │  ScoredReceipt  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  short_desc     │   │  receipt        │       │
//! │  │  purchase_date  │   │  price (text)   │   │  points         │       │
//! │  │  purchase_time  │   └─────────────────┘   │  scored_at      │       │
//! │  │  items          │                         └─────────────────┘       │
//! │  │  total (text)   │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │   ReceiptId     │   │     Points      │       │
//! │                        │  UUID v4        │   │  u64 total      │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts, dates and times stay as the text the client sent. They are only
//! interpreted by the scoring rules, which decide what a malformed value means.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt submitted for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name (free text).
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Line items in the order printed.
    pub items: Vec<Item>,

    /// Total amount paid, e.g. `"35.35"`.
    pub total: String,
}

/// A single line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description; may carry stray whitespace.
    pub short_description: String,

    /// Price paid for the item, e.g. `"6.49"`.
    pub price: String,
}

impl Item {
    /// Creates an item from description and price text.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    /// The description with leading/trailing whitespace removed.
    #[inline]
    pub fn trimmed_description(&self) -> &str {
        self.short_description.trim()
    }
}

// =============================================================================
// Points
// =============================================================================

/// A reward-points score. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(u64);

impl Points {
    /// Zero points.
    pub const ZERO: Points = Points(0);

    /// Wraps a raw point count.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Points(value)
    }

    /// Returns the raw point count.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Points {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Points(self.0.saturating_add(other.0))
    }
}

impl std::iter::Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, |acc, p| acc + p)
    }
}

// =============================================================================
// Receipt Identifier
// =============================================================================

/// Opaque identifier handed back after a receipt is processed.
///
/// ## Why UUID v4?
/// 122 random bits: collisions are negligible without any coordination
/// between concurrent submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(ReceiptId)
    }
}

// =============================================================================
// Scored Receipt
// =============================================================================

/// A receipt together with the score computed for it.
///
/// This is what the store keeps per identifier. It is written once and never
/// updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredReceipt {
    /// The receipt exactly as submitted.
    pub receipt: Receipt,

    /// The score computed for it.
    pub points: Points,

    /// When the score was computed.
    pub scored_at: DateTime<Utc>,
}

impl ScoredReceipt {
    /// Pairs a receipt with its points, stamped with the current time.
    pub fn new(receipt: Receipt, points: Points) -> Self {
        ScoredReceipt {
            receipt,
            points,
            scored_at: Utc::now(),
        }
    }
}
