//! # Scoring Engine
//!
//! Turns a receipt into a reward-points score.
//!
//! ## Rule Table
//! ```text
//! ┌────┬─────────────────────────────────────────────────────┬──────────────┐
//! │ #  │ Condition                                           │ Points       │
//! ├────┼─────────────────────────────────────────────────────┼──────────────┤
//! │ 1  │ ASCII letter or digit in retailer name              │ 1 each       │
//! │ 2  │ total is a whole number of dollars                  │ 50           │
//! │ 3  │ total is a multiple of 0.25                         │ 25           │
//! │ 4  │ every two items                                     │ 5 per pair   │
//! │ 5  │ trimmed description length is a non-zero multiple   │ ceil(price   │
//! │    │ of 3                                                │   × 0.2)     │
//! │ 6  │ total > 10.00                                       │ 5            │
//! │ 7  │ purchase day-of-month is odd                        │ 6            │
//! │ 8  │ 14:00 < purchase time < 16:00                       │ 10           │
//! └────┴─────────────────────────────────────────────────────┴──────────────┘
//! ```
//!
//! ## Evaluation
//! ```text
//! Receipt ──► ParsedValues::parse ──┬──► total  (Money)      ─► rules 2, 3, 6
//!             (each value once)     ├──► date   (NaiveDate)  ─► rule 7
//!                                   └──► time   (NaiveTime)  ─► rule 8
//!
//! Every rule is evaluated; a value that failed to parse makes the rules
//! reading it score 0 and is reported in ScoreBreakdown::parse_failures.
//! ```
//!
//! ## Example
//! ```rust
//! use points_core::scoring::score;
//! use points_core::{Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//!
//! assert_eq!(score(&receipt).value(), 109);
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::error::{ParseError, ParseResult};
use crate::money::{parse_amount, Money};
use crate::temporal::{parse_purchase_date, parse_purchase_time};
use crate::types::{Item, Points, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const QUARTER: Money = Money::from_cents(25);
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
/// 20% of the item price.
const DESCRIPTION_PRICE_RATE_BPS: u32 = 2_000;
const LARGE_TOTAL_THRESHOLD: Money = Money::from_units(10);
const LARGE_TOTAL_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
/// Window bounds as minutes after midnight, both exclusive.
const AFTERNOON_START_MINUTE: u32 = 14 * 60;
const AFTERNOON_END_MINUTE: u32 = 16 * 60;

// =============================================================================
// Rule
// =============================================================================

/// One independent scoring condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// 1 point per ASCII alphanumeric character in the retailer name.
    RetailerName,
    /// 50 points if the total has no cents.
    RoundDollarTotal,
    /// 25 points if the total is a multiple of 0.25.
    QuarterMultipleTotal,
    /// 5 points for every two items.
    ItemPairs,
    /// ceil(price × 0.2) per item with a qualifying description length.
    ItemDescriptionLength,
    /// 5 points if the total is greater than 10.00.
    LargeTotal,
    /// 6 points if the purchase day is odd.
    OddPurchaseDay,
    /// 10 points if bought strictly between 14:00 and 16:00.
    AfternoonPurchase,
}

impl Rule {
    /// All rules, in table order.
    pub const ALL: [Rule; 8] = [
        Rule::RetailerName,
        Rule::RoundDollarTotal,
        Rule::QuarterMultipleTotal,
        Rule::ItemPairs,
        Rule::ItemDescriptionLength,
        Rule::LargeTotal,
        Rule::OddPurchaseDay,
        Rule::AfternoonPurchase,
    ];

    /// Position in the rule table, starting at 1.
    pub fn number(&self) -> u8 {
        match self {
            Rule::RetailerName => 1,
            Rule::RoundDollarTotal => 2,
            Rule::QuarterMultipleTotal => 3,
            Rule::ItemPairs => 4,
            Rule::ItemDescriptionLength => 5,
            Rule::LargeTotal => 6,
            Rule::OddPurchaseDay => 7,
            Rule::AfternoonPurchase => 8,
        }
    }

    /// Short machine-friendly name, used as a log field.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::RetailerName => "retailer_name",
            Rule::RoundDollarTotal => "round_dollar_total",
            Rule::QuarterMultipleTotal => "quarter_multiple_total",
            Rule::ItemPairs => "item_pairs",
            Rule::ItemDescriptionLength => "item_description_length",
            Rule::LargeTotal => "large_total",
            Rule::OddPurchaseDay => "odd_purchase_day",
            Rule::AfternoonPurchase => "afternoon_purchase",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {} ({})", self.number(), self.name())
    }
}

// =============================================================================
// Parsed Values
// =============================================================================

/// Receipt fields shared by several rules, parsed exactly once.
#[derive(Debug, Clone)]
pub struct ParsedValues {
    pub total: ParseResult<Money>,
    pub purchase_date: ParseResult<NaiveDate>,
    pub purchase_time: ParseResult<NaiveTime>,
}

impl ParsedValues {
    /// Parses the total, purchase date and purchase time of a receipt.
    pub fn parse(receipt: &Receipt) -> Self {
        ParsedValues {
            total: parse_amount(&receipt.total),
            purchase_date: parse_purchase_date(&receipt.purchase_date),
            purchase_time: parse_purchase_time(&receipt.purchase_time),
        }
    }

    /// Errors for whichever shared values failed to parse.
    pub fn failures(&self) -> Vec<ParseError> {
        [
            self.total.as_ref().err(),
            self.purchase_date.as_ref().err(),
            self.purchase_time.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

// =============================================================================
// Score Breakdown
// =============================================================================

/// Points contributed by one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleScore {
    pub rule: Rule,
    pub points: Points,
}

/// Per-rule result of scoring a receipt.
///
/// `parse_failures` lists every value the engine could not read. Those
/// failures already degraded the affected rules to zero; they are diagnostics,
/// not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub rules: Vec<RuleScore>,
    pub parse_failures: Vec<ParseError>,
}

impl ScoreBreakdown {
    /// Sum of every rule's contribution.
    pub fn total(&self) -> Points {
        self.rules.iter().map(|r| r.points).sum()
    }

    /// Contribution of a single rule.
    pub fn points_for(&self, rule: Rule) -> Points {
        self.rules
            .iter()
            .find(|r| r.rule == rule)
            .map(|r| r.points)
            .unwrap_or(Points::ZERO)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Scores a receipt.
///
/// Pure and deterministic: same receipt, same points. Never fails and never
/// panics on malformed field content.
pub fn score(receipt: &Receipt) -> Points {
    score_breakdown(receipt).total()
}

/// Scores a receipt and reports each rule's contribution.
pub fn score_breakdown(receipt: &Receipt) -> ScoreBreakdown {
    let parsed = ParsedValues::parse(receipt);
    let mut parse_failures = parsed.failures();

    let rules = Rule::ALL
        .iter()
        .map(|&rule| RuleScore {
            rule,
            points: evaluate(rule, receipt, &parsed, &mut parse_failures),
        })
        .collect();

    ScoreBreakdown {
        rules,
        parse_failures,
    }
}

/// Evaluates one rule. Item price failures are appended to `failures`.
fn evaluate(
    rule: Rule,
    receipt: &Receipt,
    parsed: &ParsedValues,
    failures: &mut Vec<ParseError>,
) -> Points {
    let points = match rule {
        Rule::RetailerName => alphanumeric_count(&receipt.retailer),

        Rule::RoundDollarTotal => match &parsed.total {
            Ok(total) if total.is_whole_units() => ROUND_DOLLAR_POINTS,
            _ => 0,
        },

        Rule::QuarterMultipleTotal => match &parsed.total {
            Ok(total) if total.is_multiple_of(QUARTER) => QUARTER_MULTIPLE_POINTS,
            _ => 0,
        },

        Rule::ItemPairs => (receipt.items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR,

        Rule::ItemDescriptionLength => receipt
            .items
            .iter()
            .map(|item| description_points(item, failures))
            .fold(0u64, u64::saturating_add),

        Rule::LargeTotal => match &parsed.total {
            Ok(total) if *total > LARGE_TOTAL_THRESHOLD => LARGE_TOTAL_POINTS,
            _ => 0,
        },

        Rule::OddPurchaseDay => match &parsed.purchase_date {
            Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
            _ => 0,
        },

        Rule::AfternoonPurchase => match &parsed.purchase_time {
            Ok(time) => {
                let minute = time.hour() * 60 + time.minute();
                if minute > AFTERNOON_START_MINUTE && minute < AFTERNOON_END_MINUTE {
                    AFTERNOON_POINTS
                } else {
                    0
                }
            }
            Err(_) => 0,
        },
    };

    Points::new(points)
}

/// Single pass over the name; only ASCII letters and digits count.
fn alphanumeric_count(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn description_points(item: &Item, failures: &mut Vec<ParseError>) -> u64 {
    let length = item.trimmed_description().chars().count();
    if length == 0 || length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }

    match parse_amount(&item.price) {
        // Negative prices would pull the score below zero
        Ok(price) => price.ceil_units_at_bps(DESCRIPTION_PRICE_RATE_BPS).max(0) as u64,
        Err(e) => {
            failures.push(e);
            0
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(retailer: &str, date: &str, time: &str, items: Vec<Item>, total: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: total.to_string(),
        }
    }

    /// Receipt that scores zero on every rule except the one under test.
    fn neutral() -> Receipt {
        receipt("", "2022-01-02", "09:00", Vec::new(), "0.01")
    }

    fn target_receipt() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        )
    }

    fn corner_market_receipt() -> Receipt {
        receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![Item::new("Gatorade", "2.25"); 4],
            "9.00",
        )
    }

    #[test]
    fn test_neutral_receipt_scores_zero() {
        let breakdown = score_breakdown(&neutral());
        assert_eq!(breakdown.total(), Points::ZERO);
        assert!(breakdown.parse_failures.is_empty());
    }

    #[test]
    fn test_target_receipt_scores_33() {
        let breakdown = score_breakdown(&target_receipt());
        assert_eq!(breakdown.points_for(Rule::RetailerName).value(), 6);
        assert_eq!(breakdown.points_for(Rule::RoundDollarTotal).value(), 0);
        assert_eq!(breakdown.points_for(Rule::QuarterMultipleTotal).value(), 0);
        assert_eq!(breakdown.points_for(Rule::ItemPairs).value(), 10);
        // "Emils Cheese Pizza" (18) → 3, "Klarbrunn 12-PK 12 FL OZ" (24) → 3
        assert_eq!(breakdown.points_for(Rule::ItemDescriptionLength).value(), 6);
        assert_eq!(breakdown.points_for(Rule::LargeTotal).value(), 5);
        assert_eq!(breakdown.points_for(Rule::OddPurchaseDay).value(), 6);
        assert_eq!(breakdown.points_for(Rule::AfternoonPurchase).value(), 0);
        assert_eq!(breakdown.total().value(), 33);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let breakdown = score_breakdown(&corner_market_receipt());
        assert_eq!(breakdown.points_for(Rule::RetailerName).value(), 14);
        assert_eq!(breakdown.points_for(Rule::RoundDollarTotal).value(), 50);
        assert_eq!(breakdown.points_for(Rule::QuarterMultipleTotal).value(), 25);
        assert_eq!(breakdown.points_for(Rule::ItemPairs).value(), 10);
        assert_eq!(breakdown.points_for(Rule::ItemDescriptionLength).value(), 0);
        assert_eq!(breakdown.points_for(Rule::LargeTotal).value(), 0);
        assert_eq!(breakdown.points_for(Rule::OddPurchaseDay).value(), 0);
        assert_eq!(breakdown.points_for(Rule::AfternoonPurchase).value(), 10);
        assert_eq!(score(&corner_market_receipt()).value(), 109);
    }

    #[test]
    fn test_score_is_deterministic() {
        let r = target_receipt();
        assert_eq!(score(&r), score(&r));
        assert_eq!(score_breakdown(&r), score_breakdown(&r));
    }

    #[test]
    fn test_breakdown_lists_every_rule_in_order() {
        let breakdown = score_breakdown(&target_receipt());
        let rules: Vec<Rule> = breakdown.rules.iter().map(|r| r.rule).collect();
        assert_eq!(rules, Rule::ALL.to_vec());
        assert_eq!(
            Rule::ALL.iter().map(Rule::number).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    // -------------------------------------------------------------------------
    // Rule 1
    // -------------------------------------------------------------------------

    #[test]
    fn test_retailer_name_counts_only_ascii_alphanumerics() {
        let score_for = |name: &str| {
            let mut r = neutral();
            r.retailer = name.to_string();
            score_breakdown(&r).points_for(Rule::RetailerName).value()
        };
        assert_eq!(score_for("Target"), 6);
        assert_eq!(score_for("M&M Corner Market"), 14);
        assert_eq!(score_for("Walgreens #42"), 11);
        assert_eq!(score_for("  - & -  "), 0);
        assert_eq!(score_for("Café"), 3);
    }

    // -------------------------------------------------------------------------
    // Rules 2, 3, 6 (total)
    // -------------------------------------------------------------------------

    #[test]
    fn test_round_dollar_uses_numeric_equality_not_suffix() {
        for total in ["9.00", "9", "9.0", "9.000"] {
            let mut r = neutral();
            r.total = total.to_string();
            let breakdown = score_breakdown(&r);
            assert_eq!(breakdown.points_for(Rule::RoundDollarTotal).value(), 50, "{total}");
            assert_eq!(breakdown.points_for(Rule::QuarterMultipleTotal).value(), 25, "{total}");
        }
    }

    #[test]
    fn test_total_35_35_is_neither_round_nor_quarter() {
        let mut r = neutral();
        r.total = "35.35".to_string();
        let breakdown = score_breakdown(&r);
        assert_eq!(breakdown.points_for(Rule::RoundDollarTotal), Points::ZERO);
        assert_eq!(breakdown.points_for(Rule::QuarterMultipleTotal), Points::ZERO);
    }

    #[test]
    fn test_quarter_multiple_without_round_dollar() {
        let mut r = neutral();
        r.total = "10.75".to_string();
        let breakdown = score_breakdown(&r);
        assert_eq!(breakdown.points_for(Rule::RoundDollarTotal).value(), 0);
        assert_eq!(breakdown.points_for(Rule::QuarterMultipleTotal).value(), 25);
    }

    #[test]
    fn test_large_total_threshold_is_strict() {
        let large_total = |total: &str| {
            let mut r = neutral();
            r.total = total.to_string();
            score_breakdown(&r).points_for(Rule::LargeTotal).value()
        };
        assert_eq!(large_total("10.00"), 0);
        assert_eq!(large_total("10.01"), 5);
        assert_eq!(large_total("9.99"), 0);
    }

    #[test]
    fn test_unparseable_total_scores_zero_on_every_total_rule() {
        let mut r = corner_market_receipt();
        r.total = "nine dollars".to_string();
        let breakdown = score_breakdown(&r);

        assert_eq!(breakdown.points_for(Rule::RoundDollarTotal), Points::ZERO);
        assert_eq!(breakdown.points_for(Rule::QuarterMultipleTotal), Points::ZERO);
        assert_eq!(breakdown.points_for(Rule::LargeTotal), Points::ZERO);
        // The other rules still run
        assert_eq!(breakdown.total().value(), 14 + 10 + 10);
        assert!(matches!(
            breakdown.parse_failures.as_slice(),
            [ParseError::Amount { .. }]
        ));
    }

    // -------------------------------------------------------------------------
    // Rule 4
    // -------------------------------------------------------------------------

    #[test]
    fn test_item_pairs_use_integer_division() {
        let pairs = |count: usize| {
            let mut r = neutral();
            r.items = vec![Item::new("ab", "1.00"); count];
            score_breakdown(&r).points_for(Rule::ItemPairs).value()
        };
        assert_eq!(pairs(0), 0);
        assert_eq!(pairs(1), 0);
        assert_eq!(pairs(4), 10);
        assert_eq!(pairs(5), 10);
        assert_eq!(pairs(6), 15);
    }

    // -------------------------------------------------------------------------
    // Rule 5
    // -------------------------------------------------------------------------

    fn description_score(items: Vec<Item>) -> (u64, Vec<ParseError>) {
        let mut r = neutral();
        r.items = items;
        let breakdown = score_breakdown(&r);
        (
            breakdown.points_for(Rule::ItemDescriptionLength).value(),
            breakdown.parse_failures,
        )
    }

    #[test]
    fn test_description_length_is_measured_after_trimming() {
        let (points, _) = description_score(vec![Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")]);
        assert_eq!(points, 3); // ceil(2.4)

        let (points, _) = description_score(vec![Item::new("Mountain Dew 12PK", "6.49")]);
        assert_eq!(points, 0); // 17 characters
    }

    #[test]
    fn test_description_price_uses_true_ceiling() {
        let (points, _) = description_score(vec![Item::new("abc", "10.00")]);
        assert_eq!(points, 2); // exactly 2.0, no epsilon bump

        let (points, _) = description_score(vec![Item::new("abc", "10.01")]);
        assert_eq!(points, 3);

        let (points, _) = description_score(vec![Item::new("abc", "0.00")]);
        assert_eq!(points, 0);
    }

    #[test]
    fn test_blank_description_never_qualifies() {
        let (points, _) = description_score(vec![
            Item::new("", "100.00"),
            Item::new("      ", "100.00"),
        ]);
        assert_eq!(points, 0);
    }

    #[test]
    fn test_description_points_add_up_per_item() {
        let (points, _) = description_score(vec![
            Item::new("abc", "5.00"),
            Item::new("abcdef", "5.01"),
            Item::new("abcd", "100.00"),
        ]);
        assert_eq!(points, 1 + 2);
    }

    #[test]
    fn test_negative_price_does_not_subtract_points() {
        let (points, _) = description_score(vec![Item::new("abc", "-12.00")]);
        assert_eq!(points, 0);
    }

    #[test]
    fn test_unparseable_price_only_zeroes_that_item() {
        let (points, failures) = description_score(vec![
            Item::new("abc", "free"),
            Item::new("xyz", "5.00"),
        ]);
        assert_eq!(points, 1);
        assert!(matches!(failures.as_slice(), [ParseError::Amount { .. }]));
    }

    #[test]
    fn test_price_of_non_qualifying_item_is_not_read() {
        let (_, failures) = description_score(vec![Item::new("abcd", "free")]);
        assert!(failures.is_empty());
    }

    // -------------------------------------------------------------------------
    // Rule 7
    // -------------------------------------------------------------------------

    #[test]
    fn test_odd_purchase_day() {
        let odd_day = |date: &str| {
            let mut r = neutral();
            r.purchase_date = date.to_string();
            score_breakdown(&r).points_for(Rule::OddPurchaseDay).value()
        };
        assert_eq!(odd_day("2022-01-01"), 6);
        assert_eq!(odd_day("2022-01-02"), 0);
        assert_eq!(odd_day("2022-01-31"), 6);
        assert_eq!(odd_day("not a date"), 0);
    }

    // -------------------------------------------------------------------------
    // Rule 8
    // -------------------------------------------------------------------------

    #[test]
    fn test_afternoon_window_is_exclusive_at_both_ends() {
        let afternoon = |time: &str| {
            let mut r = neutral();
            r.purchase_time = time.to_string();
            score_breakdown(&r).points_for(Rule::AfternoonPurchase).value()
        };
        assert_eq!(afternoon("14:00"), 0);
        assert_eq!(afternoon("14:01"), 10);
        assert_eq!(afternoon("14:33"), 10);
        assert_eq!(afternoon("15:59"), 10);
        assert_eq!(afternoon("16:00"), 0);
        assert_eq!(afternoon("13:59"), 0);
        assert_eq!(afternoon("2:30pm"), 0);
    }

    #[test]
    fn test_all_parse_failures_are_reported_and_absorbed() {
        let r = receipt(
            "Shop",
            "someday",
            "teatime",
            vec![Item::new("abc", "n/a")],
            "lots",
        );
        let breakdown = score_breakdown(&r);
        assert_eq!(breakdown.total().value(), 4);
        assert_eq!(breakdown.parse_failures.len(), 4);
    }

    #[test]
    fn test_huge_item_prices_saturate_instead_of_overflowing() {
        // Each item earns ceil(i64::MAX cents × 20%), about 1.8e16 points
        let items = vec![Item::new("abc", "92233720368547758.07"); 1000];
        let breakdown = score_breakdown(&receipt("", "2022-01-02", "09:00", items, "0.01"));

        assert_eq!(breakdown.points_for(Rule::ItemDescriptionLength).value(), u64::MAX);
        assert_eq!(breakdown.points_for(Rule::ItemPairs).value(), 2500);
        assert_eq!(breakdown.total().value(), u64::MAX);
        assert!(breakdown.parse_failures.is_empty());
    }
}
