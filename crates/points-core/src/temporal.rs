//! # Temporal Module
//!
//! Parses the purchase date and purchase time of a receipt.
//!
//! Both values are local and zone-less: a receipt printed at `14:33` on
//! `2022-03-20` is scored by those wall-clock values, whatever the server's
//! time zone is.
//!
//! ```rust
//! use chrono::{Datelike, Timelike};
//! use points_core::temporal::{parse_purchase_date, parse_purchase_time};
//!
//! let date = parse_purchase_date("2022-01-01").unwrap();
//! assert_eq!(date.day(), 1);
//!
//! let time = parse_purchase_time("14:33").unwrap();
//! assert_eq!((time.hour(), time.minute()), (14, 33));
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ParseError, ParseResult};

/// `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 24-hour `HH:MM`
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a purchase date in `YYYY-MM-DD` form.
///
/// Surrounding whitespace is ignored. Impossible dates (`2022-02-30`) are
/// errors.
pub fn parse_purchase_date(input: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|e| ParseError::Date {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a purchase time in 24-hour `HH:MM` form.
///
/// Seconds are not accepted; `14:33:10` is an error.
pub fn parse_purchase_time(input: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT).map_err(|e| ParseError::Time {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
