//! # Calendar Dates — Whole-Day Arithmetic
//!
//! Defines `CalendarDate`, the whole-day date type used throughout the
//! deadline engine, together with the three kinds of arithmetic statutory
//! periods require: calendar-day offsets, business-day stepping, and
//! calendar-month shifts with month-end clamping.
//!
//! ## Invariant
//!
//! Every `CalendarDate` in the system was either constructed from validated
//! components or parsed from a strict ISO-8601 `YYYY-MM-DD` string. Malformed
//! input is rejected at construction; downstream deadline logic never
//! re-validates.
//!
//! ## Known Simplification
//!
//! Business-day stepping skips Saturdays and Sundays only. Public holidays
//! are not excluded; statutory working-day periods computed here can
//! therefore end a small number of days early, which errs on the side of
//! urgency.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::DeadlineError;

/// An exact whole day, immutable, with no time-of-day or timezone component.
///
/// All arithmetic returns a new value; the receiver is never mutated.
///
/// # Construction
///
/// - [`CalendarDate::new()`] — from year/month/day components.
/// - [`CalendarDate::parse()`] — from a strict ISO-8601 `YYYY-MM-DD` string.
/// - [`CalendarDate::from_naive()`] — from a `chrono::NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from year, month, and day components.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError::InvalidDate`] if the components do not name
    /// a real calendar day (for example 30 February).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DeadlineError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DeadlineError::InvalidDate {
                field: "date".to_string(),
                value: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    /// Parse a date from a strict ISO-8601 calendar date (`YYYY-MM-DD`).
    ///
    /// **Rejects anything but the 10-character canonical form.** Shortened
    /// forms (`2024-1-1`), datetime strings, and slashed formats are all
    /// refused. This keeps the wire representation of a given day unique.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError::InvalidDate`] if the string is not a valid
    /// canonical calendar date.
    pub fn parse(s: &str) -> Result<Self, DeadlineError> {
        let invalid = || DeadlineError::InvalidDate {
            field: "date".to_string(),
            value: s.to_string(),
        };
        if s.len() != 10 {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Create a date from a `chrono::NaiveDate`.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Access the inner `chrono::NaiveDate`.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Shift by `n` calendar days. `n` may be negative.
    ///
    /// Saturates at the bounds of the supported calendar rather than
    /// wrapping; statutory offsets are nowhere near those bounds.
    pub fn add_calendar_days(self, n: i64) -> Self {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n as u64))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        Self(shifted.unwrap_or(self.0))
    }

    /// Step forward day by day, skipping Saturdays and Sundays, until `n`
    /// business days have been added.
    ///
    /// `add_business_days(d, 0)` returns `d` unchanged even when `d` itself
    /// falls on a weekend. Public holidays are not excluded.
    pub fn add_business_days(self, n: u32) -> Self {
        let mut date = self.0;
        let mut remaining = n;
        while remaining > 0 {
            match date.checked_add_days(Days::new(1)) {
                Some(next) => date = next,
                None => break,
            }
            if !is_weekend(date) {
                remaining -= 1;
            }
        }
        Self(date)
    }

    /// Shift forward by whole calendar months, clamping to the end of the
    /// target month where needed (31 January + 1 month = 28 or 29 February).
    ///
    /// The clamp matches the corresponding-date convention used for
    /// statutory month periods.
    pub fn add_months(self, months: u32) -> Self {
        Self(
            self.0
                .checked_add_months(Months::new(months))
                .unwrap_or(self.0),
        )
    }

    /// Signed whole days from `today` to this date.
    ///
    /// Zero when the dates are equal, negative when this date is strictly
    /// in the past.
    pub fn days_until(self, today: CalendarDate) -> i64 {
        self.0.signed_duration_since(today.0).num_days()
    }

    /// Whether this date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        is_weekend(self.0)
    }

    /// Render as canonical ISO-8601 (`YYYY-MM-DD`).
    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Render as a long-form display string, e.g. `31 March 2024`.
    ///
    /// Display only. Formatted strings are never fed back into arithmetic.
    pub fn format_long(&self) -> String {
        self.0.format("%-d %B %Y").to_string()
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.iso())
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
