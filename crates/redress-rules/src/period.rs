//! # Rule Periods — Statutory Offset Vocabulary
//!
//! The closed set of period shapes statutory deadlines use: plain calendar
//! days, business days, and whole calendar months with an optional
//! subtracted tail. The month form expresses periods like the employment
//! tribunal's "three months minus one day" without special-casing them in
//! engine code.

use redress_core::CalendarDate;

/// A statutory period, applied to a reference date to obtain a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePeriod {
    /// A fixed number of calendar days.
    CalendarDays(i64),
    /// A fixed number of business days (weekends skipped, holidays not).
    BusinessDays(u32),
    /// Whole calendar months, clamped to month end, with `minus_days`
    /// subtracted after the month shift.
    CalendarMonths {
        /// Months to add.
        months: u32,
        /// Calendar days to subtract after the month shift.
        minus_days: u32,
    },
}

impl RulePeriod {
    /// Apply this period to `date`, returning the resulting deadline date.
    pub fn applied_to(&self, date: CalendarDate) -> CalendarDate {
        match *self {
            Self::CalendarDays(n) => date.add_calendar_days(n),
            Self::BusinessDays(n) => date.add_business_days(n),
            Self::CalendarMonths { months, minus_days } => date
                .add_months(months)
                .add_calendar_days(-i64::from(minus_days)),
        }
    }
}

impl std::fmt::Display for RulePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::CalendarDays(n) => write!(f, "{n} {}", plural(n, "day")),
            Self::BusinessDays(n) => {
                write!(f, "{n} business {}", plural(i64::from(n), "day"))
            }
            Self::CalendarMonths { months, minus_days } => {
                write!(f, "{months} {}", plural(i64::from(months), "month"))?;
                if minus_days > 0 {
                    write!(
                        f,
                        " minus {minus_days} {}",
                        plural(i64::from(minus_days), "day")
                    )?;
                }
                Ok(())
            }
        }
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}
