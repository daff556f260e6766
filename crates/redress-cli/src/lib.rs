//! # redress-cli — Command Modules
//!
//! Argument types and handlers for each subcommand. The binary in
//! `main.rs` parses the top level and dispatches here; handlers build the
//! engine request, run the calculator, and print the uniform result as
//! JSON on stdout.

pub mod benefits;
pub mod court;
pub mod employment;
pub mod housing;
pub mod output;

use redress_core::{CalendarDate, Clock, FixedClock, SystemClock};

/// Build the clock for a run: fixed when `--today` was given, otherwise
/// the system clock.
pub fn clock_from(today: Option<&str>) -> anyhow::Result<Box<dyn Clock>> {
    match today {
        Some(raw) => Ok(Box::new(FixedClock::new(CalendarDate::parse(raw)?))),
        None => Ok(Box::new(SystemClock)),
    }
}
