//! # Error Types — Structured Failure Taxonomy
//!
//! The engine reports every failure synchronously as a structured error.
//! Nothing is silently defaulted: an unparsable date or a contradictory
//! set of stage flags stops the computation before any rule is applied.
//!
//! Where the input is merely incomplete rather than contradictory (a
//! mandatory reconsideration reported complete without its decision date),
//! the engine does not fail; it takes a documented conservative-estimate
//! path instead, so urgency is never understated.

use thiserror::Error;

/// Failures the deadline engine can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeadlineError {
    /// A reference or stage date did not parse to a valid calendar day.
    #[error("invalid date for {field}: {value:?}")]
    InvalidDate {
        /// The request field holding the offending value.
        field: String,
        /// The raw value as received.
        value: String,
    },

    /// No rule exists for the given domain and subtype.
    ///
    /// Defensive: callers reach the catalog through the subtype enums, so
    /// this should be unreachable from validated input.
    #[error("no deadline rule for {domain} subtype {subtype:?}")]
    UnknownCaseSubtype {
        /// The legal domain that was queried.
        domain: String,
        /// The subtype identifier that failed to resolve.
        subtype: String,
    },

    /// A dependent date and its governing flag contradict each other.
    #[error("inconsistent stage input for {field}: {reason}")]
    InconsistentStageInput {
        /// The request field at fault.
        field: String,
        /// Why the combination cannot be resolved.
        reason: String,
    },
}
