//! # redress-rules — The Statutory Rule Table
//!
//! Encodes the limitation periods, urgency thresholds, and citations the
//! deadline engine works from, as one closed lookup table keyed by
//! [`CaseKind`](redress_core::CaseKind).
//!
//! ## Design
//!
//! Statutory constants live here and nowhere else. Calculators never branch
//! on literal day counts; they look the rule up and apply whatever period
//! the entry carries. Per-subtype differences (the six-month redundancy
//! period replacing the employment default, the tighter housing urgency
//! threshold) are expressed as data on the entry, not as conditionals in
//! engine code. That keeps the table auditable in one place and lets a new
//! subtype be added without touching orchestration logic.
//!
//! The table is built once per process and is read-only thereafter.
//!
//! ## Accuracy
//!
//! The encoded constants reflect the statutes cited on each entry at the
//! time they were written. The engine does not verify that they remain
//! legally current.

pub mod catalog;
pub mod period;

pub use catalog::{RuleCatalog, RuleEntry};
pub use period::RulePeriod;
