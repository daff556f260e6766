//! # redress-core — Foundational Types for the Deadline Engine
//!
//! This crate is the bedrock of the Redress stack. It defines the primitives
//! every other crate builds on: the whole-day `CalendarDate` type with its
//! calendar, business-day, and statutory-month arithmetic; the injectable
//! `Clock`; the legal domain and case subtype taxonomy; and the shared error
//! types. Every other crate in the workspace depends on `redress-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Whole-day resolution only.** `CalendarDate` wraps `chrono::NaiveDate`
//!    and has no notion of time of day or timezone. Deadline law works in
//!    days; sub-day precision would only invite inconsistency.
//!
//! 2. **Strict parsing at the boundary.** Dates cross the engine boundary as
//!    ISO-8601 `YYYY-MM-DD` strings and are rejected at construction when
//!    malformed. No downstream code ever sees an unvalidated date.
//!
//! 3. **Single taxonomy enum per concern.** `LegalDomain` and the per-domain
//!    subtype enums are the one definition used across the stack, with
//!    exhaustive `match` everywhere. Adding a subtype forces every consumer
//!    to handle it at compile time.
//!
//! 4. **The clock is injected.** Pure deadline logic never reads the ambient
//!    wall clock. "Today" enters through the `Clock` trait exactly once per
//!    computation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `redress-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`; boundary types implement
//!   `Serialize`/`Deserialize`.

pub mod calendar;
pub mod clock;
pub mod domain;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use calendar::CalendarDate;
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    BenefitType, CaseKind, CourtDeadline, EmploymentClaim, HousingNotice, LegalDomain, TenancyType,
};
pub use error::DeadlineError;
