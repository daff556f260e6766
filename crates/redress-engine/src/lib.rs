//! # redress-engine — Deadline Computation
//!
//! Computes statutory and procedural deadlines for the four legal domains:
//! employment tribunal claims, benefits appeals, housing notices, and
//! general court or tribunal deadlines. Heterogeneous rule shapes (fixed
//! periods, business-day arithmetic, statutory months, and multi-stage
//! procedures whose deadline depends on an earlier step) sit behind one
//! deterministic contract with a uniform result.
//!
//! ## Pipeline
//!
//! ```text
//! DeadlineRequest
//!       │ validate (dates parse, stage flags consistent)
//!       ▼
//! RuleCatalog ──▶ StageResolver ──▶ date arithmetic ──▶ UrgencyClassifier
//!                                                             │
//!                                                             ▼
//!                                                     GuidanceComposer
//!                                                             │
//!                                                             ▼
//!                                                      DeadlineResult
//! ```
//!
//! ## Determinism
//!
//! The whole computation is pure: no I/O, no ambient clock reads. "Today"
//! is captured exactly once per request from the injected
//! [`Clock`](redress_core::Clock), so the remaining days, the urgency
//! tier, and the composed guidance are always mutually consistent.
//! Identical request plus identical today yields an identical result.
//!
//! Requests share no mutable state; the only shared structure is the
//! read-only rule catalog. Arbitrarily many computations may run
//! concurrently without locking.

pub mod calculator;
pub mod guidance;
pub mod request;
pub mod result;
pub mod stage;
pub mod urgency;

// Re-export the engine surface.
pub use calculator::DeadlineCalculator;
pub use guidance::Guidance;
pub use request::{
    AcasStatus, BenefitsRequest, CourtRequest, DeadlineRequest, EmploymentRequest, HousingRequest,
    ReconsiderationStatus, StageInput, ValidRequest,
};
pub use result::DeadlineResult;
pub use stage::{AppliedExtension, ResolvedStage, StageOutcome};
pub use urgency::UrgencyTier;
