//! # Deadline Result — The Uniform Response
//!
//! Every domain entry point produces this one shape. Results are created
//! fresh per call, are immutable, and are never cached or persisted by the
//! engine; the calling layer decides what to do with them.

use serde::{Deserialize, Serialize};

/// The outcome of one deadline computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    /// What kind of deadline this is, e.g. `Mandatory Reconsideration`.
    pub deadline_type: String,
    /// The deadline date in long display form, e.g. `31 March 2024`.
    pub calculated_deadline: String,
    /// Signed days from today to the deadline; negative once passed.
    pub days_remaining: i64,
    /// Whether the case needs urgent action.
    pub is_urgent: bool,
    /// One-sentence description of the deadline.
    pub description: String,
    /// Warnings, most severe first.
    pub warnings: Vec<String>,
    /// Concrete next steps, in order.
    pub next_steps: Vec<String>,
    /// The statutory provision the period comes from.
    pub relevant_rules: String,
    /// Identifier of an extension applied beyond the base period, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_extension: Option<String>,
}
