//! # Guidance Composer — Warnings and Next Steps
//!
//! Turns the resolved stage, urgency tier, and domain flags into the
//! ordered guidance lists of the result.
//!
//! ## Ordering
//!
//! Warnings are assembled most-severe first: a passed-deadline warning,
//! then the urgency warning, then domain-specific situational notes.
//! Inapplicable notes are simply not emitted. Next steps come from a
//! per-domain, per-stage template.
//!
//! Output is stable and reproducible for identical input: no randomness
//! and no clock reads happen here; the days remaining arrive as an
//! argument.

use redress_core::{CaseKind, CourtDeadline, HousingNotice, TenancyType};

use crate::request::{AcasStatus, StageInput};
use crate::stage::{ResolvedStage, StageOutcome};
use crate::urgency::UrgencyTier;

/// Ordered warnings and next steps for one result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    /// Warnings, most severe first.
    pub warnings: Vec<String>,
    /// Concrete next steps, in the order to take them.
    pub next_steps: Vec<String>,
}

/// Compose guidance for a resolved deadline.
pub fn compose(
    kind: CaseKind,
    outcome: &StageOutcome,
    input: &StageInput,
    tier: UrgencyTier,
    days_remaining: i64,
) -> Guidance {
    Guidance {
        warnings: compose_warnings(kind, outcome, input, tier, days_remaining),
        next_steps: next_steps(kind, outcome, input),
    }
}

fn compose_warnings(
    kind: CaseKind,
    outcome: &StageOutcome,
    input: &StageInput,
    tier: UrgencyTier,
    days_remaining: i64,
) -> Vec<String> {
    let mut warnings = Vec::new();

    match tier {
        UrgencyTier::Passed => {
            warnings.push(
                "This deadline may have passed. Seek legal advice immediately; \
                 out-of-time claims are accepted only in limited circumstances."
                    .to_string(),
            );
        }
        UrgencyTier::Urgent => {
            let unit = if days_remaining == 1 { "day" } else { "days" };
            warnings.push(format!(
                "Only {days_remaining} {unit} left until this deadline. Act now."
            ));
        }
        UrgencyTier::Normal => {}
    }

    // Domain-specific situational notes, after the severity-ordered ones.
    match (kind, input) {
        (CaseKind::Employment(_), StageInput::Employment { acas }) => {
            if outcome.applied_extension.is_some() {
                warnings.push(
                    "The ACAS early conciliation extension applies: the deadline \
                     runs from your certificate date."
                        .to_string(),
                );
            }
            match acas {
                AcasStatus::NotContacted => warnings.push(
                    "You must notify ACAS and complete early conciliation before \
                     an employment tribunal will accept your claim."
                        .to_string(),
                ),
                AcasStatus::Contacted {
                    certificate_date: None,
                } => warnings.push(
                    "The limitation clock pauses during ACAS early conciliation; \
                     your exact deadline depends on the certificate date."
                        .to_string(),
                ),
                AcasStatus::Contacted { .. } => {}
            }
        }
        (CaseKind::Benefits(_), _) => {
            if outcome.stage.is_estimated() {
                warnings.push(
                    "This deadline is an estimate. Check the date on your mandatory \
                     reconsideration notice for the exact appeal deadline."
                        .to_string(),
                );
            }
        }
        (CaseKind::Housing(HousingNotice::Section21), StageInput::Housing { tenancy }) => {
            if let Some(tenancy) = tenancy {
                if *tenancy != TenancyType::AssuredShorthold {
                    warnings.push(format!(
                        "A Section 21 notice is only valid for assured shorthold \
                         tenancies; a {tenancy} tenancy may make it ineffective."
                    ));
                }
            }
        }
        (CaseKind::Court(CourtDeadline::JudicialReview), _) => {
            warnings.push(
                "Judicial review claims must be filed promptly; the three-month \
                 limit is an outer bound, not a target."
                    .to_string(),
            );
        }
        _ => {}
    }

    warnings
}

fn next_steps(kind: CaseKind, outcome: &StageOutcome, input: &StageInput) -> Vec<String> {
    let steps: &[&str] = match (kind, outcome.stage) {
        (CaseKind::Employment(_), _) => {
            let acas_done = matches!(
                input,
                StageInput::Employment {
                    acas: AcasStatus::Contacted { .. }
                }
            );
            if acas_done {
                &[
                    "Complete ACAS early conciliation and keep your certificate",
                    "Gather your contract, payslips, and any dismissal or grievance correspondence",
                    "Submit the ET1 claim form before the deadline",
                ]
            } else {
                &[
                    "Notify ACAS to begin early conciliation",
                    "Gather your contract, payslips, and any dismissal or grievance correspondence",
                    "Submit the ET1 claim form before the deadline",
                ]
            }
        }
        (CaseKind::Benefits(_), ResolvedStage::MandatoryReconsideration) => &[
            "Ask the decision maker for a mandatory reconsideration in writing",
            "Explain why the decision is wrong and include supporting evidence",
            "Keep copies of everything you send and note the date you sent it",
        ],
        (CaseKind::Benefits(_), _) => &[
            "Complete form SSCS1 to appeal to the First-tier Tribunal",
            "Attach a copy of the mandatory reconsideration notice",
            "Send the appeal before the deadline and keep proof of postage",
        ],
        (CaseKind::Housing(HousingNotice::RentIncrease), _) => &[
            "Check how the proposed rent compares with similar local lettings",
            "Refer the notice to the First-tier Tribunal before the new rent starts",
            "Keep paying your current rent while the referral is decided",
        ],
        (CaseKind::Housing(HousingNotice::HomelessnessReview), _) => &[
            "Request the review in writing before the deadline",
            "Set out why the decision is wrong and include any new evidence",
            "Ask about accommodation pending review if you have nowhere to stay",
        ],
        (CaseKind::Housing(_), _) => &[
            "Check the notice for defects; an invalid notice can be challenged",
            "Speak to a housing adviser before the notice period ends",
            "Do not leave the property before taking advice",
        ],
        (CaseKind::Court(_), ResolvedStage::ResponseDue) => &[
            "Diarise the response due date",
            "If no response arrives, send a written chase citing the statutory time limit",
            "Complain to the Information Commissioner if the deadline passes unanswered",
        ],
        (CaseKind::Court(_), _) => &[
            "Gather the documents that support your case",
            "Take advice on the merits before committing to filing",
            "File before the deadline and keep proof of submission",
        ],
    };
    steps.iter().map(|s| s.to_string()).collect()
}
