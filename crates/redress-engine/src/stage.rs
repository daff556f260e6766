//! # Stage Resolver — Which Deadline Actually Applies
//!
//! For most domains the deadline is simply the reference date plus the
//! catalog period. Two domains need more:
//!
//! - **Benefits appeals** are a two-step procedure. Until mandatory
//!   reconsideration is complete the operative deadline is the
//!   reconsideration request window; once complete, the tribunal appeal
//!   window runs from the reconsideration decision instead.
//! - **Employment claims** can be extended by ACAS early conciliation when
//!   the certificate is issued after the unextended deadline.
//!
//! ## Estimation Policy
//!
//! When reconsideration is complete but its decision date is unknown, the
//! resolver estimates the appeal deadline from the original decision date
//! rather than failing. The estimate must never understate urgency, so it
//! is deliberately the tightest plausible window, and the outcome is
//! labelled as estimated so the guidance can say to confirm the real date.

use redress_core::{CalendarDate, CaseKind, CourtDeadline, HousingNotice};
use redress_rules::RuleEntry;

use crate::request::{AcasStatus, ReconsiderationStatus, StageInput};

/// Estimated appeal window from the original decision when the
/// reconsideration decision date is unknown: the reconsideration window
/// plus one appeal window, measured from the original decision.
///
/// Inherited business rule, pending domain-owner confirmation. Kept as a
/// conservative over-estimate of elapsed procedure time so urgency is
/// never understated.
const ESTIMATED_APPEAL_WINDOW_DAYS: i64 = 60;

/// Statutory minimum extension after an ACAS early conciliation
/// certificate: the claimant always has at least a month from issue.
const ACAS_MINIMUM_EXTENSION_DAYS: i64 = 30;

/// The procedural stage a resolved deadline belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedStage {
    /// Benefits: mandatory reconsideration must be requested.
    MandatoryReconsideration,
    /// Benefits: appeal window running from the reconsideration decision.
    TribunalAppeal,
    /// Benefits: appeal window estimated from the original decision.
    TribunalAppealEstimated,
    /// Employment: tribunal claim submission.
    TribunalClaim,
    /// Housing: a served notice runs out.
    NoticeExpiry,
    /// Housing: window to request a review or referral.
    ReviewRequest,
    /// Court: a filing falls due.
    FilingDeadline,
    /// Court: a statutory response from another party falls due.
    ResponseDue,
}

impl ResolvedStage {
    /// Human-readable stage label, reported as the result's deadline type.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MandatoryReconsideration => "Mandatory Reconsideration",
            Self::TribunalAppeal => "Tribunal Appeal",
            Self::TribunalAppealEstimated => "Tribunal Appeal (estimated)",
            Self::TribunalClaim => "Tribunal Claim",
            Self::NoticeExpiry => "Notice Expiry",
            Self::ReviewRequest => "Review Request",
            Self::FilingDeadline => "Filing Deadline",
            Self::ResponseDue => "Response Due",
        }
    }

    /// Whether this deadline is an estimate rather than an exact date.
    pub fn is_estimated(&self) -> bool {
        matches!(self, Self::TribunalAppealEstimated)
    }
}

/// An extension applied on top of the base catalog period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedExtension {
    /// ACAS early conciliation pushed the deadline past its base date.
    AcasEarlyConciliation {
        /// The certificate issue date the extension runs from.
        certificate_date: CalendarDate,
    },
}

impl AppliedExtension {
    /// Stable identifier reported in the result.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AcasEarlyConciliation { .. } => "acas_early_conciliation",
        }
    }
}

/// The resolved stage and the deadline that applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageOutcome {
    /// The date the operative deadline falls on.
    pub effective_deadline: CalendarDate,
    /// The stage the deadline belongs to.
    pub stage: ResolvedStage,
    /// Extension applied beyond the base period, if any.
    pub applied_extension: Option<AppliedExtension>,
}

/// Resolve which stage applies and the effective deadline date.
///
/// Pure: depends only on the arguments. The catalog entry supplies the
/// base period; stage input selects between procedure steps.
pub fn resolve(
    kind: CaseKind,
    entry: &RuleEntry,
    reference_date: CalendarDate,
    stage: &StageInput,
) -> StageOutcome {
    match (kind, stage) {
        (CaseKind::Benefits(_), StageInput::Benefits { reconsideration }) => {
            resolve_benefits(entry, reference_date, *reconsideration)
        }
        (CaseKind::Employment(_), StageInput::Employment { acas }) => {
            resolve_employment(entry, reference_date, *acas)
        }
        (CaseKind::Housing(notice), _) => StageOutcome {
            effective_deadline: entry.period.applied_to(reference_date),
            stage: housing_stage(notice),
            applied_extension: None,
        },
        (CaseKind::Court(deadline), _) => StageOutcome {
            effective_deadline: entry.period.applied_to(reference_date),
            stage: court_stage(deadline),
            applied_extension: None,
        },
        // Mismatched stage input for the domain; fall back to the base
        // period. Unreachable through validated requests.
        (_, _) => StageOutcome {
            effective_deadline: entry.period.applied_to(reference_date),
            stage: ResolvedStage::FilingDeadline,
            applied_extension: None,
        },
    }
}

fn resolve_benefits(
    entry: &RuleEntry,
    decision_date: CalendarDate,
    reconsideration: ReconsiderationStatus,
) -> StageOutcome {
    // Both procedure steps use the same statutory window, so the catalog
    // period applies to whichever date the current stage runs from.
    match reconsideration {
        ReconsiderationStatus::NotComplete => StageOutcome {
            effective_deadline: entry.period.applied_to(decision_date),
            stage: ResolvedStage::MandatoryReconsideration,
            applied_extension: None,
        },
        ReconsiderationStatus::Complete {
            decision_date: Some(mr_decision),
        } => StageOutcome {
            effective_deadline: entry.period.applied_to(mr_decision),
            stage: ResolvedStage::TribunalAppeal,
            applied_extension: None,
        },
        ReconsiderationStatus::Complete {
            decision_date: None,
        } => {
            tracing::debug!(
                decision_date = %decision_date,
                "reconsideration decision date unknown, estimating appeal window"
            );
            StageOutcome {
                effective_deadline: decision_date.add_calendar_days(ESTIMATED_APPEAL_WINDOW_DAYS),
                stage: ResolvedStage::TribunalAppealEstimated,
                applied_extension: None,
            }
        }
    }
}

fn resolve_employment(
    entry: &RuleEntry,
    event_date: CalendarDate,
    acas: AcasStatus,
) -> StageOutcome {
    let base_deadline = entry.period.applied_to(event_date);

    if entry.acas_extension_applies {
        if let AcasStatus::Contacted {
            certificate_date: Some(certificate_date),
        } = acas
        {
            // The extension only operates when conciliation consumed the
            // base period: a certificate issued on or before the base
            // deadline leaves it unchanged.
            if certificate_date > base_deadline {
                let extended = certificate_date.add_calendar_days(ACAS_MINIMUM_EXTENSION_DAYS);
                tracing::debug!(
                    base = %base_deadline,
                    certificate = %certificate_date,
                    extended = %extended,
                    "ACAS early conciliation extension applied"
                );
                return StageOutcome {
                    effective_deadline: extended,
                    stage: ResolvedStage::TribunalClaim,
                    applied_extension: Some(AppliedExtension::AcasEarlyConciliation {
                        certificate_date,
                    }),
                };
            }
        }
    }

    StageOutcome {
        effective_deadline: base_deadline,
        stage: ResolvedStage::TribunalClaim,
        applied_extension: None,
    }
}

fn housing_stage(notice: HousingNotice) -> ResolvedStage {
    match notice {
        HousingNotice::Section21 | HousingNotice::Section8 => ResolvedStage::NoticeExpiry,
        HousingNotice::RentIncrease | HousingNotice::HomelessnessReview => {
            ResolvedStage::ReviewRequest
        }
    }
}

fn court_stage(deadline: CourtDeadline) -> ResolvedStage {
    match deadline {
        CourtDeadline::SmallClaimsResponse
        | CourtDeadline::AppealCountyCourt
        | CourtDeadline::JudicialReview
        | CourtDeadline::PersonalInjuryClaim
        | CourtDeadline::EmploymentAppeal => ResolvedStage::FilingDeadline,
        CourtDeadline::FoiResponse | CourtDeadline::SubjectAccessRequest => {
            ResolvedStage::ResponseDue
        }
    }
}
