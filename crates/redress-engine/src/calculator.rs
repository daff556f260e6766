//! # Deadline Calculator — The Orchestrator
//!
//! Validates the request, then drives the pipeline: rule lookup, stage
//! resolution, remaining-days arithmetic, urgency classification, and
//! guidance composition, assembling the uniform result.
//!
//! The calculator owns nothing mutable. The rule catalog it reads is
//! process-wide and immutable; the clock is injected and consulted exactly
//! once per request. Instances are freely shareable across threads.

use redress_core::{Clock, DeadlineError, SystemClock};
use redress_rules::RuleCatalog;

use crate::guidance;
use crate::request::{
    BenefitsRequest, CourtRequest, DeadlineRequest, EmploymentRequest, HousingRequest,
};
use crate::result::DeadlineResult;
use crate::stage;
use crate::urgency;

/// Computes deadlines against the rule catalog and an injected clock.
pub struct DeadlineCalculator {
    catalog: &'static RuleCatalog,
    clock: Box<dyn Clock>,
}

impl DeadlineCalculator {
    /// A calculator over the builtin rule table and the given clock.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            catalog: RuleCatalog::builtin(),
            clock,
        }
    }

    /// Compute the deadline for any domain.
    ///
    /// Deterministic given the request and the clock's today: identical
    /// input yields an identical result.
    ///
    /// # Errors
    ///
    /// Propagates the validation taxonomy: [`DeadlineError::InvalidDate`],
    /// [`DeadlineError::InconsistentStageInput`], and the defensive
    /// [`DeadlineError::UnknownCaseSubtype`].
    pub fn calculate(&self, request: &DeadlineRequest) -> Result<DeadlineResult, DeadlineError> {
        let valid = request.validate()?;
        let entry = self.catalog.lookup(valid.kind)?;

        // Today is read once; everything downstream uses this value so the
        // remaining days and the urgency tier cannot disagree.
        let today = self.clock.today();

        let outcome = stage::resolve(valid.kind, entry, valid.reference_date, &valid.stage);
        let days_remaining = outcome.effective_deadline.days_until(today);
        let tier = urgency::classify(days_remaining, entry.urgent_threshold_days);
        let guidance = guidance::compose(valid.kind, &outcome, &valid.stage, tier, days_remaining);

        tracing::debug!(
            kind = %valid.kind,
            stage = outcome.stage.label(),
            period = %entry.period,
            deadline = %outcome.effective_deadline,
            days_remaining,
            tier = ?tier,
            "deadline resolved"
        );

        Ok(DeadlineResult {
            deadline_type: outcome.stage.label().to_string(),
            calculated_deadline: outcome.effective_deadline.format_long(),
            days_remaining,
            is_urgent: tier.is_urgent(),
            description: entry.description.to_string(),
            warnings: guidance.warnings,
            next_steps: guidance.next_steps,
            relevant_rules: entry.citation.to_string(),
            applied_extension: outcome.applied_extension.map(|e| e.as_str().to_string()),
        })
    }

    /// Employment tribunal entry point.
    pub fn employment(&self, request: EmploymentRequest) -> Result<DeadlineResult, DeadlineError> {
        self.calculate(&DeadlineRequest::EmploymentTribunal(request))
    }

    /// Benefits appeal entry point.
    pub fn benefits(&self, request: BenefitsRequest) -> Result<DeadlineResult, DeadlineError> {
        self.calculate(&DeadlineRequest::BenefitsAppeal(request))
    }

    /// Housing entry point.
    pub fn housing(&self, request: HousingRequest) -> Result<DeadlineResult, DeadlineError> {
        self.calculate(&DeadlineRequest::Housing(request))
    }

    /// Court and tribunal entry point.
    pub fn court(&self, request: CourtRequest) -> Result<DeadlineResult, DeadlineError> {
        self.calculate(&DeadlineRequest::CourtTribunal(request))
    }
}

impl Default for DeadlineCalculator {
    fn default() -> Self {
        Self::new(Box::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redress_core::{BenefitType, CalendarDate, EmploymentClaim, FixedClock, HousingNotice};

    fn calculator_at(today: &str) -> DeadlineCalculator {
        DeadlineCalculator::new(Box::new(FixedClock::new(
            CalendarDate::parse(today).unwrap(),
        )))
    }

    fn dismissal_request(event: &str) -> EmploymentRequest {
        EmploymentRequest {
            event_date: event.to_string(),
            claim: EmploymentClaim::Dismissal,
            has_contacted_acas: false,
            acas_certificate_date: None,
        }
    }

    #[test]
    fn test_pipeline_assembles_uniform_result() {
        let result = calculator_at("2024-01-10")
            .employment(dismissal_request("2024-01-01"))
            .unwrap();
        assert_eq!(result.deadline_type, "Tribunal Claim");
        assert_eq!(result.calculated_deadline, "31 March 2024");
        assert_eq!(result.days_remaining, 81);
        assert!(!result.is_urgent);
        assert_eq!(result.relevant_rules, "Employment Rights Act 1996, s.111(2)");
        assert!(!result.description.is_empty());
        assert!(!result.next_steps.is_empty());
    }

    #[test]
    fn test_days_remaining_and_urgency_use_the_same_today() {
        // 2024-03-20 is 11 days before the 2024-03-31 deadline, inside the
        // 14-day employment threshold.
        let result = calculator_at("2024-03-20")
            .employment(dismissal_request("2024-01-01"))
            .unwrap();
        assert_eq!(result.days_remaining, 11);
        assert!(result.is_urgent);
        assert!(result.warnings[0].contains("Only 11 days"));
    }

    #[test]
    fn test_validation_failure_stops_the_pipeline() {
        let err = calculator_at("2024-01-10")
            .employment(dismissal_request("yesterday"))
            .unwrap_err();
        assert!(matches!(err, DeadlineError::InvalidDate { ref field, .. } if field == "event_date"));
    }

    #[test]
    fn test_housing_threshold_drives_urgency() {
        let calc = calculator_at("2024-01-10");
        // Section 8: 14 days from 2024-01-01 = 2024-01-15, five days out.
        let result = calc
            .housing(crate::request::HousingRequest {
                notice_date: "2024-01-01".to_string(),
                notice: HousingNotice::Section8,
                tenancy: None,
            })
            .unwrap();
        assert_eq!(result.days_remaining, 5);
        assert!(result.is_urgent);

        // Nine days out is outside the housing threshold of seven.
        let result = calculator_at("2024-01-06")
            .housing(crate::request::HousingRequest {
                notice_date: "2024-01-01".to_string(),
                notice: HousingNotice::Section8,
                tenancy: None,
            })
            .unwrap();
        assert_eq!(result.days_remaining, 9);
        assert!(!result.is_urgent);
    }

    #[test]
    fn test_benefits_entry_point_reports_reconsideration_stage() {
        let result = calculator_at("2024-01-05")
            .benefits(crate::request::BenefitsRequest {
                decision_date: "2024-01-01".to_string(),
                benefit: BenefitType::UniversalCredit,
                has_mandatory_reconsideration: false,
                mandatory_reconsideration_date: None,
            })
            .unwrap();
        assert_eq!(result.deadline_type, "Mandatory Reconsideration");
        assert_eq!(result.calculated_deadline, "31 January 2024");
        assert_eq!(result.days_remaining, 26);
    }
}
