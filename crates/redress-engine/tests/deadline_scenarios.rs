//! # End-to-End Deadline Scenarios
//!
//! Drives the public calculator API through the statutory scenarios the
//! engine exists for: the two-step benefits procedure, the ACAS extension,
//! the six-month employment overrides, business-day periods, urgency
//! tiers, and the determinism contract. Each scenario pins "today" with a
//! fixed clock so the expected dates are exact.

use redress_core::{BenefitType, CalendarDate, CourtDeadline, EmploymentClaim, FixedClock, HousingNotice};
use redress_engine::{
    BenefitsRequest, CourtRequest, DeadlineCalculator, DeadlineRequest, EmploymentRequest,
    HousingRequest,
};

fn calculator_at(today: &str) -> DeadlineCalculator {
    DeadlineCalculator::new(Box::new(FixedClock::new(
        CalendarDate::parse(today).unwrap(),
    )))
}

fn benefits_request(
    decision: &str,
    has_mr: bool,
    mr_date: Option<&str>,
) -> BenefitsRequest {
    BenefitsRequest {
        decision_date: decision.to_string(),
        benefit: BenefitType::UniversalCredit,
        has_mandatory_reconsideration: has_mr,
        mandatory_reconsideration_date: mr_date.map(str::to_string),
    }
}

fn employment_request(
    event: &str,
    claim: EmploymentClaim,
    acas: bool,
    certificate: Option<&str>,
) -> EmploymentRequest {
    EmploymentRequest {
        event_date: event.to_string(),
        claim,
        has_contacted_acas: acas,
        acas_certificate_date: certificate.map(str::to_string),
    }
}

// ───────────────────────────────────────────────────────────────────────
// Benefits: the two-step procedure
// ───────────────────────────────────────────────────────────────────────

#[test]
fn benefits_without_reconsideration_get_the_reconsideration_deadline() {
    let result = calculator_at("2024-01-05")
        .benefits(benefits_request("2024-01-01", false, None))
        .unwrap();

    assert_eq!(result.deadline_type, "Mandatory Reconsideration");
    assert_eq!(result.calculated_deadline, "31 January 2024");
    assert!(result.next_steps[0].contains("mandatory reconsideration"));
}

#[test]
fn benefits_with_reconsideration_decision_get_the_appeal_deadline() {
    let result = calculator_at("2024-02-10")
        .benefits(benefits_request("2024-01-01", true, Some("2024-02-01")))
        .unwrap();

    assert_eq!(result.deadline_type, "Tribunal Appeal");
    assert_eq!(result.calculated_deadline, "2 March 2024");
    assert!(result.next_steps[0].contains("SSCS1"));
}

#[test]
fn benefits_with_unknown_reconsideration_date_get_a_flagged_estimate() {
    let result = calculator_at("2024-01-05")
        .benefits(benefits_request("2024-01-01", true, None))
        .unwrap();

    assert_eq!(result.deadline_type, "Tribunal Appeal (estimated)");
    // Decision date plus the conservative sixty-day estimate.
    assert_eq!(result.calculated_deadline, "1 March 2024");
    assert!(result.warnings.iter().any(|w| w.contains("estimate")));
}

// ───────────────────────────────────────────────────────────────────────
// Employment: periods and the ACAS extension
// ───────────────────────────────────────────────────────────────────────

#[test]
fn dismissal_gets_three_months_minus_one_day() {
    let result = calculator_at("2024-01-10")
        .employment(employment_request(
            "2024-01-01",
            EmploymentClaim::Dismissal,
            false,
            None,
        ))
        .unwrap();

    assert_eq!(result.calculated_deadline, "31 March 2024");
    assert!(result.applied_extension.is_none());
}

#[test]
fn redundancy_payment_gets_six_months_unaffected_by_acas() {
    let result = calculator_at("2024-01-10")
        .employment(employment_request(
            "2024-01-01",
            EmploymentClaim::RedundancyPayment,
            true,
            Some("2024-08-01"),
        ))
        .unwrap();

    assert_eq!(result.calculated_deadline, "1 July 2024");
    assert!(result.applied_extension.is_none());
}

#[test]
fn late_acas_certificate_extends_the_dismissal_deadline() {
    let result = calculator_at("2024-04-20")
        .employment(employment_request(
            "2024-01-01",
            EmploymentClaim::Dismissal,
            true,
            Some("2024-04-15"),
        ))
        .unwrap();

    // Certificate issued after the unextended 31 March deadline: the
    // claimant gets a month from issue.
    assert_eq!(result.calculated_deadline, "15 May 2024");
    assert_eq!(
        result.applied_extension.as_deref(),
        Some("acas_early_conciliation")
    );
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("early conciliation extension")));
}

#[test]
fn early_acas_certificate_leaves_the_deadline_alone() {
    let result = calculator_at("2024-02-20")
        .employment(employment_request(
            "2024-01-01",
            EmploymentClaim::Dismissal,
            true,
            Some("2024-02-15"),
        ))
        .unwrap();

    assert_eq!(result.calculated_deadline, "31 March 2024");
    assert!(result.applied_extension.is_none());
}

// ───────────────────────────────────────────────────────────────────────
// Business-day periods through the catalog
// ───────────────────────────────────────────────────────────────────────

#[test]
fn foi_response_due_twenty_business_days_out() {
    // Monday 1 January 2024 + 20 business days = Monday 29 January 2024.
    let result = calculator_at("2024-01-02")
        .court(CourtRequest {
            relevant_date: "2024-01-01".to_string(),
            deadline: CourtDeadline::FoiResponse,
        })
        .unwrap();

    assert_eq!(result.deadline_type, "Response Due");
    assert_eq!(result.calculated_deadline, "29 January 2024");
}

// ───────────────────────────────────────────────────────────────────────
// Urgency and passed deadlines
// ───────────────────────────────────────────────────────────────────────

#[test]
fn passed_deadline_is_urgent_and_warned_first() {
    let result = calculator_at("2024-06-01")
        .employment(employment_request(
            "2024-01-01",
            EmploymentClaim::Dismissal,
            false,
            None,
        ))
        .unwrap();

    assert!(result.days_remaining < 0);
    assert!(result.is_urgent);
    assert!(result.warnings[0].contains("may have passed"));
}

#[test]
fn deadline_today_counts_as_passed() {
    let result = calculator_at("2024-03-31")
        .employment(employment_request(
            "2024-01-01",
            EmploymentClaim::Dismissal,
            false,
            None,
        ))
        .unwrap();

    assert_eq!(result.days_remaining, 0);
    assert!(result.is_urgent);
    assert!(result.warnings[0].contains("may have passed"));
}

#[test]
fn housing_urgency_uses_the_tighter_threshold() {
    let request = HousingRequest {
        notice_date: "2024-01-01".to_string(),
        notice: HousingNotice::HomelessnessReview,
        tenancy: None,
    };
    // 21-day window ends 22 January; eight days out is not urgent for
    // housing, seven is.
    let relaxed = calculator_at("2024-01-14").housing(request.clone()).unwrap();
    assert_eq!(relaxed.days_remaining, 8);
    assert!(!relaxed.is_urgent);

    let urgent = calculator_at("2024-01-15").housing(request).unwrap();
    assert_eq!(urgent.days_remaining, 7);
    assert!(urgent.is_urgent);
}

// ───────────────────────────────────────────────────────────────────────
// Validation failures
// ───────────────────────────────────────────────────────────────────────

#[test]
fn unparsable_dates_are_rejected_with_the_field_name() {
    let err = calculator_at("2024-01-05")
        .benefits(benefits_request("January 1st", false, None))
        .unwrap_err();
    assert!(err.to_string().contains("decision_date"));
}

#[test]
fn dependent_date_without_flag_is_rejected() {
    let err = calculator_at("2024-01-05")
        .benefits(benefits_request("2024-01-01", false, Some("2024-02-01")))
        .unwrap_err();
    assert!(err.to_string().contains("mandatory_reconsideration_date"));
}

// ───────────────────────────────────────────────────────────────────────
// Determinism
// ───────────────────────────────────────────────────────────────────────

#[test]
fn identical_request_and_today_yield_byte_identical_results() {
    let request = DeadlineRequest::EmploymentTribunal(employment_request(
        "2024-01-01",
        EmploymentClaim::Discrimination,
        true,
        Some("2024-04-15"),
    ));

    let first = calculator_at("2024-04-20").calculate(&request).unwrap();
    let second = calculator_at("2024-04-20").calculate(&request).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn every_domain_produces_the_uniform_shape() {
    let calc = calculator_at("2024-01-05");
    let results = [
        calc.employment(employment_request(
            "2024-01-01",
            EmploymentClaim::UnpaidWages,
            false,
            None,
        ))
        .unwrap(),
        calc.benefits(benefits_request("2024-01-01", false, None)).unwrap(),
        calc.housing(HousingRequest {
            notice_date: "2024-01-01".to_string(),
            notice: HousingNotice::Section21,
            tenancy: None,
        })
        .unwrap(),
        calc.court(CourtRequest {
            relevant_date: "2024-01-01".to_string(),
            deadline: CourtDeadline::SmallClaimsResponse,
        })
        .unwrap(),
    ];

    for result in results {
        assert!(!result.deadline_type.is_empty());
        assert!(!result.calculated_deadline.is_empty());
        assert!(!result.description.is_empty());
        assert!(!result.relevant_rules.is_empty());
        assert!(!result.next_steps.is_empty());
    }
}
