//! # Requests — Boundary Types and Validation
//!
//! One request type per legal domain, each carrying its reference date and
//! domain-specific stage flags, plus the `DeadlineRequest` union the
//! calculator accepts. Dates cross this boundary as ISO-8601 `YYYY-MM-DD`
//! strings and are parsed into `CalendarDate` here; nothing downstream
//! sees raw strings.
//!
//! ## Validation Invariants
//!
//! - Every date field must parse to a valid calendar day.
//! - A dependent date supplied without its governing flag is invalid
//!   input: an ACAS certificate date requires `has_contacted_acas`, a
//!   reconsideration decision date requires `has_mandatory_reconsideration`.
//! - Stage dates cannot precede the reference date they follow from.
//!
//! The reverse gap (a flag set but its date missing) is incomplete rather
//! than contradictory, and resolves to a documented conservative path in
//! the stage resolver instead of failing here.

use serde::{Deserialize, Serialize};

use redress_core::{
    BenefitType, CalendarDate, CaseKind, CourtDeadline, DeadlineError, EmploymentClaim,
    HousingNotice, TenancyType,
};

// ─── Per-Domain Requests ─────────────────────────────────────────────

/// An employment tribunal deadline request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmploymentRequest {
    /// The event the limitation period runs from (dismissal date, last
    /// underpayment, discriminatory act), as ISO-8601 `YYYY-MM-DD`.
    pub event_date: String,
    /// The claim being considered.
    pub claim: EmploymentClaim,
    /// Whether ACAS early conciliation has been started.
    #[serde(default)]
    pub has_contacted_acas: bool,
    /// Issue date of the ACAS early conciliation certificate, if issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acas_certificate_date: Option<String>,
}

/// A benefits decision challenge deadline request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsRequest {
    /// Date on the decision letter, as ISO-8601 `YYYY-MM-DD`.
    pub decision_date: String,
    /// The benefit the decision concerns.
    pub benefit: BenefitType,
    /// Whether mandatory reconsideration has been completed.
    #[serde(default)]
    pub has_mandatory_reconsideration: bool,
    /// Date of the mandatory reconsideration decision, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory_reconsideration_date: Option<String>,
}

/// A housing notice or review deadline request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousingRequest {
    /// Date the notice was served or the decision issued, as ISO-8601.
    pub notice_date: String,
    /// The notice or decision type.
    pub notice: HousingNotice,
    /// The tenancy type, when known; tailors the guidance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<TenancyType>,
}

/// A general court or tribunal deadline request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtRequest {
    /// The date the period runs from (service, judgment, request), ISO-8601.
    pub relevant_date: String,
    /// The deadline type.
    pub deadline: CourtDeadline,
}

/// A deadline request for any domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", rename_all = "snake_case")]
pub enum DeadlineRequest {
    /// Employment tribunal claim.
    EmploymentTribunal(EmploymentRequest),
    /// Benefits decision challenge.
    BenefitsAppeal(BenefitsRequest),
    /// Housing notice or review.
    Housing(HousingRequest),
    /// Court or tribunal filing.
    CourtTribunal(CourtRequest),
}

// ─── Validated Form ──────────────────────────────────────────────────

/// ACAS early conciliation status, parsed and consistency-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcasStatus {
    /// Early conciliation has not been started.
    NotContacted,
    /// Early conciliation started; the certificate date is known once
    /// conciliation has ended.
    Contacted {
        /// Certificate issue date, if the certificate has been issued.
        certificate_date: Option<CalendarDate>,
    },
}

/// Mandatory reconsideration status, parsed and consistency-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconsiderationStatus {
    /// Mandatory reconsideration has not been completed.
    NotComplete,
    /// Reconsideration complete; the decision date may still be unknown
    /// to the user, in which case the deadline is estimated.
    Complete {
        /// Date of the reconsideration decision, if known.
        decision_date: Option<CalendarDate>,
    },
}

/// Domain-specific stage input, after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageInput {
    /// Employment: ACAS early conciliation status.
    Employment {
        /// Conciliation status.
        acas: AcasStatus,
    },
    /// Benefits: mandatory reconsideration status.
    Benefits {
        /// Reconsideration status.
        reconsideration: ReconsiderationStatus,
    },
    /// Housing: optional tenancy classification.
    Housing {
        /// Tenancy type, when reported.
        tenancy: Option<TenancyType>,
    },
    /// Court deadlines carry no stage flags.
    Court,
}

/// A request whose dates have parsed and whose stage flags are consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRequest {
    /// The fully qualified case category.
    pub kind: CaseKind,
    /// The parsed reference date the period runs from.
    pub reference_date: CalendarDate,
    /// Parsed domain-specific stage input.
    pub stage: StageInput,
}

impl DeadlineRequest {
    /// Validate this request into its typed internal form.
    ///
    /// # Errors
    ///
    /// - [`DeadlineError::InvalidDate`] when any date field fails to parse,
    ///   naming the field.
    /// - [`DeadlineError::InconsistentStageInput`] when a dependent date is
    ///   supplied without its governing flag, or a stage date precedes the
    ///   reference date it must follow.
    pub fn validate(&self) -> Result<ValidRequest, DeadlineError> {
        match self {
            Self::EmploymentTribunal(req) => req.validate(),
            Self::BenefitsAppeal(req) => req.validate(),
            Self::Housing(req) => req.validate(),
            Self::CourtTribunal(req) => req.validate(),
        }
    }
}

impl EmploymentRequest {
    fn validate(&self) -> Result<ValidRequest, DeadlineError> {
        let event_date = parse_date("event_date", &self.event_date)?;

        let acas = match (self.has_contacted_acas, self.acas_certificate_date.as_deref()) {
            (false, Some(_)) => {
                return Err(DeadlineError::InconsistentStageInput {
                    field: "acas_certificate_date".to_string(),
                    reason: "certificate date supplied but ACAS contact not reported".to_string(),
                });
            }
            (false, None) => AcasStatus::NotContacted,
            (true, None) => AcasStatus::Contacted {
                certificate_date: None,
            },
            (true, Some(raw)) => {
                let certificate_date = parse_date("acas_certificate_date", raw)?;
                if certificate_date < event_date {
                    return Err(DeadlineError::InconsistentStageInput {
                        field: "acas_certificate_date".to_string(),
                        reason: "certificate date precedes the event date".to_string(),
                    });
                }
                AcasStatus::Contacted {
                    certificate_date: Some(certificate_date),
                }
            }
        };

        Ok(ValidRequest {
            kind: CaseKind::Employment(self.claim),
            reference_date: event_date,
            stage: StageInput::Employment { acas },
        })
    }
}

impl BenefitsRequest {
    fn validate(&self) -> Result<ValidRequest, DeadlineError> {
        let decision_date = parse_date("decision_date", &self.decision_date)?;

        let reconsideration = match (
            self.has_mandatory_reconsideration,
            self.mandatory_reconsideration_date.as_deref(),
        ) {
            (false, Some(_)) => {
                return Err(DeadlineError::InconsistentStageInput {
                    field: "mandatory_reconsideration_date".to_string(),
                    reason: "reconsideration date supplied but reconsideration not reported complete"
                        .to_string(),
                });
            }
            (false, None) => ReconsiderationStatus::NotComplete,
            (true, None) => ReconsiderationStatus::Complete {
                decision_date: None,
            },
            (true, Some(raw)) => {
                let mr_date = parse_date("mandatory_reconsideration_date", raw)?;
                if mr_date < decision_date {
                    return Err(DeadlineError::InconsistentStageInput {
                        field: "mandatory_reconsideration_date".to_string(),
                        reason: "reconsideration decision precedes the original decision"
                            .to_string(),
                    });
                }
                ReconsiderationStatus::Complete {
                    decision_date: Some(mr_date),
                }
            }
        };

        Ok(ValidRequest {
            kind: CaseKind::Benefits(self.benefit),
            reference_date: decision_date,
            stage: StageInput::Benefits { reconsideration },
        })
    }
}

impl HousingRequest {
    fn validate(&self) -> Result<ValidRequest, DeadlineError> {
        Ok(ValidRequest {
            kind: CaseKind::Housing(self.notice),
            reference_date: parse_date("notice_date", &self.notice_date)?,
            stage: StageInput::Housing {
                tenancy: self.tenancy,
            },
        })
    }
}

impl CourtRequest {
    fn validate(&self) -> Result<ValidRequest, DeadlineError> {
        Ok(ValidRequest {
            kind: CaseKind::Court(self.deadline),
            reference_date: parse_date("relevant_date", &self.relevant_date)?,
            stage: StageInput::Court,
        })
    }
}

/// Parse a boundary date string, attributing failures to `field`.
fn parse_date(field: &str, raw: &str) -> Result<CalendarDate, DeadlineError> {
    CalendarDate::parse(raw).map_err(|_| DeadlineError::InvalidDate {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employment(event: &str, acas: bool, cert: Option<&str>) -> EmploymentRequest {
        EmploymentRequest {
            event_date: event.to_string(),
            claim: EmploymentClaim::Dismissal,
            has_contacted_acas: acas,
            acas_certificate_date: cert.map(str::to_string),
        }
    }

    fn benefits(decision: &str, mr: bool, mr_date: Option<&str>) -> BenefitsRequest {
        BenefitsRequest {
            decision_date: decision.to_string(),
            benefit: BenefitType::UniversalCredit,
            has_mandatory_reconsideration: mr,
            mandatory_reconsideration_date: mr_date.map(str::to_string),
        }
    }

    // ── date parsing ─────────────────────────────────────────────────

    #[test]
    fn test_valid_employment_request() {
        let valid = employment("2024-01-01", false, None).validate().unwrap();
        assert_eq!(valid.kind, CaseKind::Employment(EmploymentClaim::Dismissal));
        assert_eq!(valid.reference_date, CalendarDate::parse("2024-01-01").unwrap());
        assert_eq!(
            valid.stage,
            StageInput::Employment {
                acas: AcasStatus::NotContacted
            }
        );
    }

    #[test]
    fn test_unparsable_reference_date_names_field() {
        let err = employment("01/02/2024", false, None).validate().unwrap_err();
        match err {
            DeadlineError::InvalidDate { field, value } => {
                assert_eq!(field, "event_date");
                assert_eq!(value, "01/02/2024");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_stage_date_names_field() {
        let err = employment("2024-01-01", true, Some("soon")).validate().unwrap_err();
        match err {
            DeadlineError::InvalidDate { field, .. } => {
                assert_eq!(field, "acas_certificate_date");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    // ── flag/date consistency ────────────────────────────────────────

    #[test]
    fn test_certificate_without_contact_flag_is_inconsistent() {
        let err = employment("2024-01-01", false, Some("2024-03-01"))
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            DeadlineError::InconsistentStageInput { ref field, .. } if field == "acas_certificate_date"
        ));
    }

    #[test]
    fn test_certificate_before_event_is_inconsistent() {
        let err = employment("2024-01-01", true, Some("2023-12-01"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, DeadlineError::InconsistentStageInput { .. }));
    }

    #[test]
    fn test_contact_without_certificate_is_valid() {
        let valid = employment("2024-01-01", true, None).validate().unwrap();
        assert_eq!(
            valid.stage,
            StageInput::Employment {
                acas: AcasStatus::Contacted {
                    certificate_date: None
                }
            }
        );
    }

    #[test]
    fn test_mr_date_without_flag_is_inconsistent() {
        let err = benefits("2024-01-01", false, Some("2024-02-01"))
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            DeadlineError::InconsistentStageInput { ref field, .. }
                if field == "mandatory_reconsideration_date"
        ));
    }

    #[test]
    fn test_mr_before_decision_is_inconsistent() {
        let err = benefits("2024-02-01", true, Some("2024-01-01"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, DeadlineError::InconsistentStageInput { .. }));
    }

    #[test]
    fn test_mr_complete_without_date_is_valid() {
        // Incomplete, not contradictory: resolves to the estimated path.
        let valid = benefits("2024-01-01", true, None).validate().unwrap();
        assert_eq!(
            valid.stage,
            StageInput::Benefits {
                reconsideration: ReconsiderationStatus::Complete {
                    decision_date: None
                }
            }
        );
    }

    // ── serde boundary ───────────────────────────────────────────────

    #[test]
    fn test_request_union_deserializes_by_domain_tag() {
        let json = r#"{
            "domain": "benefits_appeal",
            "decision_date": "2024-01-01",
            "benefit": "pip",
            "has_mandatory_reconsideration": false
        }"#;
        let request: DeadlineRequest = serde_json::from_str(json).unwrap();
        let valid = request.validate().unwrap();
        assert_eq!(valid.kind, CaseKind::Benefits(BenefitType::Pip));
    }

    #[test]
    fn test_housing_request_round_trips() {
        let request = DeadlineRequest::Housing(HousingRequest {
            notice_date: "2024-04-01".to_string(),
            notice: HousingNotice::Section21,
            tenancy: Some(TenancyType::AssuredShorthold),
        });
        let json = serde_json::to_string(&request).unwrap();
        let back: DeadlineRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.validate().unwrap(), request.validate().unwrap());
    }
}
