//! # Rule Catalog — Closed Deadline Rule Table
//!
//! One entry per case kind: the statutory period, the urgency threshold,
//! the user-facing description, and the citation reported with every
//! result. Built once per process, read-only thereafter, O(1) lookup.
//!
//! ## Invariant
//!
//! Every variant of every subtype enum has exactly one entry. The
//! completeness test below walks [`CaseKind::all()`] so that adding a
//! subtype without a rule fails the build's test run, not a user request.

use std::collections::HashMap;
use std::sync::OnceLock;

use redress_core::{
    BenefitType, CaseKind, CourtDeadline, DeadlineError, EmploymentClaim, HousingNotice,
};

use crate::period::RulePeriod;

/// Days-remaining threshold at or below which a deadline is urgent,
/// unless the entry declares its own.
pub const DEFAULT_URGENT_THRESHOLD_DAYS: i64 = 14;

/// Housing notices use a tighter urgency threshold: the periods involved
/// are short and possession proceedings move quickly once started.
const HOUSING_URGENT_THRESHOLD_DAYS: i64 = 7;

/// The standard employment limitation period, three months minus one day.
const THREE_MONTHS_MINUS_ONE_DAY: RulePeriod = RulePeriod::CalendarMonths {
    months: 3,
    minus_days: 1,
};

/// A deadline rule for one case kind.
///
/// Per-subtype differences live here as data: the period shape, the
/// urgency threshold, and whether the ACAS early conciliation extension
/// can apply. Calculators read these fields instead of branching on the
/// subtype.
#[derive(Debug, Clone)]
pub struct RuleEntry {
    /// The case kind this rule applies to.
    pub kind: CaseKind,
    /// The statutory period measured from the reference date.
    pub period: RulePeriod,
    /// Days remaining at or below which the case is urgent.
    pub urgent_threshold_days: i64,
    /// Whether ACAS early conciliation can extend this deadline.
    /// Always false outside the employment domain.
    pub acas_extension_applies: bool,
    /// One-sentence description of what the deadline is.
    pub description: &'static str,
    /// The statutory provision the period comes from.
    pub citation: &'static str,
}

/// The closed rule table, keyed by case kind.
#[derive(Debug)]
pub struct RuleCatalog {
    entries: HashMap<CaseKind, RuleEntry>,
}

impl RuleCatalog {
    /// The process-wide catalog, built on first use and immutable after.
    pub fn builtin() -> &'static RuleCatalog {
        static CATALOG: OnceLock<RuleCatalog> = OnceLock::new();
        CATALOG.get_or_init(RuleCatalog::build)
    }

    /// Look up the rule for a case kind.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError::UnknownCaseSubtype`] if no entry exists.
    /// Defensive: the builtin table covers every enum variant, so callers
    /// arriving through the taxonomy cannot hit this.
    pub fn lookup(&self, kind: CaseKind) -> Result<&RuleEntry, DeadlineError> {
        self.entries
            .get(&kind)
            .ok_or_else(|| DeadlineError::UnknownCaseSubtype {
                domain: kind.domain().to_string(),
                subtype: kind.subtype_str().to_string(),
            })
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn build() -> RuleCatalog {
        let mut entries = HashMap::new();
        for entry in Self::employment_rules()
            .into_iter()
            .chain(Self::benefits_rules())
            .chain(Self::housing_rules())
            .chain(Self::court_rules())
        {
            entries.insert(entry.kind, entry);
        }
        RuleCatalog { entries }
    }

    fn employment_rules() -> Vec<RuleEntry> {
        vec![
            RuleEntry {
                kind: CaseKind::Employment(EmploymentClaim::Dismissal),
                period: THREE_MONTHS_MINUS_ONE_DAY,
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: true,
                description: "Deadline to bring an unfair dismissal claim to an employment tribunal.",
                citation: "Employment Rights Act 1996, s.111(2)",
            },
            RuleEntry {
                kind: CaseKind::Employment(EmploymentClaim::Discrimination),
                period: THREE_MONTHS_MINUS_ONE_DAY,
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: true,
                description: "Deadline to bring a discrimination claim to an employment tribunal.",
                citation: "Equality Act 2010, s.123(1)",
            },
            RuleEntry {
                kind: CaseKind::Employment(EmploymentClaim::UnpaidWages),
                period: THREE_MONTHS_MINUS_ONE_DAY,
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: true,
                description: "Deadline to bring a claim for unpaid wages or unlawful deductions.",
                citation: "Employment Rights Act 1996, s.23(2)",
            },
            RuleEntry {
                kind: CaseKind::Employment(EmploymentClaim::RedundancyPayment),
                period: RulePeriod::CalendarMonths {
                    months: 6,
                    minus_days: 0,
                },
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Deadline to claim a statutory redundancy payment.",
                citation: "Employment Rights Act 1996, s.164(1)",
            },
            RuleEntry {
                kind: CaseKind::Employment(EmploymentClaim::EqualPay),
                period: RulePeriod::CalendarMonths {
                    months: 6,
                    minus_days: 0,
                },
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Deadline to bring an equal pay claim to an employment tribunal.",
                citation: "Equality Act 2010, s.129(3)",
            },
            RuleEntry {
                kind: CaseKind::Employment(EmploymentClaim::Whistleblowing),
                period: THREE_MONTHS_MINUS_ONE_DAY,
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: true,
                description: "Deadline to bring a whistleblowing detriment or dismissal claim.",
                citation: "Employment Rights Act 1996, s.48(3)",
            },
        ]
    }

    fn benefits_rules() -> Vec<RuleEntry> {
        const CITATION: &str =
            "Social Security Act 1998, s.12; Tribunal Procedure (First-tier Tribunal) (SEC) Rules 2008, r.22";
        let descriptions: &[(BenefitType, &'static str)] = &[
            (
                BenefitType::UniversalCredit,
                "Deadline to challenge a Universal Credit decision.",
            ),
            (
                BenefitType::Pip,
                "Deadline to challenge a Personal Independence Payment decision.",
            ),
            (
                BenefitType::Esa,
                "Deadline to challenge an Employment and Support Allowance decision.",
            ),
            (
                BenefitType::Jsa,
                "Deadline to challenge a Jobseeker's Allowance decision.",
            ),
            (
                BenefitType::HousingBenefit,
                "Deadline to challenge a Housing Benefit decision.",
            ),
            (
                BenefitType::ChildBenefit,
                "Deadline to challenge a Child Benefit decision.",
            ),
            (
                BenefitType::CarersAllowance,
                "Deadline to challenge a Carer's Allowance decision.",
            ),
            (
                BenefitType::AttendanceAllowance,
                "Deadline to challenge an Attendance Allowance decision.",
            ),
        ];
        descriptions
            .iter()
            .map(|&(benefit, description)| RuleEntry {
                kind: CaseKind::Benefits(benefit),
                period: RulePeriod::CalendarDays(30),
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description,
                citation: CITATION,
            })
            .collect()
    }

    fn housing_rules() -> Vec<RuleEntry> {
        vec![
            RuleEntry {
                kind: CaseKind::Housing(HousingNotice::Section21),
                period: RulePeriod::CalendarMonths {
                    months: 2,
                    minus_days: 0,
                },
                urgent_threshold_days: HOUSING_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Earliest date your landlord can apply to court after a Section 21 notice.",
                citation: "Housing Act 1988, s.21(1)(b)",
            },
            RuleEntry {
                kind: CaseKind::Housing(HousingNotice::Section8),
                period: RulePeriod::CalendarDays(14),
                urgent_threshold_days: HOUSING_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Earliest date your landlord can start possession proceedings after a Section 8 notice.",
                citation: "Housing Act 1988, s.8(4B)",
            },
            RuleEntry {
                kind: CaseKind::Housing(HousingNotice::RentIncrease),
                period: RulePeriod::CalendarMonths {
                    months: 1,
                    minus_days: 0,
                },
                urgent_threshold_days: HOUSING_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Deadline to refer a rent increase notice to the First-tier Tribunal.",
                citation: "Housing Act 1988, s.13(4)",
            },
            RuleEntry {
                kind: CaseKind::Housing(HousingNotice::HomelessnessReview),
                period: RulePeriod::CalendarDays(21),
                urgent_threshold_days: HOUSING_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Deadline to request a review of a homelessness decision.",
                citation: "Housing Act 1996, s.202(3)",
            },
        ]
    }

    fn court_rules() -> Vec<RuleEntry> {
        vec![
            RuleEntry {
                kind: CaseKind::Court(CourtDeadline::SmallClaimsResponse),
                period: RulePeriod::CalendarDays(14),
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Deadline to respond to a small claims court claim.",
                citation: "Civil Procedure Rules, r.15.4(1)(a)",
            },
            RuleEntry {
                kind: CaseKind::Court(CourtDeadline::AppealCountyCourt),
                period: RulePeriod::CalendarDays(21),
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Deadline to file an appellant's notice against a county court decision.",
                citation: "Civil Procedure Rules, r.52.12(2)(b)",
            },
            RuleEntry {
                kind: CaseKind::Court(CourtDeadline::JudicialReview),
                period: RulePeriod::CalendarMonths {
                    months: 3,
                    minus_days: 0,
                },
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Deadline to file a judicial review claim.",
                citation: "Civil Procedure Rules, r.54.5(1)",
            },
            RuleEntry {
                kind: CaseKind::Court(CourtDeadline::PersonalInjuryClaim),
                period: RulePeriod::CalendarMonths {
                    months: 36,
                    minus_days: 0,
                },
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Limitation deadline to issue a personal injury claim.",
                citation: "Limitation Act 1980, s.11(4)",
            },
            RuleEntry {
                kind: CaseKind::Court(CourtDeadline::EmploymentAppeal),
                period: RulePeriod::CalendarDays(42),
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Deadline to appeal an employment tribunal judgment to the Employment Appeal Tribunal.",
                citation: "Employment Appeal Tribunal Rules 1993, r.3(3)",
            },
            RuleEntry {
                kind: CaseKind::Court(CourtDeadline::FoiResponse),
                period: RulePeriod::BusinessDays(20),
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Date by which a public authority must answer a Freedom of Information request.",
                citation: "Freedom of Information Act 2000, s.10(1)",
            },
            RuleEntry {
                kind: CaseKind::Court(CourtDeadline::SubjectAccessRequest),
                period: RulePeriod::CalendarMonths {
                    months: 1,
                    minus_days: 0,
                },
                urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
                acas_extension_applies: false,
                description: "Date by which an organisation must answer a subject access request.",
                citation: "UK GDPR, art.12(3)",
            },
        ]
    }
}
