//! # Legal Domain Taxonomy — Single Source of Truth
//!
//! Defines the four legal domains the engine computes deadlines for and the
//! closed subtype vocabulary of each. These are the ONE definition used
//! across the stack. Every `match` on a domain or subtype must be
//! exhaustive; adding a variant forces every consumer to handle it at
//! compile time.
//!
//! Dispatch is by variant, never by string comparison. Strings exist only
//! at the boundary (serde, CLI), where the snake_case identifiers produced
//! by `as_str()` round-trip through `FromStr`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DeadlineError;

// ─── Legal Domains ───────────────────────────────────────────────────

/// The legal domains covered by the deadline engine.
///
/// Each domain has its own reference-date semantics and stage flags, but
/// all four share the same computation contract and uniform result shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalDomain {
    /// Employment tribunal claims (unfair dismissal, discrimination, wages).
    EmploymentTribunal,
    /// Social security benefit decision challenges and tribunal appeals.
    BenefitsAppeal,
    /// Housing notices and homelessness decision reviews.
    Housing,
    /// General court and tribunal filing deadlines.
    CourtTribunal,
}

impl LegalDomain {
    /// All domains in canonical order.
    pub fn all() -> &'static [LegalDomain] {
        &[
            Self::EmploymentTribunal,
            Self::BenefitsAppeal,
            Self::Housing,
            Self::CourtTribunal,
        ]
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmploymentTribunal => "employment_tribunal",
            Self::BenefitsAppeal => "benefits_appeal",
            Self::Housing => "housing",
            Self::CourtTribunal => "court_tribunal",
        }
    }
}

impl std::fmt::Display for LegalDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Employment Tribunal Claims ──────────────────────────────────────

/// Employment tribunal claim types.
///
/// Most claims carry the three-months-minus-one-day limitation period and
/// participate in ACAS early conciliation; redundancy payment and equal
/// pay claims have a six-month period and do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentClaim {
    /// Unfair or constructive dismissal.
    Dismissal,
    /// Discrimination because of a protected characteristic.
    Discrimination,
    /// Unauthorised deductions from wages.
    UnpaidWages,
    /// Statutory redundancy payment claims.
    RedundancyPayment,
    /// Equal pay claims.
    EqualPay,
    /// Detriment or dismissal for whistleblowing.
    Whistleblowing,
}

impl EmploymentClaim {
    /// All claim types in canonical order.
    pub fn all() -> &'static [EmploymentClaim] {
        &[
            Self::Dismissal,
            Self::Discrimination,
            Self::UnpaidWages,
            Self::RedundancyPayment,
            Self::EqualPay,
            Self::Whistleblowing,
        ]
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dismissal => "dismissal",
            Self::Discrimination => "discrimination",
            Self::UnpaidWages => "unpaid_wages",
            Self::RedundancyPayment => "redundancy_payment",
            Self::EqualPay => "equal_pay",
            Self::Whistleblowing => "whistleblowing",
        }
    }
}

impl std::fmt::Display for EmploymentClaim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentClaim {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dismissal" => Ok(Self::Dismissal),
            "discrimination" => Ok(Self::Discrimination),
            "unpaid_wages" => Ok(Self::UnpaidWages),
            "redundancy_payment" => Ok(Self::RedundancyPayment),
            "equal_pay" => Ok(Self::EqualPay),
            "whistleblowing" => Ok(Self::Whistleblowing),
            other => Err(unknown_subtype(LegalDomain::EmploymentTribunal, other)),
        }
    }
}

// ─── Benefit Types ───────────────────────────────────────────────────

/// Social security benefits whose decisions can be challenged.
///
/// All benefit types share the mandatory reconsideration procedure and the
/// one-month challenge window; the type selects the description and
/// citation attached to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitType {
    /// Universal Credit.
    UniversalCredit,
    /// Personal Independence Payment.
    Pip,
    /// Employment and Support Allowance.
    Esa,
    /// Jobseeker's Allowance.
    Jsa,
    /// Housing Benefit.
    HousingBenefit,
    /// Child Benefit.
    ChildBenefit,
    /// Carer's Allowance.
    CarersAllowance,
    /// Attendance Allowance.
    AttendanceAllowance,
}

impl BenefitType {
    /// All benefit types in canonical order.
    pub fn all() -> &'static [BenefitType] {
        &[
            Self::UniversalCredit,
            Self::Pip,
            Self::Esa,
            Self::Jsa,
            Self::HousingBenefit,
            Self::ChildBenefit,
            Self::CarersAllowance,
            Self::AttendanceAllowance,
        ]
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UniversalCredit => "universal_credit",
            Self::Pip => "pip",
            Self::Esa => "esa",
            Self::Jsa => "jsa",
            Self::HousingBenefit => "housing_benefit",
            Self::ChildBenefit => "child_benefit",
            Self::CarersAllowance => "carers_allowance",
            Self::AttendanceAllowance => "attendance_allowance",
        }
    }
}

impl std::fmt::Display for BenefitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BenefitType {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "universal_credit" => Ok(Self::UniversalCredit),
            "pip" => Ok(Self::Pip),
            "esa" => Ok(Self::Esa),
            "jsa" => Ok(Self::Jsa),
            "housing_benefit" => Ok(Self::HousingBenefit),
            "child_benefit" => Ok(Self::ChildBenefit),
            "carers_allowance" => Ok(Self::CarersAllowance),
            "attendance_allowance" => Ok(Self::AttendanceAllowance),
            other => Err(unknown_subtype(LegalDomain::BenefitsAppeal, other)),
        }
    }
}

// ─── Housing Notices ─────────────────────────────────────────────────

/// Housing notice and decision types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingNotice {
    /// Section 21 "no fault" possession notice.
    #[serde(rename = "section_21")]
    Section21,
    /// Section 8 possession notice on stated grounds.
    #[serde(rename = "section_8")]
    Section8,
    /// Notice of a rent increase under an assured tenancy.
    RentIncrease,
    /// Local authority homelessness decision open to review.
    HomelessnessReview,
}

impl HousingNotice {
    /// All notice types in canonical order.
    pub fn all() -> &'static [HousingNotice] {
        &[
            Self::Section21,
            Self::Section8,
            Self::RentIncrease,
            Self::HomelessnessReview,
        ]
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Section21 => "section_21",
            Self::Section8 => "section_8",
            Self::RentIncrease => "rent_increase",
            Self::HomelessnessReview => "homelessness_review",
        }
    }
}

impl std::fmt::Display for HousingNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HousingNotice {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "section_21" => Ok(Self::Section21),
            "section_8" => Ok(Self::Section8),
            "rent_increase" => Ok(Self::RentIncrease),
            "homelessness_review" => Ok(Self::HomelessnessReview),
            other => Err(unknown_subtype(LegalDomain::Housing, other)),
        }
    }
}

// ─── Court and Tribunal Deadlines ────────────────────────────────────

/// General court and tribunal deadline types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtDeadline {
    /// Responding to a small claims court claim.
    SmallClaimsResponse,
    /// Appealing a county court decision.
    AppealCountyCourt,
    /// Filing a judicial review claim.
    JudicialReview,
    /// Issuing a personal injury claim within the limitation period.
    PersonalInjuryClaim,
    /// Appealing an employment tribunal judgment to the EAT.
    EmploymentAppeal,
    /// A public authority's response to a Freedom of Information request.
    FoiResponse,
    /// A controller's response to a subject access request.
    SubjectAccessRequest,
}

impl CourtDeadline {
    /// All deadline types in canonical order.
    pub fn all() -> &'static [CourtDeadline] {
        &[
            Self::SmallClaimsResponse,
            Self::AppealCountyCourt,
            Self::JudicialReview,
            Self::PersonalInjuryClaim,
            Self::EmploymentAppeal,
            Self::FoiResponse,
            Self::SubjectAccessRequest,
        ]
    }

    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmallClaimsResponse => "small_claims_response",
            Self::AppealCountyCourt => "appeal_county_court",
            Self::JudicialReview => "judicial_review",
            Self::PersonalInjuryClaim => "personal_injury_claim",
            Self::EmploymentAppeal => "employment_appeal",
            Self::FoiResponse => "foi_response",
            Self::SubjectAccessRequest => "subject_access_request",
        }
    }
}

impl std::fmt::Display for CourtDeadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourtDeadline {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small_claims_response" => Ok(Self::SmallClaimsResponse),
            "appeal_county_court" => Ok(Self::AppealCountyCourt),
            "judicial_review" => Ok(Self::JudicialReview),
            "personal_injury_claim" => Ok(Self::PersonalInjuryClaim),
            "employment_appeal" => Ok(Self::EmploymentAppeal),
            "foi_response" => Ok(Self::FoiResponse),
            "subject_access_request" => Ok(Self::SubjectAccessRequest),
            other => Err(unknown_subtype(LegalDomain::CourtTribunal, other)),
        }
    }
}

// ─── Tenancy Types ───────────────────────────────────────────────────

/// Tenancy classification, used to tailor housing guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenancyType {
    /// Assured shorthold tenancy (the private-rented default).
    AssuredShorthold,
    /// Assured (non-shorthold) tenancy.
    Assured,
    /// Regulated tenancy under the Rent Act 1977.
    Regulated,
    /// Lodger with a resident landlord.
    Lodger,
}

impl TenancyType {
    /// The snake_case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssuredShorthold => "assured_shorthold",
            Self::Assured => "assured",
            Self::Regulated => "regulated",
            Self::Lodger => "lodger",
        }
    }
}

impl std::fmt::Display for TenancyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenancyType {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assured_shorthold" => Ok(Self::AssuredShorthold),
            "assured" => Ok(Self::Assured),
            "regulated" => Ok(Self::Regulated),
            "lodger" => Ok(Self::Lodger),
            other => Err(unknown_subtype(LegalDomain::Housing, other)),
        }
    }
}

// ─── Case Kind ───────────────────────────────────────────────────────

/// A fully qualified case category: domain plus subtype.
///
/// This is the key the rule catalog is indexed by. Constructing one is
/// only possible from the validated subtype enums, so a `CaseKind` always
/// names a category the taxonomy knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseKind {
    /// An employment tribunal claim.
    Employment(EmploymentClaim),
    /// A benefits decision challenge.
    Benefits(BenefitType),
    /// A housing notice or review.
    Housing(HousingNotice),
    /// A court or tribunal filing deadline.
    Court(CourtDeadline),
}

impl CaseKind {
    /// The legal domain this case belongs to.
    pub fn domain(&self) -> LegalDomain {
        match self {
            Self::Employment(_) => LegalDomain::EmploymentTribunal,
            Self::Benefits(_) => LegalDomain::BenefitsAppeal,
            Self::Housing(_) => LegalDomain::Housing,
            Self::Court(_) => LegalDomain::CourtTribunal,
        }
    }

    /// The snake_case subtype identifier within the domain.
    pub fn subtype_str(&self) -> &'static str {
        match self {
            Self::Employment(c) => c.as_str(),
            Self::Benefits(b) => b.as_str(),
            Self::Housing(n) => n.as_str(),
            Self::Court(d) => d.as_str(),
        }
    }

    /// Every case kind the taxonomy defines, in canonical order.
    pub fn all() -> Vec<CaseKind> {
        let mut kinds = Vec::new();
        kinds.extend(EmploymentClaim::all().iter().map(|c| Self::Employment(*c)));
        kinds.extend(BenefitType::all().iter().map(|b| Self::Benefits(*b)));
        kinds.extend(HousingNotice::all().iter().map(|n| Self::Housing(*n)));
        kinds.extend(CourtDeadline::all().iter().map(|d| Self::Court(*d)));
        kinds
    }
}

impl std::fmt::Display for CaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.domain(), self.subtype_str())
    }
}

fn unknown_subtype(domain: LegalDomain, subtype: &str) -> DeadlineError {
    DeadlineError::UnknownCaseSubtype {
        domain: domain.to_string(),
        subtype: subtype.to_string(),
    }
}
