//! The `employment` subcommand.

use clap::Args;

use redress_core::EmploymentClaim;
use redress_engine::{DeadlineCalculator, EmploymentRequest};

use crate::output::print_result;

/// Arguments for employment tribunal deadlines.
#[derive(Args, Debug)]
pub struct EmploymentArgs {
    /// Date of the dismissal or other event the claim arises from (YYYY-MM-DD).
    #[arg(long)]
    pub event_date: String,

    /// Claim type: dismissal, discrimination, unpaid_wages,
    /// redundancy_payment, equal_pay, or whistleblowing.
    #[arg(long)]
    pub claim: String,

    /// ACAS early conciliation has been started.
    #[arg(long)]
    pub acas_contacted: bool,

    /// ACAS certificate issue date, if the certificate has been issued (YYYY-MM-DD).
    #[arg(long)]
    pub acas_certificate_date: Option<String>,
}

/// Run the employment subcommand.
pub fn run(args: EmploymentArgs, calculator: &DeadlineCalculator) -> anyhow::Result<()> {
    let claim: EmploymentClaim = args.claim.parse()?;
    let result = calculator.employment(EmploymentRequest {
        event_date: args.event_date,
        claim,
        has_contacted_acas: args.acas_contacted,
        acas_certificate_date: args.acas_certificate_date,
    })?;
    print_result(&result)
}
