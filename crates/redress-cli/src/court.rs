//! The `court` subcommand.

use clap::Args;

use redress_core::CourtDeadline;
use redress_engine::{CourtRequest, DeadlineCalculator};

use crate::output::print_result;

/// Arguments for court and tribunal deadlines.
#[derive(Args, Debug)]
pub struct CourtArgs {
    /// The date the period runs from: service, judgment, or request (YYYY-MM-DD).
    #[arg(long)]
    pub relevant_date: String,

    /// Deadline type: small_claims_response, appeal_county_court,
    /// judicial_review, personal_injury_claim, employment_appeal,
    /// foi_response, or subject_access_request.
    #[arg(long)]
    pub deadline: String,
}

/// Run the court subcommand.
pub fn run(args: CourtArgs, calculator: &DeadlineCalculator) -> anyhow::Result<()> {
    let deadline: CourtDeadline = args.deadline.parse()?;
    let result = calculator.court(CourtRequest {
        relevant_date: args.relevant_date,
        deadline,
    })?;
    print_result(&result)
}
