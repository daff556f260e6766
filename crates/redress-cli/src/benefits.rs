//! The `benefits` subcommand.

use clap::Args;

use redress_core::BenefitType;
use redress_engine::{BenefitsRequest, DeadlineCalculator};

use crate::output::print_result;

/// Arguments for benefits decision challenge deadlines.
#[derive(Args, Debug)]
pub struct BenefitsArgs {
    /// Date on the decision letter (YYYY-MM-DD).
    #[arg(long)]
    pub decision_date: String,

    /// Benefit type: universal_credit, pip, esa, jsa, housing_benefit,
    /// child_benefit, carers_allowance, or attendance_allowance.
    #[arg(long)]
    pub benefit: String,

    /// Mandatory reconsideration has been completed.
    #[arg(long)]
    pub reconsideration_done: bool,

    /// Date of the mandatory reconsideration decision, if known (YYYY-MM-DD).
    #[arg(long)]
    pub reconsideration_date: Option<String>,
}

/// Run the benefits subcommand.
pub fn run(args: BenefitsArgs, calculator: &DeadlineCalculator) -> anyhow::Result<()> {
    let benefit: BenefitType = args.benefit.parse()?;
    let result = calculator.benefits(BenefitsRequest {
        decision_date: args.decision_date,
        benefit,
        has_mandatory_reconsideration: args.reconsideration_done,
        mandatory_reconsideration_date: args.reconsideration_date,
    })?;
    print_result(&result)
}
