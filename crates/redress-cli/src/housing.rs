//! The `housing` subcommand.

use clap::Args;

use redress_core::{HousingNotice, TenancyType};
use redress_engine::{DeadlineCalculator, HousingRequest};

use crate::output::print_result;

/// Arguments for housing notice and review deadlines.
#[derive(Args, Debug)]
pub struct HousingArgs {
    /// Date the notice was served or the decision issued (YYYY-MM-DD).
    #[arg(long)]
    pub notice_date: String,

    /// Notice type: section_21, section_8, rent_increase, or
    /// homelessness_review.
    #[arg(long)]
    pub notice: String,

    /// Tenancy type, if known: assured_shorthold, assured, regulated,
    /// or lodger.
    #[arg(long)]
    pub tenancy: Option<String>,
}

/// Run the housing subcommand.
pub fn run(args: HousingArgs, calculator: &DeadlineCalculator) -> anyhow::Result<()> {
    let notice: HousingNotice = args.notice.parse()?;
    let tenancy = args
        .tenancy
        .as_deref()
        .map(str::parse::<TenancyType>)
        .transpose()?;
    let result = calculator.housing(HousingRequest {
        notice_date: args.notice_date,
        notice,
        tenancy,
    })?;
    print_result(&result)
}
