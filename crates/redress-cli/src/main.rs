//! # redress CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

use redress_engine::DeadlineCalculator;

/// Redress — statutory deadline calculator for everyday legal problems.
///
/// Computes the operative deadline, days remaining, urgency, and next
/// steps for employment, benefits, housing, and court matters. Results
/// are printed as JSON.
#[derive(Parser, Debug)]
#[command(name = "redress", version, about)]
struct Cli {
    /// Compute as if today were this date (YYYY-MM-DD). Defaults to the
    /// system date.
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Employment tribunal claim deadlines.
    Employment(redress_cli::employment::EmploymentArgs),
    /// Benefits decision challenge deadlines.
    Benefits(redress_cli::benefits::BenefitsArgs),
    /// Housing notice and review deadlines.
    Housing(redress_cli::housing::HousingArgs),
    /// Court and tribunal filing deadlines.
    Court(redress_cli::court::CourtArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let calculator = DeadlineCalculator::new(redress_cli::clock_from(cli.today.as_deref())?);

    match cli.command {
        Commands::Employment(args) => redress_cli::employment::run(args, &calculator),
        Commands::Benefits(args) => redress_cli::benefits::run(args, &calculator),
        Commands::Housing(args) => redress_cli::housing::run(args, &calculator),
        Commands::Court(args) => redress_cli::court::run(args, &calculator),
    }
}
