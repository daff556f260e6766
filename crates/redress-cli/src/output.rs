//! JSON rendering of results on stdout.

use redress_engine::DeadlineResult;

/// Print the uniform result as pretty JSON.
pub fn print_result(result: &DeadlineResult) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
