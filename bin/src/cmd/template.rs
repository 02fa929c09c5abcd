//! Template command implementation.

use anyhow::Result;

use crate::scenario::Scenario;

/// Render the default scenario for `years` projection years as pretty JSON.
pub(crate) fn scenario_template(years: usize) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Scenario::with_years(years))?)
}

/// Print a default scenario to stdout.
pub(crate) fn print_template(years: usize) -> Result<()> {
    println!("{}", scenario_template(years)?);
    Ok(())
}
