//! Compute command implementation.

use std::fmt;
use std::path::Path;

use anyhow::Result;
use capval::report::{format_currency, format_percent};
use capval::{ReportMetadata, ValuationEngine, ValuationResult};
use clap::ValueEnum;

use crate::scenario::Scenario;

/// Output format for computed valuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable summary
    Text,
    /// `ValuationResult` as JSON
    Json,
}

/// Compute a scenario and print the result.
pub(crate) fn show_valuation(path: &Path, format: OutputFormat) -> Result<()> {
    let (metadata, inputs) = Scenario::load(path)?.into_parts()?;
    let result = ValuationEngine::default().compute(&inputs)?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&metadata, &result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

/// Format a result as a boxed text summary.
pub(crate) fn render_text(metadata: &ReportMetadata, result: &ValuationResult) -> String {
    TextSummary { metadata, result }.to_string()
}

struct TextSummary<'a> {
    metadata: &'a ReportMetadata,
    result: &'a ValuationResult,
}

impl fmt::Display for TextSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let money = |amount: f64| format_currency(amount, "$");
        let result = self.result;

        writeln!(f, "\n╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(f, "║                      Valuation Summary                       ║")?;
        writeln!(f, "╚══════════════════════════════════════════════════════════════╝\n")?;
        writeln!(f, "Project:          {}", self.metadata.project_name)?;
        writeln!(f)?;
        writeln!(f, "Cost of Equity:   {:>16}", format_percent(result.cost_of_equity))?;
        writeln!(f, "Cost of Debt:     {:>16}", format_percent(result.cost_of_debt))?;
        writeln!(f, "WACC:             {:>16}", format_percent(result.wacc))?;
        writeln!(f)?;
        writeln!(f, "FCFF")?;
        writeln!(f, "{}", "─".repeat(34))?;
        for (idx, fcff) in result.fcff_per_year.iter().enumerate() {
            writeln!(f, "  Year {:<10} {:>16}", idx + 1, money(*fcff))?;
        }
        writeln!(f)?;
        writeln!(f, "NPV:              {:>16}", money(result.npv))?;
        writeln!(f, "Equity Value:     {:>16}", money(result.equity_value))?;
        writeln!(f, "Price Per Share:  {:>16}", money(result.price_per_share))?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ValuationResult {
        ValuationResult {
            cost_of_equity: 0.07,
            cost_of_debt: 0.035,
            wacc: 0.0525,
            fcff_per_year: vec![70_000.0, 70_000.0],
            npv: 30_000.0,
            equity_value: -470_000.0,
            price_per_share: -4.7,
        }
    }

    #[test]
    fn test_render_text_lists_every_year() {
        let text = render_text(&ReportMetadata::new("Acme"), &result());
        assert!(text.contains("Project:          Acme"));
        assert!(text.contains("5.25%"));
        assert!(text.contains("Year 1"));
        assert!(text.contains("Year 2"));
        assert!(!text.contains("Year 3"));
        assert!(text.contains("-$470,000.00"));
    }

    #[test]
    fn test_render_text_line_layout() {
        let text = render_text(&ReportMetadata::new("Acme"), &result());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with('╔'));
        assert!(lines[2].contains("Valuation Summary"));
        assert!(lines[3].starts_with('╚'));
        assert!(lines.contains(&"Project:          Acme"));
        let year_lines = lines.iter().filter(|l| l.starts_with("  Year ")).count();
        assert_eq!(year_lines, 2);
        assert!(lines.iter().any(|l| l.starts_with("Price Per Share:") && l.ends_with("-$4.70")));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_show_valuation_reads_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        std::fs::write(&path, serde_json::to_string(&Scenario::default()).unwrap()).unwrap();

        assert!(show_valuation(&path, OutputFormat::Json).is_ok());
        assert!(show_valuation(&path, OutputFormat::Text).is_ok());
    }

    #[test]
    fn test_show_valuation_zero_capital() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        let mut scenario = Scenario::default();
        scenario.equity_market_value = 0.0;
        scenario.debt_market_value = 0.0;
        std::fs::write(&path, serde_json::to_string(&scenario).unwrap()).unwrap();

        let err = show_valuation(&path, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("positive total value"));
    }
}
