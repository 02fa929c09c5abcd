#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # capval
//!
//! Umbrella crate re-exporting the capval sub-crates.
//!
//! ## Crate Organization
//!
//! - [`types`] - Inputs, results, report metadata and the shared error type
//! - [`engine`] - Cost of capital, FCFF and discounting
//! - [`report`] - Report layout and `.docx` rendering
//!
//! ## Data Flow
//!
//! Each run is independent and one-way:
//!
//! 1. The caller builds [`ValuationInputs`] and [`ReportMetadata`]
//! 2. [`ValuationEngine`] derives an immutable [`ValuationResult`]
//! 3. [`ReportBuilder`] turns the result into a `.docx` byte stream
//!
//! A failure at any step aborts the run before any report bytes exist.

use tracing::debug;

/// Version information for the capval crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Data model and error types.
pub mod types {
    pub use capval_types::*;
}

/// Valuation engine.
pub mod engine {
    pub use capval_engine::*;
}

/// Report generation.
pub mod report {
    pub use capval_report::*;
}

pub use capval_engine::{EngineConfig, ValuationEngine};
pub use capval_report::{ReportBuilder, ReportConfig, ReportFile, report_filename};
pub use capval_types::{
    CapvalError, ReportMetadata, Result, ValuationInputs, ValuationResult, YearInputs,
};

/// Compute a valuation and build its report with default configuration.
///
/// # Errors
///
/// Any error from [`ValuationEngine::compute`] or [`ReportBuilder::export`].
pub fn run_valuation(
    metadata: &ReportMetadata,
    inputs: &ValuationInputs,
) -> Result<(ValuationResult, ReportFile)> {
    run_valuation_with(
        &ValuationEngine::default(),
        &ReportBuilder::default(),
        metadata,
        inputs,
    )
}

/// Compute a valuation and build its report with the given engine and builder.
///
/// # Errors
///
/// Any error from [`ValuationEngine::compute`] or [`ReportBuilder::export`].
pub fn run_valuation_with(
    engine: &ValuationEngine,
    builder: &ReportBuilder,
    metadata: &ReportMetadata,
    inputs: &ValuationInputs,
) -> Result<(ValuationResult, ReportFile)> {
    debug!(project = %metadata.project_name, years = inputs.year_count(), "running valuation");
    let result = engine.compute(inputs)?;
    let file = builder.export(metadata, &result)?;
    Ok((result, file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs(equity: f64, debt: f64) -> ValuationInputs {
        ValuationInputs {
            risk_free_rate: 0.01,
            beta: 1.0,
            equity_risk_premium: 0.06,
            pre_tax_cost_of_debt: 0.05,
            tax_rate: 0.30,
            equity_market_value: equity,
            debt_market_value: debt,
            initial_investment: 100_000.0,
            number_of_outstanding_shares: 100_000,
            years: vec![
                YearInputs {
                    operating_income: 100_000.0,
                    taxes: 30_000.0,
                    depreciation_amortization: 20_000.0,
                    capital_expenditures: 15_000.0,
                    change_in_working_capital: 5_000.0,
                };
                5
            ],
        }
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_run_valuation() {
        let metadata = ReportMetadata::new("Project A");
        let (result, file) = run_valuation(&metadata, &inputs(500_000.0, 500_000.0)).unwrap();

        assert_relative_eq!(result.wacc, 0.0525, epsilon = 1e-12);
        assert_eq!(file.filename, "Financial_Report_Project_A.docx");
        assert!(file.bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_run_valuation_fails_before_report() {
        let metadata = ReportMetadata::new("Project A");
        let err = run_valuation(&metadata, &inputs(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, CapvalError::ZeroCapitalStructure));
    }

    #[test]
    fn test_blank_name_fails() {
        let err = run_valuation(&ReportMetadata::new(""), &inputs(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, CapvalError::EmptyProjectName));
    }
}
