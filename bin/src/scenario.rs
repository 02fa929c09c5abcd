//! Scenario files: valuation inputs as a user enters them.
//!
//! Rates are written in percent (`5.0` for 5%) and converted to decimals on
//! the way into the engine.

use std::path::Path;

use anyhow::{Context, Result};
use capval::{ReportMetadata, ValuationInputs, YearInputs};
use serde::{Deserialize, Serialize};

/// A complete valuation scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Scenario {
    pub(crate) project_name: String,
    #[serde(default)]
    pub(crate) comments: String,
    #[serde(default)]
    pub(crate) assumptions: String,

    pub(crate) risk_free_rate_pct: f64,
    pub(crate) beta: f64,
    pub(crate) equity_risk_premium_pct: f64,
    /// Yield to maturity or interest rate on debt
    pub(crate) cost_of_debt_pct: f64,
    pub(crate) tax_rate_pct: f64,

    pub(crate) equity_market_value: f64,
    pub(crate) debt_market_value: f64,
    pub(crate) initial_investment: f64,
    pub(crate) outstanding_shares: u64,

    pub(crate) years: Vec<YearInputs>,
}

const DEFAULT_YEAR: YearInputs = YearInputs {
    operating_income: 100_000.0,
    taxes: 30_000.0,
    depreciation_amortization: 20_000.0,
    capital_expenditures: 15_000.0,
    change_in_working_capital: 5_000.0,
};

impl Default for Scenario {
    fn default() -> Self {
        Self::with_years(5)
    }
}

impl Scenario {
    /// Default scenario projected over `years` identical years.
    pub(crate) fn with_years(years: usize) -> Self {
        Self {
            project_name: "Project A".to_string(),
            comments: String::new(),
            assumptions: String::new(),
            risk_free_rate_pct: 1.0,
            beta: 1.0,
            equity_risk_premium_pct: 6.0,
            cost_of_debt_pct: 5.0,
            tax_rate_pct: 30.0,
            equity_market_value: 500_000.0,
            debt_market_value: 500_000.0,
            initial_investment: 100_000.0,
            outstanding_shares: 100_000,
            years: vec![DEFAULT_YEAR; years],
        }
    }

    /// Read a scenario from a JSON file.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    /// Convert to engine inputs and report metadata, validating both.
    pub(crate) fn into_parts(self) -> Result<(ReportMetadata, ValuationInputs)> {
        let metadata = ReportMetadata {
            project_name: self.project_name,
            comments: self.comments,
            assumptions: self.assumptions,
        };
        metadata.validate()?;

        let inputs = ValuationInputs {
            risk_free_rate: self.risk_free_rate_pct / 100.0,
            beta: self.beta,
            equity_risk_premium: self.equity_risk_premium_pct / 100.0,
            pre_tax_cost_of_debt: self.cost_of_debt_pct / 100.0,
            tax_rate: self.tax_rate_pct / 100.0,
            equity_market_value: self.equity_market_value,
            debt_market_value: self.debt_market_value,
            initial_investment: self.initial_investment,
            number_of_outstanding_shares: self.outstanding_shares,
            years: self.years,
        };
        inputs.validate()?;

        Ok((metadata, inputs))
    }
}
