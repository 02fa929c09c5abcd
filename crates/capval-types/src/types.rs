//! Valuation data model.
//!
//! Rates are stored as decimals throughout (`0.05` means 5%). Converting a
//! percentage typed by a user is the job of whatever boundary builds these
//! values.

use serde::{Deserialize, Serialize};

use crate::error::{CapvalError, Result};

/// Cash-flow components for one projection year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearInputs {
    /// Operating income (EBIT)
    pub operating_income: f64,
    /// Taxes paid on operating income
    pub taxes: f64,
    /// Depreciation and amortization added back
    pub depreciation_amortization: f64,
    /// Capital expenditures and acquisitions
    pub capital_expenditures: f64,
    /// Change in non-cash working capital
    pub change_in_working_capital: f64,
}

impl YearInputs {
    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("operating_income", self.operating_income),
            ("taxes", self.taxes),
            ("depreciation_amortization", self.depreciation_amortization),
            ("capital_expenditures", self.capital_expenditures),
            ("change_in_working_capital", self.change_in_working_capital),
        ]
    }
}

/// Everything the valuation engine needs for one run.
///
/// `years` is ordered: element 0 is projection year 1. Its length is chosen by
/// the caller and is never assumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    /// Risk-free rate, decimal
    pub risk_free_rate: f64,
    /// Equity beta
    pub beta: f64,
    /// Equity risk premium, decimal
    pub equity_risk_premium: f64,
    /// Pre-tax cost of debt (yield to maturity), decimal
    pub pre_tax_cost_of_debt: f64,
    /// Marginal tax rate, decimal
    pub tax_rate: f64,
    /// Market value of equity
    pub equity_market_value: f64,
    /// Market value of debt
    pub debt_market_value: f64,
    /// Initial outlay, treated as occurring at t=0
    pub initial_investment: f64,
    /// Shares outstanding
    pub number_of_outstanding_shares: u64,
    /// Per-year cash-flow components
    pub years: Vec<YearInputs>,
}

impl ValuationInputs {
    /// Number of projection years.
    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Sum of equity and debt market values.
    pub fn total_capital(&self) -> f64 {
        self.equity_market_value + self.debt_market_value
    }

    /// Check the constraints a form boundary would enforce: every value finite
    /// and non-negative, at least one projection year.
    ///
    /// # Errors
    ///
    /// Returns [`CapvalError::InvalidInput`] naming the first offending field,
    /// or [`CapvalError::NoProjectionYears`] for an empty projection.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("risk_free_rate", self.risk_free_rate),
            ("beta", self.beta),
            ("equity_risk_premium", self.equity_risk_premium),
            ("pre_tax_cost_of_debt", self.pre_tax_cost_of_debt),
            ("tax_rate", self.tax_rate),
            ("equity_market_value", self.equity_market_value),
            ("debt_market_value", self.debt_market_value),
            ("initial_investment", self.initial_investment),
        ];
        for (name, value) in scalars {
            check_non_negative(name, value)?;
        }

        if self.years.is_empty() {
            return Err(CapvalError::NoProjectionYears);
        }

        for (idx, year) in self.years.iter().enumerate() {
            for (name, value) in year.fields() {
                check_non_negative(&format!("year {} {}", idx + 1, name), value)?;
            }
        }

        Ok(())
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CapvalError::InvalidInput(format!("{name} must be finite")));
    }
    if value < 0.0 {
        return Err(CapvalError::InvalidInput(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

/// Derived valuation figures.
///
/// `fcff_per_year` has the same length and order as [`ValuationInputs::years`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// CAPM cost of equity, decimal
    pub cost_of_equity: f64,
    /// After-tax cost of debt, decimal
    pub cost_of_debt: f64,
    /// Weighted average cost of capital, decimal
    pub wacc: f64,
    /// Free cash flow to firm per projection year
    pub fcff_per_year: Vec<f64>,
    /// Net present value of the projection less the initial investment
    pub npv: f64,
    /// NPV less the market value of debt
    pub equity_value: f64,
    /// Equity value per outstanding share, or 0 with no shares
    pub price_per_share: f64,
}

/// Free-text metadata printed around the figures in a report.
///
/// An empty `comments` or `assumptions` string means the user left it blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Project or company name
    pub project_name: String,
    /// Optional comments
    #[serde(default)]
    pub comments: String,
    /// Optional assumptions
    #[serde(default)]
    pub assumptions: String,
}

impl ReportMetadata {
    /// Create metadata with no comments or assumptions.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Default::default()
        }
    }

    /// Set the comments text.
    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    /// Set the assumptions text.
    #[must_use]
    pub fn with_assumptions(mut self, assumptions: impl Into<String>) -> Self {
        self.assumptions = assumptions.into();
        self
    }

    /// Whether any comments were supplied.
    pub const fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }

    /// Reject a blank project name.
    ///
    /// # Errors
    ///
    /// Returns [`CapvalError::EmptyProjectName`] if the name is empty or whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(CapvalError::EmptyProjectName);
        }
        Ok(())
    }
}
