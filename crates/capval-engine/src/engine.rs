//! End-to-end valuation.
//!
//! [`ValuationEngine::compute`] runs the whole pipeline in a fixed order:
//! cost of equity, after-tax cost of debt, WACC, per-year FCFF, NPV, equity
//! value, price per share. Nothing is rounded; formatting belongs to the report.

use capval_types::{CapvalError, Result, ValuationInputs, ValuationResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cash_flow::fcff_series;
use crate::discount::net_present_value;
use crate::rates::{after_tax_cost_of_debt, capm_cost_of_equity, wacc};

/// Configuration for the valuation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Run [`ValuationInputs::validate`] before computing.
    ///
    /// Off by default: range checks belong to the input boundary and the
    /// engine only rejects inputs it cannot compute with.
    pub validate_inputs: bool,
}

/// Stateless valuation calculator.
///
/// Holds only its configuration, so one engine can be shared across threads
/// and reused for any number of independent runs.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    config: EngineConfig,
}

impl ValuationEngine {
    /// Create a new engine with the given configuration.
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute every valuation figure for `inputs`.
    ///
    /// # Errors
    ///
    /// - [`CapvalError::ZeroCapitalStructure`] if equity and debt market values sum to zero
    /// - [`CapvalError::InvalidDiscountRate`] if `1 + wacc <= 0`
    /// - [`CapvalError::NoProjectionYears`] if `inputs.years` is empty
    /// - [`CapvalError::InvalidInput`] if input validation is enabled and fails,
    ///   or the cash flows overflow to a non-finite NPV
    pub fn compute(&self, inputs: &ValuationInputs) -> Result<ValuationResult> {
        if self.config.validate_inputs {
            inputs.validate()?;
        }

        let cost_of_equity = capm_cost_of_equity(
            inputs.risk_free_rate,
            inputs.beta,
            inputs.equity_risk_premium,
        );
        let cost_of_debt = after_tax_cost_of_debt(inputs.pre_tax_cost_of_debt, inputs.tax_rate);
        let wacc = wacc(
            inputs.equity_market_value,
            inputs.debt_market_value,
            cost_of_equity,
            cost_of_debt,
        )?;
        debug!(cost_of_equity, cost_of_debt, wacc, "derived discount rates");

        if wacc.is_nan() || 1.0 + wacc <= 0.0 {
            return Err(CapvalError::InvalidDiscountRate(wacc));
        }

        if inputs.years.is_empty() {
            return Err(CapvalError::NoProjectionYears);
        }

        let fcff_per_year = fcff_series(&inputs.years);
        let npv = net_present_value(inputs.initial_investment, &fcff_per_year, wacc);
        if !npv.is_finite() {
            return Err(CapvalError::InvalidInput(format!(
                "net present value is not finite ({npv})"
            )));
        }
        let equity_value = npv - inputs.debt_market_value;
        let price_per_share = price_per_share(equity_value, inputs.number_of_outstanding_shares);
        debug!(
            years = fcff_per_year.len(),
            npv, equity_value, price_per_share, "discounted cash flows"
        );

        Ok(ValuationResult {
            cost_of_equity,
            cost_of_debt,
            wacc,
            fcff_per_year,
            npv,
            equity_value,
            price_per_share,
        })
    }
}

/// Compute with the default engine configuration.
///
/// # Errors
///
/// See [`ValuationEngine::compute`].
pub fn compute(inputs: &ValuationInputs) -> Result<ValuationResult> {
    ValuationEngine::default().compute(inputs)
}

/// Equity value per share.
///
/// With no shares outstanding the price is defined as 0 rather than an error,
/// so a degenerate share count still yields a complete result.
pub fn price_per_share(equity_value: f64, outstanding_shares: u64) -> f64 {
    if outstanding_shares == 0 {
        warn!("no outstanding shares, price per share reported as 0");
        return 0.0;
    }
    equity_value / outstanding_shares as f64
}
