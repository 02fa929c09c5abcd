//! Discount-rate derivation.
//!
//! - Cost of equity from the Capital Asset Pricing Model
//! - After-tax cost of debt
//! - WACC blended by market-value weights

use capval_types::{CapvalError, Result};
use serde::{Deserialize, Serialize};

/// CAPM cost of equity: `risk_free_rate + beta * equity_risk_premium`.
///
/// # Example
///
/// ```rust
/// use capval_engine::capm_cost_of_equity;
///
/// let ke = capm_cost_of_equity(0.01, 1.0, 0.06);
/// assert!((ke - 0.07).abs() < 1e-12);
/// ```
pub fn capm_cost_of_equity(risk_free_rate: f64, beta: f64, equity_risk_premium: f64) -> f64 {
    risk_free_rate + beta * equity_risk_premium
}

/// After-tax cost of debt: `pre_tax_cost_of_debt * (1 - tax_rate)`.
pub fn after_tax_cost_of_debt(pre_tax_cost_of_debt: f64, tax_rate: f64) -> f64 {
    pre_tax_cost_of_debt * (1.0 - tax_rate)
}

/// Market-value weights of a capital structure.
///
/// The two weights always sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalWeights {
    /// Equity share of total capital
    pub equity: f64,
    /// Debt share of total capital
    pub debt: f64,
}

impl CapitalWeights {
    /// Compute weights from market values.
    ///
    /// # Errors
    ///
    /// Returns [`CapvalError::ZeroCapitalStructure`] when the two values sum to zero.
    pub fn from_market_values(equity_market_value: f64, debt_market_value: f64) -> Result<Self> {
        let total_value = equity_market_value + debt_market_value;
        if total_value == 0.0 {
            return Err(CapvalError::ZeroCapitalStructure);
        }

        Ok(Self {
            equity: equity_market_value / total_value,
            debt: debt_market_value / total_value,
        })
    }

    /// Blend a cost of equity and a cost of debt by these weights.
    pub fn blend(&self, cost_of_equity: f64, cost_of_debt: f64) -> f64 {
        self.equity * cost_of_equity + self.debt * cost_of_debt
    }
}

/// Weighted average cost of capital.
///
/// # Errors
///
/// Returns [`CapvalError::ZeroCapitalStructure`] when
/// `equity_market_value + debt_market_value == 0`.
pub fn wacc(
    equity_market_value: f64,
    debt_market_value: f64,
    cost_of_equity: f64,
    cost_of_debt: f64,
) -> Result<f64> {
    let weights = CapitalWeights::from_market_values(equity_market_value, debt_market_value)?;
    Ok(weights.blend(cost_of_equity, cost_of_debt))
}
