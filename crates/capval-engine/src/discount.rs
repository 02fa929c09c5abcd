//! Discounted cash flow arithmetic.
//!
//! Period `t` is 1-indexed: the first projected cash flow is discounted by one
//! full period, and the initial investment sits undiscounted at t=0.

/// Discount factor `1 / (1 + rate)^t`.
pub fn discount_factor(rate: f64, period: usize) -> f64 {
    1.0 / growth_factor(rate, period)
}

fn growth_factor(rate: f64, period: usize) -> f64 {
    let exponent = i32::try_from(period).unwrap_or(i32::MAX);
    (1.0 + rate).powi(exponent)
}

/// Present value of each cash flow, in input order.
pub fn present_values(cash_flows: &[f64], rate: f64) -> Vec<f64> {
    cash_flows
        .iter()
        .enumerate()
        .map(|(idx, cf)| cf / growth_factor(rate, idx + 1))
        .collect()
}

/// `-initial_investment + sum(cf_t / (1 + rate)^t)` for t = 1..=n.
///
/// # Example
///
/// ```rust
/// use capval_engine::net_present_value;
///
/// let npv = net_present_value(100.0, &[110.0], 0.10);
/// assert!(npv.abs() < 1e-9);
/// ```
pub fn net_present_value(initial_investment: f64, cash_flows: &[f64], rate: f64) -> f64 {
    present_values(cash_flows, rate)
        .into_iter()
        .fold(-initial_investment, |acc, pv| acc + pv)
}
