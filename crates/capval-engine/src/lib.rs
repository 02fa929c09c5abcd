//! Valuation engine for capval.
//!
//! This crate turns a [`ValuationInputs`](capval_types::ValuationInputs) bundle
//! into a [`ValuationResult`](capval_types::ValuationResult):
//! - Cost of equity via CAPM and after-tax cost of debt
//! - WACC weighted by market values
//! - Free cash flow to firm per projection year
//! - NPV, equity value and price per share
//!
//! # Example
//!
//! ```rust,ignore
//! use capval_engine::{EngineConfig, ValuationEngine};
//!
//! let engine = ValuationEngine::new(EngineConfig::default());
//! let result = engine.compute(&inputs)?;
//! println!("WACC: {:.4}", result.wacc);
//! ```

pub mod cash_flow;
pub mod discount;
pub mod engine;
pub mod rates;

// Re-export main types
pub use cash_flow::{fcff, fcff_series};
pub use discount::{discount_factor, net_present_value, present_values};
pub use engine::{EngineConfig, ValuationEngine, compute, price_per_share};
pub use rates::{CapitalWeights, after_tax_cost_of_debt, capm_cost_of_equity, wacc};
