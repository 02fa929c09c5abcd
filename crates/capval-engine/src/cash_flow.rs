//! Free cash flow to firm.

use capval_types::YearInputs;

/// FCFF for one year:
/// `operating_income - taxes + depreciation_amortization - capital_expenditures - change_in_working_capital`.
///
/// The result is not clamped; heavy reinvestment gives a negative FCFF.
pub fn fcff(year: &YearInputs) -> f64 {
    year.operating_income - year.taxes + year.depreciation_amortization
        - year.capital_expenditures
        - year.change_in_working_capital
}

/// FCFF for every year, in input order.
pub fn fcff_series(years: &[YearInputs]) -> Vec<f64> {
    years.iter().map(fcff).collect()
}
