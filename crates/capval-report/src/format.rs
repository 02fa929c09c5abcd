//! Display formatting for rates and money.

/// Format a decimal rate as a percentage with two decimals: `0.0525` -> `"5.25%"`.
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Format an amount with thousands separators and two decimals.
///
/// The sign goes before the currency symbol: `-1234.5` -> `"-$1,234.50"`.
/// Amounts that round to zero never carry a sign.
///
/// # Example
///
/// ```rust
/// use capval_report::format_currency;
///
/// assert_eq!(format_currency(1_234_567.891, "$"), "$1,234,567.89");
/// assert_eq!(format_currency(-70_000.0, "$"), "-$70,000.00");
/// ```
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{symbol}{amount}");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    format!("{sign}{symbol}{}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
