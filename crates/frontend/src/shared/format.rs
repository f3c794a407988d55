//! Number formatting for money and rates (en-NG conventions)

/// Inserts a comma every three digits of the integer part.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// ```
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats an amount as Naira with at most two decimals, dropping trailing
/// zeros in the fraction.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_ngn(1234567.0), "₦1,234,567");
/// assert_eq!(format_ngn(1234.5), "₦1,234.5");
/// ```
pub fn format_ngn(amount: f64) -> String {
    if !amount.is_finite() {
        return "₦0".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    let grouped = group_thousands(int_part);
    if frac_part.is_empty() {
        format!("{}₦{}", sign, grouped)
    } else {
        format!("{}₦{}.{}", sign, grouped, frac_part)
    }
}

/// `0.15` -> `"15%"`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}
