use rust_decimal::Decimal;

/// Format a decimal amount as a dollar figure with 2 decimal places,
/// sign ahead of the currency symbol: `-42.5` → `"-$42.50"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    if val < Decimal::ZERO {
        format!("-${:.2}", val.abs())
    } else {
        format!("${val:.2}")
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
