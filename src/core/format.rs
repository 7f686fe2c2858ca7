/// Formats an amount with exactly two decimals, e.g. `10.00`.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Formats a quantity or unit price in its shortest form: `2`, `5`, `2.5`.
pub fn format_quantity(value: f64) -> String {
    format!("{}", value)
}

/// Rounds to whole cents. Amounts too large to scale are returned unchanged.
pub fn round_cents(amount: f64) -> f64 {
    let cents = amount * 100.0;
    if !cents.is_finite() {
        return amount;
    }
    cents.round() / 100.0
}

/// Parses a number, substituting `fallback` when the result is not finite.
pub fn parse_or(text: &str, fallback: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}
