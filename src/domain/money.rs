use rust_decimal::Decimal;

/// Maximum number of digits allowed after the decimal point in an amount.
pub const MAX_AMOUNT_SCALE: u32 = 2;

/// Number of digits after the decimal point in the shortest decimal
/// representation of `value`, ignoring trailing zeros.
/// Example: 50.5 -> 1, 50.55 -> 2, 100.0 -> 0, 0.1 + 0.2 -> 17
pub fn scale_of(value: f64) -> u32 {
    // `Display` for f64 never uses exponent notation and yields the
    // shortest string that parses back to the same value.
    let repr = value.to_string();
    match repr.split_once('.') {
        Some((_, fraction)) => fraction.trim_end_matches('0').len() as u32,
        None => 0,
    }
}

/// Returns true if `amount` is finite, strictly positive and has at most
/// two decimal places.
pub fn is_amount_valid(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0 && scale_of(amount) <= MAX_AMOUNT_SCALE
}

/// Add two amounts using their exact decimal values.
/// Example: 0.1 + 0.2 -> 0.3 (not 0.30000000000000004)
pub fn add_exact(lhs: f64, rhs: f64) -> f64 {
    combine(lhs, rhs, Decimal::checked_add, |a, b| a + b)
}

/// Subtract two amounts using their exact decimal values.
pub fn sub_exact(lhs: f64, rhs: f64) -> f64 {
    combine(lhs, rhs, Decimal::checked_sub, |a, b| a - b)
}

/// Format an amount with two decimals.
/// Example: 50.0 -> "50.00", 12.5 -> "12.50"
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

fn combine(
    lhs: f64,
    rhs: f64,
    exact: fn(Decimal, Decimal) -> Option<Decimal>,
    approximate: fn(f64, f64) -> f64,
) -> f64 {
    // Values beyond Decimal's range are integral, so plain f64 arithmetic
    // loses nothing a cent-precision ledger could observe.
    to_decimal(lhs)
        .zip(to_decimal(rhs))
        .and_then(|(l, r)| exact(l, r))
        .and_then(from_decimal)
        .unwrap_or_else(|| approximate(lhs, rhs))
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str_exact(&value.to_string()).ok()
}

fn from_decimal(value: Decimal) -> Option<f64> {
    value.normalize().to_string().parse().ok()
}
