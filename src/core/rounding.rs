use rust_decimal::Decimal;

/// Decimal scale for money amounts (centavos)
pub const MONEY_SCALE: u32 = 2;

/// Decimal scale for percentage figures shown on report screens
pub const PERCENT_SCALE: u32 = 1;

/// Rounds a money amount to currency precision
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_SCALE)
}

/// Rounds a percentage to report precision (one decimal place)
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp(PERCENT_SCALE)
}

/// Share of `part` in `total` as a percentage, rounded to report precision.
/// A zero or negative total yields 0 rather than a division error.
pub fn percent_of(part: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_percent(part / total * Decimal::ONE_HUNDRED)
}
