use rust_decimal::Decimal;

use crate::core::rounding::round_percent;

/// Period-over-period variance calculator.
///
/// Total over all decimal inputs: a zero prior value maps to +100% when the
/// current value is positive and 0% otherwise, so callers never divide by
/// zero.
pub struct GrowthCalculator;

impl GrowthCalculator {
    /// Percentage change of `current` against `prior`, one decimal place.
    pub fn variance(current: Decimal, prior: Decimal) -> Decimal {
        if prior.is_zero() {
            return if current > Decimal::ZERO {
                Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
        }

        round_percent((current - prior) / prior * Decimal::ONE_HUNDRED)
    }
}
