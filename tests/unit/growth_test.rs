// Property-based tests for the period-over-period variance calculation.
//
// The calculator must be total: any pair of decimal inputs produces a
// value, with the zero-prior convention (+100% when current is positive,
// 0% otherwise) replacing the undefined division.

use comanda::GrowthCalculator;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn variance_is_deterministic(
        current in 0i64..1_000_000_000i64,
        prior in 0i64..1_000_000_000i64
    ) {
        let current = Decimal::from(current);
        let prior = Decimal::from(prior);

        let first = GrowthCalculator::variance(current, prior);
        let second = GrowthCalculator::variance(current, prior);

        prop_assert_eq!(first, second, "variance must be deterministic");
    }

    #[test]
    fn equal_periods_have_zero_variance(value in 0i64..1_000_000_000i64) {
        let value = Decimal::from(value);
        prop_assert_eq!(GrowthCalculator::variance(value, value), Decimal::ZERO);
    }

    #[test]
    fn growth_sign_follows_direction(
        // Bounded so any inequality is at least 0.1% and survives the
        // one-decimal rounding
        current in 1i64..1000i64,
        prior in 1i64..1000i64
    ) {
        let c = Decimal::from(current);
        let p = Decimal::from(prior);
        let variance = GrowthCalculator::variance(c, p);

        if current > prior {
            prop_assert!(variance > Decimal::ZERO, "growth must be positive, got {}", variance);
        } else if current < prior {
            prop_assert!(variance < Decimal::ZERO, "decline must be negative, got {}", variance);
        } else {
            prop_assert_eq!(variance, Decimal::ZERO);
        }
    }

    #[test]
    fn zero_prior_never_divides(current in 0i64..1_000_000_000i64) {
        let variance = GrowthCalculator::variance(Decimal::from(current), Decimal::ZERO);

        if current > 0 {
            prop_assert_eq!(variance, Decimal::ONE_HUNDRED);
        } else {
            prop_assert_eq!(variance, Decimal::ZERO);
        }
    }

    #[test]
    fn decline_is_bounded_at_minus_hundred(
        current in 0i64..1_000_000i64,
        prior in 1i64..1_000_000i64
    ) {
        let variance = GrowthCalculator::variance(Decimal::from(current), Decimal::from(prior));
        prop_assert!(variance >= dec!(-100), "decline below -100%: {}", variance);
    }
}

#[test]
fn test_reference_values() {
    assert_eq!(GrowthCalculator::variance(dec!(0), dec!(0)), dec!(0));
    assert_eq!(GrowthCalculator::variance(dec!(5), dec!(0)), dec!(100));
    assert_eq!(GrowthCalculator::variance(dec!(100), dec!(50)), dec!(100.0));
    assert_eq!(GrowthCalculator::variance(dec!(50), dec!(100)), dec!(-50.0));
}

#[test]
fn test_fractional_result_rounds_to_one_decimal() {
    // 150/145 - 1 = 3.448...%
    assert_eq!(GrowthCalculator::variance(dec!(150), dec!(145)), dec!(3.4));
    // -1/3 = -33.333...%
    assert_eq!(GrowthCalculator::variance(dec!(2), dec!(3)), dec!(-33.3));
}
