//! Decimal helpers for money, quantities and percentages.
//!
//! All comparisons elsewhere in the crate go through [`Decimal`]'s value
//! equality, so `370`, `370.00` and `370.000` are the same amount.

use rust_decimal::{Decimal, RoundingStrategy};

/// Commercial rounding (half away from zero) to `dp` places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with exactly `dp` fractional digits: `fixed(dec!(19), 2) == "19.00"`.
pub fn fixed(value: Decimal, dp: u32) -> String {
    let mut v = round_half_up(value, dp);
    v.rescale(dp);
    if v.is_zero() {
        v.set_sign_positive(true);
    }
    v.to_string()
}

/// Format a percentage: four fractional digits with trailing zeros and a
/// bare decimal point stripped (`19.0000` becomes `19`, `7.5000` becomes `7.5`).
pub fn percent(value: Decimal) -> String {
    let s = fixed(value, 4);
    match s.find('.') {
        Some(_) => s.trim_end_matches('0').trim_end_matches('.').to_string(),
        None => s,
    }
}

/// Sum that stops at the first overflow instead of panicking.
pub fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values.into_iter().try_fold(Decimal::ZERO, Decimal::checked_add)
}

/// Number of significant fractional digits after dropping trailing zeros.
pub fn fraction_digits(value: Decimal) -> u32 {
    value.normalize().scale()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_half_up(dec!(2.345), 2), dec!(2.35));
        assert_eq!(round_half_up(dec!(-2.345), 2), dec!(-2.35));
        assert_eq!(round_half_up(dec!(2.344), 2), dec!(2.34));
    }

    #[test]
    fn fixed_cases() {
        assert_eq!(fixed(dec!(100), 2), "100.00");
        assert_eq!(fixed(dec!(1500.0), 2), "1500.00");
        assert_eq!(fixed(dec!(49.905), 2), "49.91");
        assert_eq!(fixed(dec!(9.9), 4), "9.9000");
        assert_eq!(fixed(dec!(-0.001), 2), "0.00");
        assert_eq!(fixed(dec!(-12.5), 2), "-12.50");
        assert_eq!(fixed(dec!(1), 12), "1.000000000000");
    }

    #[test]
    fn percent_cases() {
        assert_eq!(percent(dec!(19)), "19");
        assert_eq!(percent(dec!(19.00)), "19");
        assert_eq!(percent(dec!(7.5)), "7.5");
        assert_eq!(percent(dec!(0)), "0");
        assert_eq!(percent(dec!(12.34567)), "12.3457");
        assert_eq!(percent(dec!(10)), "10");
    }

    #[test]
    fn fraction_digits_ignore_trailing_zeros() {
        assert_eq!(fraction_digits(dec!(370)), 0);
        assert_eq!(fraction_digits(dec!(370.00)), 0);
        assert_eq!(fraction_digits(dec!(370.000)), 0);
        assert_eq!(fraction_digits(dec!(185.00) * dec!(2.0)), 0);
        assert_eq!(fraction_digits(dec!(0.125)), 3);
        assert_eq!(fraction_digits(dec!(1.10)), 1);
    }

    #[test]
    fn checked_sum_reports_overflow() {
        assert_eq!(checked_sum([dec!(1.5), dec!(2.25)]), Some(dec!(3.75)));
        assert_eq!(checked_sum(Vec::new()), Some(Decimal::ZERO));
        assert_eq!(checked_sum([Decimal::MAX, Decimal::ONE]), None);
        assert_eq!(checked_sum([Decimal::MAX, Decimal::MIN]), Some(Decimal::ZERO));
    }
}
