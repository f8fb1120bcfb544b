//! Integer helpers shared by the decomposer, composer and constants table.
//!
//! All division here is Euclidean: for a positive divisor the remainder is
//! always in `[0, divisor)`, including for negative dividends.

/// Divides `numerator` by a positive `divisor`, rounding the exact quotient to
/// the nearest integer with ties going to the even neighbour.
pub const fn round_div_ties_even(numerator: i128, divisor: i128) -> i128 {
    debug_assert!(divisor > 0);
    let quotient = numerator.div_euclid(divisor);
    let twice_remainder = numerator.rem_euclid(divisor) * 2;
    if twice_remainder > divisor || (twice_remainder == divisor && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}

/// Floor division by a positive divisor, saturated into `i64`.
pub(crate) fn floor_div_i64(numerator: i128, divisor: i128) -> i64 {
    saturate_i64(numerator.div_euclid(divisor))
}

/// Narrows to `i64`, pinning out-of-range values to the nearest bound.
pub(crate) fn saturate_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or_else(|_| {
        tracing::debug!(value = %value, "saturating calendar index to i64 range");
        if value < 0 { i64::MIN } else { i64::MAX }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncating_remainder_is_not_euclidean() {
        // The bug this crate exists to avoid: `%` keeps the dividend's sign.
        assert_eq!(-1_i128 % 6, -1);
        assert_eq!((-1_i128).rem_euclid(6), 5);
        assert_eq!(-1_i128 / 42, 0);
        assert_eq!((-1_i128).div_euclid(42), -1);
    }

    #[test]
    fn test_round_div_ties_even_cases() {
        struct TestCase {
            numerator: i128,
            divisor:   i128,
            expected:  i128,
        }

        let cases = [
            TestCase { numerator: 5, divisor: 2, expected: 2 },
            TestCase { numerator: 7, divisor: 2, expected: 4 },
            TestCase { numerator: -5, divisor: 2, expected: -2 },
            TestCase { numerator: -7, divisor: 2, expected: -4 },
            TestCase { numerator: 10, divisor: 4, expected: 2 },
            TestCase { numerator: 11, divisor: 4, expected: 3 },
            TestCase { numerator: 9, divisor: 4, expected: 2 },
            TestCase { numerator: 0, divisor: 36, expected: 0 },
            TestCase { numerator: 17_491_270_439, divisor: 36, expected: 485_868_623 },
        ];

        for case in &cases {
            assert_eq!(
                round_div_ties_even(case.numerator, case.divisor),
                case.expected,
                "{} / {}",
                case.numerator,
                case.divisor
            );
        }
    }

    #[test]
    fn test_floor_div_i64_negative() {
        assert_eq!(floor_div_i64(-1, 336), -1);
        assert_eq!(floor_div_i64(-336, 336), -1);
        assert_eq!(floor_div_i64(-337, 336), -2);
        assert_eq!(floor_div_i64(335, 336), 0);
    }

    #[test]
    fn test_saturate_i64() {
        assert_eq!(saturate_i64(42), 42);
        assert_eq!(saturate_i64(i128::MAX), i64::MAX);
        assert_eq!(saturate_i64(i128::MIN), i64::MIN);
    }
}
