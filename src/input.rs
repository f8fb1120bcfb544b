//! Guards for numbers arriving from loosely-typed sources (decoded tokens,
//! query strings, JSON payloads) before they reach the engine.

use crate::{CalendarError, MAX_SAFE_INTEGER};

/// Returns `value` if it is finite, otherwise `0.0`.
///
/// Engine entry points call this on every floating-point input so that a
/// `NaN` or infinity becomes the genesis-relative default instead of a panic.
pub fn finite_or_zero(value: f64, field: &'static str) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(field, ?value, "non-finite input neutralized to 0");
        0.0
    }
}

/// Strict variant of [`finite_or_zero`] for callers that prefer rejection.
///
/// # Errors
/// Returns `CalendarError::NonFinite` if `value` is `NaN` or infinite.
pub fn require_finite(value: f64, field: &'static str) -> Result<f64, CalendarError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalendarError::NonFinite { field })
    }
}

/// Clamps an exact integer into the range a double represents without loss.
///
/// Lossy by construction: values beyond `±(2^53 - 1)` are pinned to the bound.
pub fn saturate_to_safe_integer(value: i128) -> i64 {
    let bound = i128::from(MAX_SAFE_INTEGER);
    if value > bound || value < -bound {
        tracing::debug!(value = %value, "saturating to safe integer range");
    }
    value.clamp(-bound, bound) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(12.5, "pulse"), 12.5);
        assert_eq!(finite_or_zero(-3.0, "pulse"), -3.0);
        assert_eq!(finite_or_zero(f64::NAN, "pulse"), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY, "pulse"), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY, "pulse"), 0.0);
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite(1.0, "ms"), Ok(1.0));

        let err = require_finite(f64::NAN, "ms").unwrap_err();
        assert_eq!(err, CalendarError::NonFinite { field: "ms" });
        assert!(err.to_string().contains("ms"));
    }

    #[test]
    fn test_saturate_to_safe_integer() {
        assert_eq!(saturate_to_safe_integer(0), 0);
        assert_eq!(saturate_to_safe_integer(-17), -17);
        assert_eq!(saturate_to_safe_integer(i128::from(MAX_SAFE_INTEGER)), MAX_SAFE_INTEGER);
        assert_eq!(saturate_to_safe_integer(i128::MAX), MAX_SAFE_INTEGER);
        assert_eq!(saturate_to_safe_integer(i128::MIN), -MAX_SAFE_INTEGER);
    }
}
