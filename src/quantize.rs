//! Milliseconds → exact micro-pulses.
//!
//! The result of [`micro_pulses_since_genesis`] is what gets persisted in
//! shared tokens, so for a given `ms` it must come out bit-identical on every
//! client. Each step below is a single IEEE-754 double operation performed in
//! a fixed order (no fused multiply-add), followed by ties-to-even rounding.

use crate::consts::{BREATH_SECONDS, GENESIS_MS, MICRO_PER_PULSE_F64};
use crate::input::finite_or_zero;
use crate::MicroPulses;

/// Micro-pulses elapsed between genesis and `ms` (milliseconds since the Unix epoch).
///
/// `ms` is taken as a double before subtracting, as double-only clients do,
/// so results agree with them even beyond `MAX_SAFE_INTEGER` milliseconds.
pub fn micro_pulses_since_genesis(ms: i64) -> MicroPulses {
    quantize_delta_ms(ms as f64 - GENESIS_MS as f64)
}

/// Same as [`micro_pulses_since_genesis`] for a loosely-typed millisecond value.
/// A non-finite `ms` is treated as 0.
pub fn micro_pulses_from_ms_f64(ms: f64) -> MicroPulses {
    let ms = finite_or_zero(ms, "ms");
    quantize_delta_ms(ms - GENESIS_MS as f64)
}

/// Micro-pulses for a (possibly fractional) pulse count decoded from a token.
/// A non-finite `pulse` is treated as 0.
pub fn micro_pulses_from_pulse(pulse: f64) -> MicroPulses {
    let pulse = finite_or_zero(pulse, "pulse");
    to_micro_pulses(round_half_even(pulse * MICRO_PER_PULSE_F64))
}

/// Whole pulse containing `ms`.
pub fn pulse_at(ms: i64) -> i128 {
    micro_pulses_since_genesis(ms).pulse()
}

/// Rounds to the nearest integer; exact halves go to the even neighbour.
///
/// `2.5 → 2`, `3.5 → 4`, `-2.5 → -2`.
pub fn round_half_even(value: f64) -> f64 {
    let magnitude = value.abs();
    let whole = magnitude.floor();
    let fraction = magnitude - whole;
    let rounded = if fraction < 0.5 {
        whole
    } else if fraction > 0.5 {
        whole + 1.0
    } else if whole % 2.0 == 0.0 {
        whole
    } else {
        whole + 1.0
    };
    rounded.copysign(value)
}

fn quantize_delta_ms(delta_ms: f64) -> MicroPulses {
    let delta_seconds = delta_ms / 1000.0;
    let pulses = delta_seconds / BREATH_SECONDS;
    let micro = pulses * MICRO_PER_PULSE_F64;
    to_micro_pulses(round_half_even(micro))
}

/// Float-to-int casts saturate at the `i128` bounds; that is the only loss here.
fn to_micro_pulses(rounded: f64) -> MicroPulses {
    MicroPulses::new(rounded as i128)
}
