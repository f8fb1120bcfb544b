//! Pulse ⇄ wall-clock milliseconds.
//!
//! These conversions stay in double precision end to end. Callers must not
//! round a fractional pulse before passing it in.

use crate::consts::{BREATH_SECONDS, GENESIS_MS, MICRO_PER_PULSE_F64};
use crate::input::finite_or_zero;
use crate::MicroPulses;

const BOUNDARY_RETRIES: u32 = 2;

/// Milliseconds since the Unix epoch at which `pulse` occurs.
///
/// Evaluated as `GENESIS_MS + pulse × BREATH_SECONDS × 1000` in that order.
/// A non-finite `pulse` is treated as 0 (genesis).
pub fn epoch_ms_from_pulse(pulse: f64) -> f64 {
    let pulse = finite_or_zero(pulse, "pulse");
    GENESIS_MS as f64 + pulse * BREATH_SECONDS * 1000.0
}

/// Milliseconds since the Unix epoch of an exact micro-pulse count.
pub fn epoch_ms_from_micro_pulses(micro: MicroPulses) -> f64 {
    epoch_ms_from_pulse(micro.get() as f64 / MICRO_PER_PULSE_F64)
}

/// Continuous (fractional) pulse count at `ms`. A non-finite `ms` is treated as 0.
pub fn pulse_from_epoch_ms(ms: f64) -> f64 {
    let ms = finite_or_zero(ms, "ms");
    (ms - GENESIS_MS as f64) / 1000.0 / BREATH_SECONDS
}

/// Instant of the first whole-pulse boundary strictly after `now_ms`.
///
/// Schedulers sleep until this instant; the engine itself keeps no timers.
/// Once pulses are too coarse for doubles to tell neighbours apart, this
/// falls back to the next representable instant after `now_ms`, and it
/// saturates at `f64::MAX` instead of overflowing to infinity.
pub fn next_pulse_boundary_ms(now_ms: f64) -> f64 {
    let now_ms = finite_or_zero(now_ms, "now_ms");
    let mut pulse = pulse_from_epoch_ms(now_ms).floor() + 1.0;
    // float noise can land the boundary on or before `now_ms`
    for _ in 0..=BOUNDARY_RETRIES {
        let boundary = epoch_ms_from_pulse(pulse);
        if boundary > now_ms {
            return boundary.min(f64::MAX);
        }
        let next = pulse + 1.0;
        if next == pulse {
            break;
        }
        pulse = next;
    }
    tracing::debug!(now_ms, "pulse boundaries no longer resolvable, stepping one ulp");
    now_ms.next_up().min(f64::MAX)
}
