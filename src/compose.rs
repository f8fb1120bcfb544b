//! Calendar coordinates → micro-pulses, pulses and wall-clock time.
//!
//! Used for jump-to-day navigation and for stamping notes at day granularity
//! without going back through wall-clock time.

use crate::consts::{DAYS_PER_MONTH, DAYS_PER_YEAR, MICRO_PER_PULSE, MICRO_PER_STEP};
use crate::epoch::epoch_ms_from_micro_pulses;
use crate::types::{Beat, DayLength, DayOfMonth, Month, Step};
use crate::MicroPulses;

/// Micro-pulses at which day `day_index` begins.
pub fn start_of_day_micro_pulses(day_index: i64) -> MicroPulses {
    start_of_day_micro_pulses_with(day_index, DayLength::Continuous)
}

/// [`start_of_day_micro_pulses`] against an explicit day length.
pub fn start_of_day_micro_pulses_with(day_index: i64, day_length: DayLength) -> MicroPulses {
    MicroPulses::new(i128::from(day_index) * day_length.micro_per_day())
}

/// Whole pulse at which day `day_index` begins (floor of the exact start).
pub fn start_of_day_pulse(day_index: i64) -> i128 {
    start_of_day_micro_pulses(day_index).get().div_euclid(MICRO_PER_PULSE)
}

/// Milliseconds since the Unix epoch at which day `day_index` begins.
pub fn start_of_day_epoch_ms(day_index: i64) -> f64 {
    epoch_ms_from_micro_pulses(start_of_day_micro_pulses(day_index))
}

/// Day index of a calendar date. `year` counts from genesis and may be negative.
pub fn day_index_from_calendar(year: i64, month: Month, day_of_month: DayOfMonth) -> i64 {
    year.saturating_mul(i64::from(DAYS_PER_YEAR))
        .saturating_add(i64::from(month.get() - 1) * i64::from(DAYS_PER_MONTH))
        .saturating_add(i64::from(day_of_month.get() - 1))
}

/// Micro-pulses at the start of `step` within `beat` of day `day_index`.
pub fn micro_pulses_at(day_index: i64, beat: Beat, step: Step) -> MicroPulses {
    micro_pulses_at_with(day_index, beat, step, DayLength::Continuous)
}

/// [`micro_pulses_at`] against an explicit day length.
pub fn micro_pulses_at_with(day_index: i64, beat: Beat, step: Step, day_length: DayLength) -> MicroPulses {
    let day_start = start_of_day_micro_pulses_with(day_index, day_length).get();
    let into_day = i128::from(beat.get()) * day_length.micro_per_beat() + i128::from(step.get()) * MICRO_PER_STEP;
    MicroPulses::new(day_start + into_day)
}
