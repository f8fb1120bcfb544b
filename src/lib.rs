//! Deterministic Kairos pulse calendar.
//!
//! Converts an instant (milliseconds since the Unix epoch) into an exact
//! micro-pulse count since genesis, decomposes that count into
//! beat/step/day/month/year, and composes calendar coordinates back into
//! pulses. Every function is pure and total over its numeric inputs.
//!
//! ```
//! use kairos_calendar::{GENESIS_MS, Weekday, moment_at};
//!
//! let moment = moment_at(GENESIS_MS - 1000);
//! assert_eq!(moment.day_index, -1);
//! assert_eq!(moment.weekday, Weekday::Kaelith);
//! ```

mod arc;
mod compose;
mod consts;
mod decompose;
mod epoch;
mod input;
mod math;
mod prelude;
mod quantize;
mod types;

pub use arc::{Arc, Chakra, arc_from_beat, arc_to_chakra, chakra_day_by_day_of_month, chakra_day_by_weekday};
pub use compose::{
    day_index_from_calendar, micro_pulses_at, micro_pulses_at_with, start_of_day_epoch_ms,
    start_of_day_micro_pulses, start_of_day_micro_pulses_with, start_of_day_pulse,
};
pub use consts::*;
pub use decompose::{CalendarMoment, decompose, decompose_with, moment_at};
pub use epoch::{epoch_ms_from_micro_pulses, epoch_ms_from_pulse, next_pulse_boundary_ms, pulse_from_epoch_ms};
pub use input::{finite_or_zero, require_finite, saturate_to_safe_integer};
pub use math::round_div_ties_even;
pub use quantize::{
    micro_pulses_from_ms_f64, micro_pulses_from_pulse, micro_pulses_since_genesis, pulse_at, round_half_even,
};
pub use types::{Beat, BeatStep, DayLength, DayOfMonth, MicroPulses, Month, Step, Weekday};

/// Error type for validated calendar values and boundary guards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid beat: {0} (must be 0-{max})", max = BEATS_PER_DAY - 1)]
    InvalidBeat(u8),

    #[error("Invalid step: {0} (must be 0-{max})", max = STEPS_PER_BEAT - 1)]
    InvalidStep(u8),

    #[error("Invalid day of month: {0} (must be 1-{max})", max = DAYS_PER_MONTH)]
    InvalidDayOfMonth(u8),

    #[error("Invalid month: {0} (must be 1-{max})", max = MONTHS_PER_YEAR)]
    InvalidMonth(u8),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Empty input")]
    EmptyInput,

    /// Day-level fields of a deserialized moment disagree with its day index.
    #[error("Calendar fields do not match day index {0}")]
    InconsistentMoment(i64),

    /// A floating-point input was `NaN` or infinite.
    #[error("Non-finite value for {field}")]
    NonFinite { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CalendarError::InvalidBeat(36).to_string(), "Invalid beat: 36 (must be 0-35)");
        assert_eq!(CalendarError::InvalidStep(44).to_string(), "Invalid step: 44 (must be 0-43)");
        assert_eq!(
            CalendarError::InvalidDayOfMonth(43).to_string(),
            "Invalid day of month: 43 (must be 1-42)"
        );
        assert_eq!(CalendarError::InvalidMonth(9).to_string(), "Invalid month: 9 (must be 1-8)");
        assert_eq!(
            CalendarError::NonFinite { field: "pulse" }.to_string(),
            "Non-finite value for pulse"
        );
        assert_eq!(
            CalendarError::InconsistentMoment(-1).to_string(),
            "Calendar fields do not match day index -1"
        );
    }

    #[test]
    fn test_timestamp_to_labels() {
        // 3 days, 13 beats and 2 steps past genesis, expressed in milliseconds
        let micro = micro_pulses_at(3, Beat::new(13).unwrap(), Step::new(2).unwrap());
        let ms = epoch_ms_from_micro_pulses(micro).ceil() as i64;

        let moment = moment_at(ms);
        assert_eq!(moment.day_index, 3);
        assert_eq!(moment.beat_step().to_string(), "13:02");
        assert_eq!(moment.weekday, Weekday::Verdari);
        assert_eq!(moment.arc(), Arc::Harmonize);
        assert_eq!(arc_to_chakra(moment.arc()), Chakra::SolarPlexus);
        assert_eq!(moment.chakra_by_weekday(), Chakra::Heart);
        assert_eq!(moment.chakra_by_day_of_month(), Chakra::Root);
    }

    #[test]
    fn test_jump_to_day_then_back() {
        for day in [-700, -1, 0, 1, 500] {
            let ms = start_of_day_epoch_ms(day);
            // a millisecond into the day lands inside it
            let moment = moment_at(ms.ceil() as i64 + 1);
            assert_eq!(moment.day_index, day, "day {day}");
            assert_eq!(moment.beat.get(), 0);
        }
    }

    #[test]
    fn test_token_pulse_field() {
        // a pulse decoded from a shared token reproduces the same day everywhere
        let pulse = start_of_day_pulse(10) as f64 + 1.0;
        let micro = micro_pulses_from_pulse(require_finite(pulse, "pulse").unwrap());
        assert_eq!(decompose(micro).day_index, 10);

        assert!(require_finite(f64::NAN, "pulse").is_err());
        assert_eq!(micro_pulses_from_pulse(f64::NAN), MicroPulses::ZERO);
    }
}
