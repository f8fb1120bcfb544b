use crate::math::round_div_ties_even;

/// Genesis anchor: 2024-05-10T06:45:41.888Z in milliseconds since the Unix epoch
pub const GENESIS_MS: i64 = 1_715_323_541_888;

/// Duration of one pulse (breath) in seconds, `3 + √5`.
/// This is the exact double produced by `3.0 + 5f64.sqrt()`.
pub const BREATH_SECONDS: f64 = 5.236_067_977_499_79;

/// Breath length rounded to whole milliseconds. Display and scheduling only.
pub const BREATH_MS_ROUNDED: u64 = 5236;

/// Micro-pulses per pulse
pub const MICRO_PER_PULSE: i128 = 1_000_000;
/// Same scale as a double, for the quantizer
pub(crate) const MICRO_PER_PULSE_F64: f64 = 1_000_000.0;

/// Continuous day length in pulses
pub const PULSES_PER_DAY_CONTINUOUS: f64 = 17_491.270_421;
/// Continuous day length in micro-pulses, rounded once
pub const MICRO_PER_DAY: i128 = 17_491_270_421;

/// Legacy grid day length in pulses (`36 × 44 × 11`)
pub const GRID_PULSES_PER_DAY: i128 = 17_424;
/// Legacy grid day length in micro-pulses
pub const GRID_MICRO_PER_DAY: i128 = GRID_PULSES_PER_DAY * MICRO_PER_PULSE;

/// Beats in one day
pub const BEATS_PER_DAY: u8 = 36;
/// Steps in one beat
pub const STEPS_PER_BEAT: u8 = 44;
/// Pulses in one step
pub const PULSES_PER_STEP: i128 = 11;
/// Micro-pulses in one step
pub const MICRO_PER_STEP: i128 = PULSES_PER_STEP * MICRO_PER_PULSE;

/// Micro-pulses in one beat of the continuous day
pub const MICRO_PER_BEAT: i128 = micro_per_beat_for(MICRO_PER_DAY);
/// Micro-pulses in one beat of the grid day
pub const GRID_MICRO_PER_BEAT: i128 = micro_per_beat_for(GRID_MICRO_PER_DAY);

/// Days in one week
pub const DAYS_PER_WEEK: u8 = 6;
/// Days in one month
pub const DAYS_PER_MONTH: u8 = 42;
/// Months in one year
pub const MONTHS_PER_YEAR: u8 = 8;
/// Days in one year
pub const DAYS_PER_YEAR: u16 = DAYS_PER_MONTH as u16 * MONTHS_PER_YEAR as u16;

/// Beats grouped under one arc
pub const BEATS_PER_ARC: u8 = 6;
/// Arcs in one day
pub const ARCS_PER_DAY: u8 = BEATS_PER_DAY / BEATS_PER_ARC;
/// Days per chakra band when a month is split into seven bands
pub const DAYS_PER_CHAKRA_BAND: u8 = 6;

/// Largest integer a double holds exactly (`2^53 - 1`)
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Weekday names, indexed by `day_index mod 6`
pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK as usize] =
    ["Solhara", "Aquaris", "Flamora", "Verdari", "Sonari", "Kaelith"];

/// Month names (index 0 is month 1)
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR as usize] = [
    "Aethon", "Virelai", "Solari", "Amarin", "Kaelus", "Umbriel", "Noctura", "Liora",
];

/// Arc names, six beats each
pub const ARC_NAMES: [&str; ARCS_PER_DAY as usize] =
    ["Ignite", "Integrate", "Harmonize", "Reflekt", "Purify", "Dream"];

/// Chakra names, root first
pub const CHAKRA_NAMES: [&str; 7] =
    ["Root", "Sacral", "Solar Plexus", "Heart", "Throat", "Third Eye", "Crown"];

/// `round_ties_even((micro_per_day + 18) / 36)`
const fn micro_per_beat_for(micro_per_day: i128) -> i128 {
    round_div_ties_even(micro_per_day + 18, BEATS_PER_DAY as i128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breath_seconds_matches_runtime_sqrt() {
        assert_eq!(BREATH_SECONDS.to_bits(), (3.0 + 5f64.sqrt()).to_bits());
    }

    #[test]
    fn test_breath_ms_rounded() {
        assert_eq!((BREATH_SECONDS * 1000.0).round() as u64, BREATH_MS_ROUNDED);
    }

    #[test]
    fn test_micro_per_day_is_continuous_constant() {
        assert_eq!(
            (PULSES_PER_DAY_CONTINUOUS * MICRO_PER_PULSE_F64).round() as i128,
            MICRO_PER_DAY
        );
    }

    #[test]
    fn test_derived_beat_lengths() {
        assert_eq!(MICRO_PER_BEAT, 485_868_623);
        // grid day hits an exact .5 tie and stays on the even value
        assert_eq!(GRID_MICRO_PER_BEAT, 484_000_000);
    }

    #[test]
    fn test_last_beat_never_overflows_day() {
        assert!(MICRO_PER_BEAT * i128::from(BEATS_PER_DAY) > MICRO_PER_DAY);
        assert!(MICRO_PER_BEAT * i128::from(BEATS_PER_DAY - 1) < MICRO_PER_DAY);
    }

    #[test]
    fn test_calendar_shape() {
        assert_eq!(DAYS_PER_YEAR, 336);
        assert_eq!(ARCS_PER_DAY, 6);
        assert_eq!(GRID_PULSES_PER_DAY, 36 * 44 * 11);
        assert_eq!(DAYS_PER_MONTH / DAYS_PER_CHAKRA_BAND, 7);
        assert_eq!(MAX_SAFE_INTEGER, 9_007_199_254_740_991);
    }
}
