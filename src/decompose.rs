//! Micro-pulses → calendar coordinates.

use crate::arc::{Arc, Chakra, arc_from_beat, chakra_day_by_day_of_month, chakra_day_by_weekday};
use crate::compose::{start_of_day_micro_pulses, start_of_day_micro_pulses_with};
use crate::consts::{
    BEATS_PER_DAY, DAYS_PER_MONTH, DAYS_PER_YEAR, MICRO_PER_STEP, MONTHS_PER_YEAR, STEPS_PER_BEAT,
};
use crate::input::saturate_to_safe_integer;
use crate::math::{floor_div_i64, saturate_i64};
use crate::prelude::*;
use crate::quantize::micro_pulses_since_genesis;
use crate::types::{Beat, BeatStep, DayLength, DayOfMonth, Month, Step, Weekday};
use crate::{CalendarError, MicroPulses};
use serde::{Deserialize, Serialize, Serializer};

/// A fully decomposed instant.
///
/// In JSON, `dayIndex` and `year` are plain numbers saturated to
/// `±MAX_SAFE_INTEGER`. Reading JSON back checks every day-level field
/// against `dayIndex`, so a saturated payload does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(
    fmt = "{}:{:02} {} D{}/M{} Y{}",
    "beat.get()",
    "step.get()",
    weekday,
    "day_of_month.get()",
    "month.get()",
    year
)]
#[serde(rename_all = "camelCase", try_from = "RawMoment")]
pub struct CalendarMoment {
    /// Days since genesis; negative before it
    #[serde(serialize_with = "serialize_safe_integer")]
    pub day_index:    i64,
    pub beat:         Beat,
    pub step:         Step,
    pub weekday:      Weekday,
    pub day_of_month: DayOfMonth,
    pub month:        Month,
    /// Years since genesis; negative before it
    #[serde(serialize_with = "serialize_safe_integer")]
    pub year:         i64,
}

/// Wire shape of [`CalendarMoment`] before its fields are cross-checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMoment {
    day_index:    i64,
    beat:         Beat,
    step:         Step,
    weekday:      Weekday,
    day_of_month: DayOfMonth,
    month:        Month,
    year:         i64,
}

impl TryFrom<RawMoment> for CalendarMoment {
    type Error = CalendarError;

    fn try_from(raw: RawMoment) -> Result<Self, Self::Error> {
        // day-level fields depend only on the day index, whatever the day length
        let day = decompose(start_of_day_micro_pulses(raw.day_index));
        let consistent = day.day_index == raw.day_index
            && day.weekday == raw.weekday
            && day.day_of_month == raw.day_of_month
            && day.month == raw.month
            && day.year == raw.year;
        if !consistent {
            return Err(CalendarError::InconsistentMoment(raw.day_index));
        }

        Ok(Self {
            beat: raw.beat,
            step: raw.step,
            ..day
        })
    }
}

fn serialize_safe_integer<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(saturate_to_safe_integer(i128::from(*value)))
}

impl CalendarMoment {
    /// Arc containing this moment's beat
    pub fn arc(&self) -> Arc {
        arc_from_beat(self.beat.get())
    }

    /// Beat and step as a `B:SS` label pair
    pub const fn beat_step(&self) -> BeatStep {
        BeatStep {
            beat: self.beat,
            step: self.step,
        }
    }

    /// Chakra-day under the day-of-month banding policy
    pub fn chakra_by_day_of_month(&self) -> Chakra {
        chakra_day_by_day_of_month(self.day_of_month)
    }

    /// Chakra-day under the weekday policy
    pub fn chakra_by_weekday(&self) -> Chakra {
        chakra_day_by_weekday(self.weekday)
    }

    /// Returns the month's display name
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Zero-based day within the year, `0..DAYS_PER_YEAR`
    pub fn day_of_year(&self) -> u16 {
        self.day_index.rem_euclid(i64::from(DAYS_PER_YEAR)) as u16
    }

    /// Micro-pulses at the start of this moment's day (continuous day length)
    pub fn start_micro_pulses(&self) -> MicroPulses {
        start_of_day_micro_pulses_with(self.day_index, DayLength::Continuous)
    }
}

/// Decomposes `micro` using the canonical continuous day length.
pub fn decompose(micro: MicroPulses) -> CalendarMoment {
    decompose_with(micro, DayLength::Continuous)
}

/// Decomposes `micro` against an explicit day length.
pub fn decompose_with(micro: MicroPulses, day_length: DayLength) -> CalendarMoment {
    let micro_per_day = day_length.micro_per_day();
    let micro_per_beat = day_length.micro_per_beat();

    let raw = micro.get();
    let into_day = raw.rem_euclid(micro_per_day);
    let day_index = saturate_i64(raw.div_euclid(micro_per_day));

    // `into_day` is non-negative, so plain division is floor division
    let beat = clamp_unit(into_day / micro_per_beat, BEATS_PER_DAY, "beat");
    let into_beat = into_day - i128::from(beat) * micro_per_beat;
    let step = clamp_unit(into_beat / MICRO_PER_STEP, STEPS_PER_BEAT, "step");

    let day = i128::from(day_index);
    let day_of_month = day.rem_euclid(i128::from(DAYS_PER_MONTH)) as u8;
    let month = day
        .div_euclid(i128::from(DAYS_PER_MONTH))
        .rem_euclid(i128::from(MONTHS_PER_YEAR)) as u8;

    CalendarMoment {
        day_index,
        beat: Beat::from_clamped(beat),
        step: Step::from_clamped(step),
        weekday: Weekday::from_day_index(day_index),
        day_of_month: DayOfMonth::from_offset(day_of_month),
        month: Month::from_offset(month),
        year: floor_div_i64(day, i128::from(DAYS_PER_YEAR)),
    }
}

/// Calendar moment at `ms` milliseconds since the Unix epoch.
pub fn moment_at(ms: i64) -> CalendarMoment {
    decompose(micro_pulses_since_genesis(ms))
}

/// Pins a sub-unit index into `0..count`.
///
/// Only boundary noise may be absorbed here: a raw value outside `[-1, count]`
/// means an upstream constant or formula is wrong.
fn clamp_unit(raw: i128, count: u8, unit: &'static str) -> u8 {
    let count = i128::from(count);
    let tolerated = (-1..=count).contains(&raw);
    if !tolerated {
        tracing::error!(unit, raw = %raw, "calendar sub-unit far outside its range");
    }
    debug_assert!(tolerated, "{unit} index {raw} outside [-1, {count}]");
    raw.clamp(0, count - 1) as u8
}
