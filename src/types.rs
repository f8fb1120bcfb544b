use crate::consts::{
    BEATS_PER_DAY, DAYS_PER_MONTH, DAYS_PER_WEEK, GRID_MICRO_PER_BEAT, GRID_MICRO_PER_DAY,
    MICRO_PER_BEAT, MICRO_PER_DAY, MICRO_PER_PULSE, MONTH_NAMES, MONTHS_PER_YEAR, STEPS_PER_BEAT,
    WEEKDAY_NAMES,
};
use crate::input::saturate_to_safe_integer;
use crate::prelude::*;
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// Exact micro-pulse count since genesis. Negative before genesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, From, Into)]
pub struct MicroPulses(i128);

impl MicroPulses {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: i128) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i128 {
        self.0
    }

    /// Micro-pulses at the start of a whole pulse. Saturates on overflow.
    pub const fn from_pulse(pulse: i128) -> Self {
        Self(pulse.saturating_mul(MICRO_PER_PULSE))
    }

    /// Whole pulse containing this instant (floor, so pre-genesis rounds down)
    pub const fn pulse(self) -> i128 {
        self.0.div_euclid(MICRO_PER_PULSE)
    }

    /// Whole pulse as a plain number, saturated to `±(2^53 - 1)`.
    /// Lossy outside that range; use [`MicroPulses::pulse`] for exact arithmetic.
    pub fn pulse_saturating(self) -> i64 {
        saturate_to_safe_integer(self.pulse())
    }
}

impl FromStr for MicroPulses {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }
        trimmed
            .parse::<i128>()
            .map(Self)
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
    }
}

impl Serialize for MicroPulses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MicroPulses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Which day length the decomposer and composer divide by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayLength {
    /// `17491.270421` pulses per day. Canonical.
    #[default]
    Continuous,
    /// Legacy `36 × 44 × 11 = 17424` pulse grid, for reading old grid-stamped data
    Grid,
}

impl DayLength {
    /// Micro-pulses in one day under this policy
    pub const fn micro_per_day(self) -> i128 {
        match self {
            Self::Continuous => MICRO_PER_DAY,
            Self::Grid => GRID_MICRO_PER_DAY,
        }
    }

    /// Micro-pulses in one beat under this policy
    pub const fn micro_per_beat(self) -> i128 {
        match self {
            Self::Continuous => MICRO_PER_BEAT,
            Self::Grid => GRID_MICRO_PER_BEAT,
        }
    }
}

/// A beat of the day, `0..BEATS_PER_DAY` (0..=35)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Beat(u8);

impl Beat {
    /// # Errors
    /// Returns `CalendarError::InvalidBeat` if the value is >= `BEATS_PER_DAY`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        if value >= BEATS_PER_DAY {
            return Err(CalendarError::InvalidBeat(value));
        }
        Ok(Self(value))
    }

    /// Caller guarantees `value < BEATS_PER_DAY`.
    pub(crate) const fn from_clamped(value: u8) -> Self {
        debug_assert!(value < BEATS_PER_DAY);
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Beat {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Beat> for u8 {
    fn from(beat: Beat) -> Self {
        beat.0
    }
}

impl fmt::Display for Beat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A step of the beat, `0..STEPS_PER_BEAT` (0..=43)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Step(u8);

impl Step {
    /// # Errors
    /// Returns `CalendarError::InvalidStep` if the value is >= `STEPS_PER_BEAT`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        if value >= STEPS_PER_BEAT {
            return Err(CalendarError::InvalidStep(value));
        }
        Ok(Self(value))
    }

    pub(crate) const fn from_clamped(value: u8) -> Self {
        debug_assert!(value < STEPS_PER_BEAT);
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Step {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the month, `1..=DAYS_PER_MONTH` (1..=42)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfMonth(NonZeroU8);

impl DayOfMonth {
    /// # Errors
    /// Returns `CalendarError::InvalidDayOfMonth` if the value is 0 or > `DAYS_PER_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidDayOfMonth(value))?;
        if value > DAYS_PER_MONTH {
            return Err(CalendarError::InvalidDayOfMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Builds from a zero-based offset already reduced modulo `DAYS_PER_MONTH`.
    pub(crate) const fn from_offset(offset: u8) -> Self {
        debug_assert!(offset < DAYS_PER_MONTH);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for DayOfMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfMonth> for u8 {
    fn from(day: DayOfMonth) -> Self {
        day.0.get()
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value, `1..=MONTHS_PER_YEAR` (1..=8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MONTHS_PER_YEAR`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MONTHS_PER_YEAR {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn from_offset(offset: u8) -> Self {
        debug_assert!(offset < MONTHS_PER_YEAR);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    pub const fn name(self) -> &'static str {
        MONTH_NAMES[(self.0.get() - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six-day week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Solhara,
    Aquaris,
    Flamora,
    Verdari,
    Sonari,
    Kaelith,
}

impl Weekday {
    pub const ALL: [Self; DAYS_PER_WEEK as usize] = [
        Self::Solhara,
        Self::Aquaris,
        Self::Flamora,
        Self::Verdari,
        Self::Sonari,
        Self::Kaelith,
    ];

    /// Weekday of a day index; genesis day is Solhara.
    pub const fn from_day_index(day_index: i64) -> Self {
        Self::ALL[day_index.rem_euclid(DAYS_PER_WEEK as i64) as usize]
    }

    /// Zero-based position in the week, Solhara = 0
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the weekday's display name
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

/// The conventional `beat:step` label, e.g. `"12:05"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}:{:02}", "beat.get()", "step.get()")]
pub struct BeatStep {
    pub beat: Beat,
    pub step: Step,
}

impl FromStr for BeatStep {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let (beat, step) = trimmed
            .split_once(':')
            .ok_or_else(|| CalendarError::InvalidFormat(format!("Expected beat:step, got {s}")))?;
        let beat = beat
            .trim()
            .parse::<u8>()
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))?;
        let step = step
            .trim()
            .parse::<u8>()
            .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))?;

        Ok(Self {
            beat: Beat::new(beat)?,
            step: Step::new(step)?,
        })
    }
}
