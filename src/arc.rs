//! Display-only lookups: beat → arc, arc → chakra, and the two chakra-day policies.
//!
//! Two incompatible chakra-day derivations exist among consumers, so both are
//! exported under their own names and neither is treated as the default.

use crate::consts::{ARC_NAMES, ARCS_PER_DAY, BEATS_PER_ARC, CHAKRA_NAMES, DAYS_PER_CHAKRA_BAND};
use crate::prelude::*;
use crate::types::{DayOfMonth, Weekday};
use serde::{Deserialize, Serialize};

/// Six-beat grouping of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Arc {
    Ignite,
    Integrate,
    Harmonize,
    Reflekt,
    Purify,
    Dream,
}

impl Arc {
    pub const ALL: [Self; ARCS_PER_DAY as usize] = [
        Self::Ignite,
        Self::Integrate,
        Self::Harmonize,
        Self::Reflekt,
        Self::Purify,
        Self::Dream,
    ];

    pub const fn name(self) -> &'static str {
        ARC_NAMES[self as usize]
    }
}

/// The seven chakras, root upward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Chakra {
    Root,
    Sacral,
    #[display(fmt = "Solar Plexus")]
    SolarPlexus,
    Heart,
    Throat,
    #[display(fmt = "Third Eye")]
    ThirdEye,
    Crown,
}

impl Chakra {
    pub const ALL: [Self; 7] = [
        Self::Root,
        Self::Sacral,
        Self::SolarPlexus,
        Self::Heart,
        Self::Throat,
        Self::ThirdEye,
        Self::Crown,
    ];

    pub const fn name(self) -> &'static str {
        CHAKRA_NAMES[self as usize]
    }
}

/// Arc containing `beat`. Out-of-range beats pin to the last arc.
pub fn arc_from_beat(beat: u8) -> Arc {
    let index = (beat / BEATS_PER_ARC).min(ARCS_PER_DAY - 1);
    Arc::ALL[index as usize]
}

/// Chakra associated with an arc. Crown has no arc.
pub const fn arc_to_chakra(arc: Arc) -> Chakra {
    match arc {
        Arc::Ignite => Chakra::Root,
        Arc::Integrate => Chakra::Sacral,
        Arc::Harmonize => Chakra::SolarPlexus,
        Arc::Reflekt => Chakra::Heart,
        Arc::Purify => Chakra::Throat,
        Arc::Dream => Chakra::ThirdEye,
    }
}

/// Chakra-day from the day of month: 42 days in seven bands of six, Root first.
pub fn chakra_day_by_day_of_month(day_of_month: DayOfMonth) -> Chakra {
    let band = (day_of_month.get() - 1) / DAYS_PER_CHAKRA_BAND;
    Chakra::ALL[usize::from(band).min(Chakra::ALL.len() - 1)]
}

/// Chakra-day from the weekday. Six days cover seven chakras, so Third Eye
/// is never produced: the last weekday maps to Crown.
pub const fn chakra_day_by_weekday(weekday: Weekday) -> Chakra {
    match weekday {
        Weekday::Solhara => Chakra::Root,
        Weekday::Aquaris => Chakra::Sacral,
        Weekday::Flamora => Chakra::SolarPlexus,
        Weekday::Verdari => Chakra::Heart,
        Weekday::Sonari => Chakra::Throat,
        Weekday::Kaelith => Chakra::Crown,
    }
}
