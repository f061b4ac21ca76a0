//! Categorical count tables: time-of-day bands, weekdays, capture sources.

use chrono::Weekday;
use moodscape_core::EntrySource;
use serde::{Deserialize, Serialize};

/// Fixed local-hour bands.
///
/// - morning `[5, 12)`
/// - afternoon `[12, 17)`
/// - evening `[17, 22)`
/// - night `[22, 24) ∪ [0, 5)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bands in tie-break order.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Band for a local hour of day. Hours past 23 are treated as night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    /// Prepositional phrase for insight text.
    pub fn phrase(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "in the morning",
            TimeOfDay::Afternoon => "in the afternoon",
            TimeOfDay::Evening => "in the evening",
            TimeOfDay::Night => "at night",
        }
    }
}

/// Entry counts per time-of-day band. All four keys are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayCounts {
    pub morning: u32,
    pub afternoon: u32,
    pub evening: u32,
    pub night: u32,
}

impl TimeOfDayCounts {
    pub fn get(&self, band: TimeOfDay) -> u32 {
        match band {
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Afternoon => self.afternoon,
            TimeOfDay::Evening => self.evening,
            TimeOfDay::Night => self.night,
        }
    }

    pub fn increment(&mut self, band: TimeOfDay) {
        let slot = match band {
            TimeOfDay::Morning => &mut self.morning,
            TimeOfDay::Afternoon => &mut self.afternoon,
            TimeOfDay::Evening => &mut self.evening,
            TimeOfDay::Night => &mut self.night,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> u32 {
        TimeOfDay::ALL
            .iter()
            .fold(0u32, |acc, band| acc.saturating_add(self.get(*band)))
    }

    /// Band with the highest count; earlier bands win ties. `None` if empty.
    pub fn most_frequent(&self) -> Option<(TimeOfDay, u32)> {
        most_frequent_in(TimeOfDay::ALL.iter().map(|band| (*band, self.get(*band))))
    }
}

/// Weekdays in Sunday-first order.
pub const WEEKDAYS_SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// English name of a weekday, capitalized.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Entry counts per local weekday, serialized Sunday-first with all seven
/// keys present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOfWeekCounts {
    pub sunday: u32,
    pub monday: u32,
    pub tuesday: u32,
    pub wednesday: u32,
    pub thursday: u32,
    pub friday: u32,
    pub saturday: u32,
}

impl DayOfWeekCounts {
    pub fn get(&self, day: Weekday) -> u32 {
        match day {
            Weekday::Sun => self.sunday,
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
        }
    }

    pub fn increment(&mut self, day: Weekday) {
        let slot = match day {
            Weekday::Sun => &mut self.sunday,
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> u32 {
        WEEKDAYS_SUNDAY_FIRST
            .iter()
            .fold(0u32, |acc, day| acc.saturating_add(self.get(*day)))
    }

    /// Day with the highest count; Sunday-first tie-break. `None` if empty.
    pub fn most_frequent(&self) -> Option<(Weekday, u32)> {
        most_frequent_in(WEEKDAYS_SUNDAY_FIRST.iter().map(|day| (*day, self.get(*day))))
    }
}

/// Entry counts per capture source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCounts {
    pub sliders: u32,
    pub drawing: u32,
    pub voice: u32,
    pub face: u32,
}

impl SourceCounts {
    pub fn get(&self, source: EntrySource) -> u32 {
        match source {
            EntrySource::Sliders => self.sliders,
            EntrySource::Drawing => self.drawing,
            EntrySource::Voice => self.voice,
            EntrySource::Face => self.face,
        }
    }

    pub fn increment(&mut self, source: EntrySource) {
        let slot = match source {
            EntrySource::Sliders => &mut self.sliders,
            EntrySource::Drawing => &mut self.drawing,
            EntrySource::Voice => &mut self.voice,
            EntrySource::Face => &mut self.face,
        };
        *slot = slot.saturating_add(1);
    }
}

/// First key with the strictly highest non-zero count.
fn most_frequent_in<K: Copy>(counts: impl Iterator<Item = (K, u32)>) -> Option<(K, u32)> {
    counts.fold(None, |best, (key, count)| match best {
        _ if count == 0 => best,
        Some((_, best_count)) if count <= best_count => best,
        _ => Some((key, count)),
    })
}
