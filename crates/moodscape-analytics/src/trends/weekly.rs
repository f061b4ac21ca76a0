//! Week-over-week comparison over fixed 7-day buckets.

use moodscape_core::{Emotion, EmotionMap};
use serde::{Deserialize, Serialize};

/// Summary of one 7-day bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    /// Mode of the entries' dominant emotions (priority tie-break);
    /// `None` for an empty week.
    pub dominant_emotion: Option<Emotion>,

    pub count: u32,

    /// Mean energy of the week's entries; `0` for an empty week.
    pub mean_energy: f64,
}

/// This week against the week before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComparison {
    pub this_week: WeekSummary,
    pub previous_week: WeekSummary,

    /// Relative change in mean energy, in percent, rounded to one decimal.
    /// `0` when the previous week has no entries or zero mean energy.
    pub change_percent: f64,
}

impl WeeklyComparison {
    pub(crate) fn new(this_week: WeekSummary, previous_week: WeekSummary) -> Self {
        Self {
            this_week,
            previous_week,
            change_percent: change_percent(&this_week, &previous_week),
        }
    }
}

/// `(this - previous) / previous * 100`, rounded to one decimal.
pub fn change_percent(this_week: &WeekSummary, previous_week: &WeekSummary) -> f64 {
    if previous_week.count == 0
        || !previous_week.mean_energy.is_finite()
        || previous_week.mean_energy <= 0.0
    {
        return 0.0;
    }
    let change =
        (this_week.mean_energy - previous_week.mean_energy) / previous_week.mean_energy * 100.0;
    round_to_tenth(change)
}

/// Round to one decimal place. Halves round away from zero (`f64::round`),
/// so `-0.25` becomes `-0.3`, not the `-0.2` of round-half-up.
#[inline]
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Default)]
pub(crate) struct WeekAccumulator {
    dominant_counts: EmotionMap<u32>,
    energy_sum: f64,
    count: u32,
}

impl WeekAccumulator {
    pub(crate) fn add(&mut self, dominant: Emotion, energy: f64) {
        self.dominant_counts.increment(dominant);
        self.energy_sum += energy;
        self.count = self.count.saturating_add(1);
    }

    pub(crate) fn summary(&self) -> WeekSummary {
        if self.count == 0 {
            return WeekSummary::default();
        }
        WeekSummary {
            dominant_emotion: self
                .dominant_counts
                .most_frequent(&Emotion::PRIORITY)
                .map(|(emotion, _)| emotion),
            count: self.count,
            mean_energy: self.energy_sum / f64::from(self.count),
        }
    }
}
