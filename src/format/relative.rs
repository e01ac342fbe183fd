//! Bucketing elapsed time for "time ago" labels.

use chrono::{
    DateTime,
    Utc,
};

/// Key of the "just now" label.
pub const JUST_NOW_KEY: &str = "time.justNow";
/// Key of the suffix appended to a minute count.
pub const MINUTES_AGO_KEY: &str = "time.minutesAgo";
/// Key of the suffix appended to an hour count.
pub const HOURS_AGO_KEY: &str = "time.hoursAgo";
/// Key of the suffix appended to a day count.
pub const DAYS_AGO_KEY: &str = "time.daysAgo";

/// How long ago something happened, in the coarsest unit that fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elapsed {
    /// Under a minute, including timestamps in the future.
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    /// A week or more: shown as a full date instead.
    Older,
}

impl Elapsed {
    /// Buckets the time between `then` and `now`. Counts are truncated.
    #[must_use]
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = now.signed_duration_since(then);
        let minutes = diff.num_minutes();
        let hours = diff.num_hours();
        let days = diff.num_days();

        if minutes < 1 {
            Self::JustNow
        } else if minutes < 60 {
            Self::Minutes(minutes)
        } else if hours < 24 {
            Self::Hours(hours)
        } else if days < 7 {
            Self::Days(days)
        } else {
            Self::Older
        }
    }

    /// The count and the dictionary key of its suffix, for counted buckets.
    #[must_use]
    pub const fn counted(self) -> Option<(i64, &'static str)> {
        match self {
            Self::Minutes(n) => Some((n, MINUTES_AGO_KEY)),
            Self::Hours(n) => Some((n, HOURS_AGO_KEY)),
            Self::Days(n) => Some((n, DAYS_AGO_KEY)),
            Self::JustNow | Self::Older => None,
        }
    }
}
