//! Calendar dates: parsing loosely typed input and long-form rendering.

use chrono::{
    DateTime,
    Datelike,
    FixedOffset,
    NaiveDate,
    NaiveDateTime,
    TimeZone,
    Utc,
};

use crate::types::Language;

/// English month names for long dates.
const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Khmer month names for long dates.
const KM_MONTHS: [&str; 12] = [
    "មករា",
    "កុម្ភៈ",
    "មីនា",
    "មេសា",
    "ឧសភា",
    "មិថុនា",
    "កក្កដា",
    "សីហា",
    "កញ្ញា",
    "តុលា",
    "វិច្ឆិកា",
    "ធ្នូ",
];

/// Naive date-time layouts accepted in text input, tried in order.
const NAIVE_DATETIME_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// A date as handed over by callers: typed or still text.
///
/// Naive values carry no offset and are read as UTC when an instant is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Instant(DateTime<FixedOffset>),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Text(String),
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Instant(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl DateValue {
    /// Parses text into a typed value; typed values are returned unchanged.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD[T ]HH:MM:SS[.fff]` and `YYYY-MM-DD`.
    #[must_use]
    pub fn parsed(&self) -> Option<Self> {
        let Self::Text(text) = self else {
            return Some(self.clone());
        };
        let text = text.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            return Some(Self::Instant(instant));
        }
        if let Some(naive) = NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        {
            return Some(Self::DateTime(naive));
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().map(Self::Date)
    }

    /// The calendar day, in the value's own offset.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        match self.parsed()? {
            Self::Instant(instant) => Some(instant.date_naive()),
            Self::DateTime(naive) => Some(naive.date()),
            Self::Date(date) => Some(date),
            Self::Text(_) => None,
        }
    }

    /// The point in time this value denotes. Dates mean midnight UTC.
    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self.parsed()? {
            Self::Instant(instant) => Some(instant.with_timezone(&Utc)),
            Self::DateTime(naive) => Some(naive.and_utc()),
            Self::Date(date) => date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()),
            Self::Text(_) => None,
        }
    }

    /// The original text, or `None` for typed values.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Long-form date: `"November 4, 2024"` (`en-US`) or `"4 វិច្ឆិកា 2024"` (`km-KH`).
#[must_use]
pub fn format_long_date(date: NaiveDate, language: Language) -> String {
    let months = match language {
        Language::En => &EN_MONTHS,
        Language::Km => &KM_MONTHS,
    };
    let month = usize::try_from(date.month0())
        .ok()
        .and_then(|index| months.get(index))
        .copied()
        .unwrap_or_default();

    match language {
        Language::En => format!("{month} {}, {}", date.day(), date.year()),
        Language::Km => format!("{} {month} {}", date.day(), date.year()),
    }
}

/// Formats `date` as a long date in `language`.
///
/// Text that cannot be parsed is returned unchanged.
#[must_use]
pub fn format_date(date: &DateValue, language: Language) -> String {
    date.calendar_date().map_or_else(
        || {
            tracing::debug!("Unparseable date {:?}, returning as-is", date);
            date.as_text().unwrap_or_default().to_string()
        },
        |day| format_long_date(day, language),
    )
}
