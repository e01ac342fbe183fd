//! Locale formatting.
//!
//! The functions here take an explicit [`Language`]; the
//! [`Localizer`](crate::Localizer) wraps them with active-language resolution
//! and dictionary-backed strings.

/// Date parsing and long-date rendering
mod date;
/// Numerals
mod number;
/// Elapsed-time buckets
mod relative;

pub use date::{
    DateValue,
    format_date,
    format_long_date,
};
pub use number::{
    format_number,
    to_khmer_digits,
};
pub use relative::{
    DAYS_AGO_KEY,
    Elapsed,
    HOURS_AGO_KEY,
    JUST_NOW_KEY,
    MINUTES_AGO_KEY,
};

use crate::types::{
    Language,
    NameFormat,
    TextDirection,
};

/// Number of entries in the month name tables.
pub const MONTHS_IN_YEAR: usize = 12;
/// Number of entries in the day name tables.
pub const DAYS_IN_WEEK: usize = 7;

/// Dictionary key of the month name table: `date.monthsLong` / `date.monthsShort`.
#[must_use]
pub fn month_names_key(format: NameFormat, separator: &str) -> String {
    format!("date{separator}months{}", format.key_suffix())
}

/// Dictionary key of the day name table: `date.daysLong` / `date.daysShort`.
#[must_use]
pub fn day_names_key(format: NameFormat, separator: &str) -> String {
    format!("date{separator}days{}", format.key_suffix())
}

/// Both supported scripts are written left to right.
#[must_use]
pub const fn is_rtl(_language: Language) -> bool {
    false
}

#[must_use]
pub const fn text_direction(_language: Language) -> TextDirection {
    TextDirection::Ltr
}

/// `"English"` or `"ខ្មែរ"`.
#[must_use]
pub const fn language_display_name(language: Language) -> &'static str {
    language.display_name()
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(NameFormat::Long, ".", "date.monthsLong")]
    #[case(NameFormat::Short, ".", "date.monthsShort")]
    #[case(NameFormat::Short, "/", "date/monthsShort")]
    fn test_month_names_key(
        #[case] format: NameFormat,
        #[case] separator: &str,
        #[case] expected: &str,
    ) {
        assert_that!(month_names_key(format, separator), eq(expected));
    }

    #[rstest]
    fn test_day_names_key() {
        assert_that!(day_names_key(NameFormat::Long, "."), eq("date.daysLong"));
    }

    #[rstest]
    #[case(Language::En)]
    #[case(Language::Km)]
    fn test_direction_is_always_ltr(#[case] language: Language) {
        assert_that!(is_rtl(language), eq(false));
        assert_that!(text_direction(language).as_str(), eq("ltr"));
    }

    #[rstest]
    fn test_invalid_code_is_ltr() {
        let language = Language::from_code_or_default("ar");

        assert_that!(is_rtl(language), eq(false));
    }

    #[rstest]
    fn test_language_display_name() {
        assert_that!(language_display_name(Language::En), eq("English"));
        assert_that!(language_display_name(Language::Km), eq("ខ្មែរ"));
    }
}
