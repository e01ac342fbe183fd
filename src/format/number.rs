//! Numeral rendering.

use std::fmt::Display;

use crate::types::Language;

/// Khmer digit glyphs indexed by value.
const KHMER_DIGITS: [char; 10] = ['០', '១', '២', '៣', '៤', '៥', '៦', '៧', '៨', '៩'];

/// Replaces every ASCII digit with its Khmer glyph. Other characters pass through.
#[must_use]
pub fn to_khmer_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| usize::try_from(d).ok())
                .and_then(|d| KHMER_DIGITS.get(d).copied())
                .unwrap_or(c)
        })
        .collect()
}

/// Renders `num` in `language`'s numerals.
///
/// The number is stringified first, so signs and decimal points are kept as-is.
#[must_use]
pub fn format_number(num: impl Display, language: Language) -> String {
    let plain = num.to_string();
    match language {
        Language::En => plain,
        Language::Km => to_khmer_digits(&plain),
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::integer(123, "១២៣")]
    #[case::negative(-5, "-៥")]
    #[case::zero(0, "០")]
    #[case::all_digits(9_876_543_210_i64, "៩៨៧៦៥៤៣២១០")]
    fn test_format_number_khmer(#[case] num: i64, #[case] expected: &str) {
        assert_that!(format_number(num, Language::Km), eq(expected));
    }

    #[rstest]
    fn test_format_number_english() {
        assert_that!(format_number(123, Language::En), eq("123"));
        assert_that!(format_number(-5, Language::En), eq("-5"));
    }

    #[rstest]
    fn test_format_number_decimal() {
        assert_that!(format_number(3.25, Language::Km), eq("៣.២៥"));
        assert_that!(format_number(3.25, Language::En), eq("3.25"));
    }

    #[rstest]
    fn test_to_khmer_digits_mixed_text() {
        assert_that!(to_khmer_digits("Room 12B"), eq("Room ១២B"));
        assert_that!(to_khmer_digits("ថ្នាក់ 7"), eq("ថ្នាក់ ៧"));
    }
}
