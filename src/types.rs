//! Core types used throughout the crate.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// A supported content language.
///
/// Khmer is the platform default and the fallback whenever a preference is
/// missing, ambiguous or invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Km,
}

impl Language {
    /// All supported languages, English first.
    pub const ALL: [Self; 2] = [Self::En, Self::Km];

    /// Parses an exact language code (`"en"` or `"km"`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "km" => Some(Self::Km),
            _ => None,
        }
    }

    /// Parses a code from outside the crate, degrading to Khmer when invalid.
    #[must_use]
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// Extracts the primary subtag of a locale tag in lowercase.
    ///
    /// `"km-KH"` -> `"km"`, `"en_US"` -> `"en"`, `"KM"` -> `"km"`.
    #[must_use]
    pub fn primary_subtag(locale_tag: &str) -> String {
        locale_tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Km => "km",
        }
    }

    /// BCP 47 tag used for calendar formatting.
    #[must_use]
    pub const fn locale_tag(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Km => "km-KH",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Km => "ខ្មែរ",
        }
    }

    /// The other supported language.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Km,
            Self::Km => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Writing direction of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
}

impl TextDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
        }
    }
}

/// Long (`"November"`) or short (`"Nov"`) calendar name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameFormat {
    #[default]
    Long,
    Short,
}

impl NameFormat {
    /// Suffix of the dictionary key holding this variant (`monthsLong`).
    #[must_use]
    pub const fn key_suffix(self) -> &'static str {
        match self {
            Self::Long => "Long",
            Self::Short => "Short",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::english("en", Some(Language::En))]
    #[case::khmer("km", Some(Language::Km))]
    #[case::uppercase("EN", None)]
    #[case::region("km-KH", None)]
    #[case::empty("", None)]
    fn test_from_code(#[case] code: &str, #[case] expected: Option<Language>) {
        assert_that!(Language::from_code(code), eq(expected));
    }

    #[rstest]
    #[case::valid("en", Language::En)]
    #[case::unknown("fr", Language::Km)]
    #[case::garbage("???", Language::Km)]
    fn test_from_code_or_default(#[case] code: &str, #[case] expected: Language) {
        assert_that!(Language::from_code_or_default(code), eq(expected));
    }

    #[rstest]
    #[case("km-KH", "km")]
    #[case("en_US", "en")]
    #[case("KM", "km")]
    #[case(" km ", "km")]
    #[case("", "")]
    fn test_primary_subtag(#[case] tag: &str, #[case] expected: &str) {
        assert_that!(Language::primary_subtag(tag), eq(expected));
    }

    #[googletest::test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&[Language::En, Language::Km]).unwrap();
        expect_that!(json, eq(r#"["en","km"]"#));

        let parsed: Language = serde_json::from_str(r#""km""#).unwrap();
        expect_that!(parsed, eq(Language::Km));
    }

    #[googletest::test]
    fn default_is_khmer() {
        expect_that!(Language::default(), eq(Language::Km));
        expect_that!(Language::En.other(), eq(Language::Km));
        expect_that!(Language::Km.locale_tag(), eq("km-KH"));
    }
}
