//! Active-language aware translation and formatting.
//!
//! Every method taking `language: Option<Language>` uses the given language, or
//! resolves the active one from [`LanguagePreferences`] when it is `None`.

use std::fmt::Display;
use std::sync::Arc;

use chrono::{
    DateTime,
    Utc,
};

use crate::config::{
    ConfigError,
    ConfigManager,
};
use crate::dictionary::Dictionaries;
use crate::format::{
    self,
    DAYS_IN_WEEK,
    DateValue,
    Elapsed,
    JUST_NOW_KEY,
    MONTHS_IN_YEAR,
};
use crate::preference::{
    LanguagePreferences,
    PreferenceStore,
};
use crate::resolver::{
    self,
    Record,
};
use crate::types::{
    Language,
    NameFormat,
    TextDirection,
};

/// Dictionaries, language preference and key separator bundled together.
#[derive(Debug)]
pub struct Localizer {
    /// English and Khmer trees.
    dictionaries: Dictionaries,
    /// Source of the active language.
    preferences: LanguagePreferences,
    /// Separator between key path segments.
    key_separator: String,
}

impl Localizer {
    #[must_use]
    pub fn new(
        dictionaries: Dictionaries,
        preferences: LanguagePreferences,
        key_separator: impl Into<String>,
    ) -> Self {
        Self { dictionaries, preferences, key_separator: key_separator.into() }
    }

    /// Bundled dictionaries, no persistent store, `.` separator.
    #[must_use]
    pub fn builtin() -> Self {
        let dictionaries = Dictionaries::builtin().unwrap_or_else(|e| {
            tracing::error!("Bundled dictionaries are malformed: {}", e);
            Dictionaries::default()
        });
        Self::new(dictionaries, LanguagePreferences::detached(), ".")
    }

    /// Builds a localizer from loaded settings.
    ///
    /// # Errors
    /// Dictionary file read or parse error.
    pub fn from_config(
        config: &ConfigManager,
        store: Arc<dyn PreferenceStore>,
    ) -> Result<Self, ConfigError> {
        let settings = config.get_settings();
        let dictionaries = config.load_dictionaries()?;
        let preferences = LanguagePreferences::new(store, settings.storage_key.clone());
        Ok(Self::new(dictionaries, preferences, settings.key_separator.clone()))
    }

    /// Replaces the preferences (e.g. to attach a store or ambient locale).
    #[must_use]
    pub fn with_preferences(mut self, preferences: LanguagePreferences) -> Self {
        self.preferences = preferences;
        self
    }

    #[must_use]
    pub const fn preferences(&self) -> &LanguagePreferences {
        &self.preferences
    }

    #[must_use]
    pub const fn dictionaries(&self) -> &Dictionaries {
        &self.dictionaries
    }

    #[must_use]
    pub fn key_separator(&self) -> &str {
        &self.key_separator
    }

    /// The explicit language, else the active one.
    fn language(&self, language: Option<Language>) -> Language {
        language.unwrap_or_else(|| self.preferences.resolve_active_language())
    }

    #[must_use]
    pub fn resolve_active_language(&self) -> Language {
        self.preferences.resolve_active_language()
    }

    pub fn persist_language(&self, language: Language) {
        self.preferences.persist_language(language);
    }

    /// Persists the language and notifies subscribers.
    pub fn change_language(&self, language: Language) {
        self.preferences.change_language(language);
    }

    /// Looks up a string leaf, returning `key_path` itself on any miss.
    #[must_use]
    pub fn translate(&self, key_path: &str, language: Option<Language>) -> String {
        self.translate_or(key_path, key_path, language)
    }

    /// Looks up a string leaf, returning `fallback` on any miss.
    ///
    /// A missing dictionary for the language is replaced by the Khmer one.
    #[must_use]
    pub fn translate_or(&self, key_path: &str, fallback: &str, language: Option<Language>) -> String {
        let language = self.language(language);
        self.dictionaries
            .for_lookup(language)
            .and_then(|dictionary| dictionary.get_string(key_path, &self.key_separator))
            .map_or_else(
                || {
                    tracing::debug!("Missing translation '{}' for '{}'", key_path, language);
                    fallback.to_string()
                },
                str::to_string,
            )
    }

    /// Long-form date, e.g. `"November 4, 2024"`.
    #[must_use]
    pub fn format_date(&self, date: impl Into<DateValue>, language: Option<Language>) -> String {
        format::format_date(&date.into(), self.language(language))
    }

    /// Relative label for `date` measured against the current time.
    #[must_use]
    pub fn format_time_ago(&self, date: impl Into<DateValue>, language: Option<Language>) -> String {
        self.format_time_ago_at(date, Utc::now(), language)
    }

    /// Relative label for `date` measured against `now`.
    ///
    /// Under a minute: `time.justNow`. Under an hour, a day, a week: the count
    /// immediately followed by `time.minutesAgo` / `time.hoursAgo` /
    /// `time.daysAgo`. Older or unparseable: [`format_date`](Self::format_date).
    #[must_use]
    pub fn format_time_ago_at(
        &self,
        date: impl Into<DateValue>,
        now: DateTime<Utc>,
        language: Option<Language>,
    ) -> String {
        let language = self.language(language);
        let date = date.into();
        let elapsed = date.to_utc().map_or(Elapsed::Older, |then| Elapsed::between(then, now));

        match elapsed {
            Elapsed::JustNow => self.translate(JUST_NOW_KEY, Some(language)),
            Elapsed::Older => format::format_date(&date, language),
            counted => counted.counted().map_or_else(String::new, |(count, key)| {
                format!("{count}{}", self.translate(key, Some(language)))
            }),
        }
    }

    #[must_use]
    pub fn format_number(&self, num: impl Display, language: Option<Language>) -> String {
        format::format_number(num, self.language(language))
    }

    /// Month name for a 0-based index; empty when out of range or not in the dictionary.
    #[must_use]
    pub fn get_month_name(
        &self,
        index: usize,
        format: NameFormat,
        language: Option<Language>,
    ) -> String {
        let key = format::month_names_key(format, &self.key_separator);
        self.calendar_name(&key, index, MONTHS_IN_YEAR, language)
    }

    /// Day name for a 0-based index starting on Sunday; empty when out of range.
    #[must_use]
    pub fn get_day_name(&self, index: usize, format: NameFormat, language: Option<Language>) -> String {
        let key = format::day_names_key(format, &self.key_separator);
        self.calendar_name(&key, index, DAYS_IN_WEEK, language)
    }

    /// Entry `index` of the name table at `key`, bounded by `len`.
    fn calendar_name(
        &self,
        key: &str,
        index: usize,
        len: usize,
        language: Option<Language>,
    ) -> String {
        if index >= len {
            return String::new();
        }
        self.dictionaries
            .for_lookup(self.language(language))
            .and_then(|dictionary| dictionary.get_indexed(key, index, &self.key_separator))
            .unwrap_or_default()
            .to_string()
    }

    #[must_use]
    pub fn is_rtl(&self, language: Option<Language>) -> bool {
        format::is_rtl(self.language(language))
    }

    #[must_use]
    pub fn get_text_direction(&self, language: Option<Language>) -> TextDirection {
        format::text_direction(self.language(language))
    }

    #[must_use]
    pub const fn get_language_display_name(&self, language: Language) -> &'static str {
        format::language_display_name(language)
    }

    /// Localized `name` / `description` views of `records`.
    #[must_use]
    pub fn to_localized_view(&self, records: &[Record], language: Option<Language>) -> Vec<Record> {
        resolver::to_localized_view(records, self.language(language))
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{
        Duration,
        TimeZone,
    };
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::dictionary::Dictionary;
    use crate::preference::MemoryStore;

    fn localizer_with(en: serde_json::Value, km: serde_json::Value) -> Localizer {
        let dictionaries = Dictionaries::new(
            Some(Dictionary::from_value(en).unwrap()),
            Some(Dictionary::from_value(km).unwrap()),
        );
        Localizer::new(dictionaries, LanguagePreferences::detached(), ".")
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case::english(Some(Language::En), "Just now")]
    #[case::khmer(Some(Language::Km), "ឥឡូវនេះ")]
    #[case::active_default(None, "ឥឡូវនេះ")]
    fn test_translate_builtin(#[case] language: Option<Language>, #[case] expected: &str) {
        let localizer = Localizer::builtin();

        assert_that!(localizer.translate("time.justNow", language), eq(expected));
    }

    #[rstest]
    #[case::missing_root("a.b.c")]
    #[case::missing_leaf("time.never")]
    #[case::object_leaf("time")]
    #[case::array_leaf("date.monthsLong")]
    #[case::through_leaf("time.justNow.more")]
    #[case::empty("")]
    fn test_translate_miss_returns_key(#[case] key: &str) {
        let localizer = Localizer::builtin();

        assert_that!(localizer.translate(key, Some(Language::En)), eq(key));
    }

    #[googletest::test]
    fn translate_or_uses_fallback() {
        let localizer = Localizer::builtin();

        expect_that!(localizer.translate_or("nope", "Fallback", Some(Language::En)), eq("Fallback"));
        expect_that!(localizer.translate_or("common.save", "Fallback", Some(Language::En)), eq("Save"));
    }

    #[googletest::test]
    fn translate_reads_parallel_trees() {
        let localizer = localizer_with(
            json!({"dashboard": {"title": "Dashboard"}}),
            json!({"dashboard": {"title": "ផ្ទាំងគ្រប់គ្រង"}}),
        );

        expect_that!(localizer.translate("dashboard.title", Some(Language::Km)), eq("ផ្ទាំងគ្រប់គ្រង"));
        expect_that!(localizer.translate("dashboard.title", Some(Language::En)), eq("Dashboard"));
    }

    #[googletest::test]
    fn translate_rejects_inline_language_branches() {
        let inline = json!({"dashboard": {"title": {"en": "Dashboard", "km": "ផ្ទាំងគ្រប់គ្រង"}}});
        let localizer = localizer_with(inline.clone(), inline);

        expect_that!(localizer.translate("dashboard.title", Some(Language::Km)), eq("dashboard.title"));
    }

    #[googletest::test]
    fn translate_missing_dictionary_uses_khmer() {
        let km = Dictionary::from_value(json!({"title": "ចំណងជើង"})).unwrap();
        let localizer =
            Localizer::new(Dictionaries::new(None, Some(km)), LanguagePreferences::detached(), ".");

        expect_that!(localizer.translate("title", Some(Language::En)), eq("ចំណងជើង"));
    }

    #[googletest::test]
    fn translate_without_dictionaries_returns_key() {
        let localizer =
            Localizer::new(Dictionaries::default(), LanguagePreferences::detached(), ".");

        expect_that!(localizer.translate("title", Some(Language::En)), eq("title"));
    }

    #[googletest::test]
    fn translate_custom_separator() {
        let localizer = Localizer::new(
            Dictionaries::builtin().unwrap(),
            LanguagePreferences::detached(),
            "/",
        );

        expect_that!(localizer.translate("common/save", Some(Language::En)), eq("Save"));
        expect_that!(localizer.translate("common.save", Some(Language::En)), eq("common.save"));
    }

    #[googletest::test]
    fn active_language_follows_store() {
        let preferences = LanguagePreferences::new(Arc::new(MemoryStore::new()), "language");
        let localizer = Localizer::builtin().with_preferences(preferences);

        expect_that!(localizer.translate("common.save", None), eq("រក្សាទុក"));
        localizer.change_language(Language::En);
        expect_that!(localizer.translate("common.save", None), eq("Save"));
        expect_that!(localizer.format_number(42, None), eq("42"));
    }

    #[rstest]
    #[case::thirty_seconds(Duration::seconds(30), Language::En, "Just now")]
    #[case::future(Duration::seconds(-30), Language::Km, "ឥឡូវនេះ")]
    #[case::five_minutes(Duration::minutes(5), Language::Km, "5នាទីមុន")]
    #[case::ninety_minutes(Duration::minutes(90), Language::En, "1h ago")]
    #[case::three_days(Duration::days(3), Language::Km, "3ថ្ងៃមុន")]
    #[case::two_weeks(Duration::days(16), Language::En, "November 4, 2024")]
    #[case::two_weeks_khmer(Duration::days(16), Language::Km, "4 វិច្ឆិកា 2024")]
    fn test_format_time_ago_at(
        #[case] ago: Duration,
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        let localizer = Localizer::builtin();

        assert_that!(localizer.format_time_ago_at(now() - ago, now(), Some(language)), eq(expected));
    }

    #[googletest::test]
    fn format_time_ago_suffix_comes_from_dictionary() {
        let localizer = localizer_with(
            json!({"time": {"justNow": "now!", "hoursAgo": " hours back"}}),
            json!({}),
        );

        let label = localizer.format_time_ago_at(now() - Duration::hours(2), now(), Some(Language::En));
        expect_that!(label, eq("2 hours back"));
        let label = localizer.format_time_ago_at(now(), now(), Some(Language::En));
        expect_that!(label, eq("now!"));
    }

    #[googletest::test]
    fn format_time_ago_text_input() {
        let localizer = Localizer::builtin();

        expect_that!(
            localizer.format_time_ago_at("2024-11-20T11:15:00Z", now(), Some(Language::En)),
            eq("45m ago")
        );
        expect_that!(
            localizer.format_time_ago_at("yesterday-ish", now(), Some(Language::En)),
            eq("yesterday-ish")
        );
    }

    #[googletest::test]
    fn format_time_ago_uses_current_time() {
        let localizer = Localizer::builtin();

        expect_that!(localizer.format_time_ago(Utc::now(), Some(Language::En)), eq("Just now"));
    }

    #[googletest::test]
    fn format_date_and_number() {
        let localizer = Localizer::builtin();

        expect_that!(localizer.format_date("2024-11-04", Some(Language::En)), eq("November 4, 2024"));
        expect_that!(localizer.format_number(123, Some(Language::Km)), eq("១២៣"));
        expect_that!(localizer.format_number(-5, Some(Language::Km)), eq("-៥"));
        expect_that!(localizer.format_number(2024, None), eq("២០២៤"));
    }

    #[rstest]
    #[case(0, NameFormat::Long, Language::En, "January")]
    #[case(11, NameFormat::Short, Language::En, "Dec")]
    #[case(10, NameFormat::Long, Language::Km, "វិច្ឆិកា")]
    #[case(12, NameFormat::Long, Language::En, "")]
    #[case(usize::MAX, NameFormat::Short, Language::Km, "")]
    fn test_get_month_name(
        #[case] index: usize,
        #[case] format: NameFormat,
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        let localizer = Localizer::builtin();

        assert_that!(localizer.get_month_name(index, format, Some(language)), eq(expected));
    }

    #[rstest]
    #[case(0, NameFormat::Long, Language::En, "Sunday")]
    #[case(6, NameFormat::Short, Language::En, "Sat")]
    #[case(1, NameFormat::Long, Language::Km, "ច័ន្ទ")]
    #[case(7, NameFormat::Long, Language::Km, "")]
    fn test_get_day_name(
        #[case] index: usize,
        #[case] format: NameFormat,
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        let localizer = Localizer::builtin();

        assert_that!(localizer.get_day_name(index, format, Some(language)), eq(expected));
    }

    #[googletest::test]
    fn calendar_name_missing_table() {
        let localizer = localizer_with(json!({}), json!({}));

        expect_that!(localizer.get_month_name(0, NameFormat::Long, Some(Language::En)), eq(""));
    }

    #[googletest::test]
    fn direction_and_display_names() {
        let localizer = Localizer::builtin();

        for language in [None, Some(Language::En), Some(Language::Km)] {
            expect_that!(localizer.is_rtl(language), eq(false));
            expect_that!(localizer.get_text_direction(language), eq(TextDirection::Ltr));
        }
        expect_that!(localizer.get_language_display_name(Language::En), eq("English"));
        expect_that!(localizer.get_language_display_name(Language::Km), eq("ខ្មែរ"));
    }

    #[googletest::test]
    fn localized_view_uses_active_language() {
        let localizer = Localizer::builtin();
        let records = vec![crate::test_utils::record(json!({"id": 1, "name_en": "Math", "name_km": "គណិត"}))];

        let view = localizer.to_localized_view(&records, None);

        expect_that!(view.first().and_then(|r| r.get("name")), some(eq(&json!("គណិត"))));
    }

    #[googletest::test]
    fn default_storage_key_matches_preferences() {
        let localizer = Localizer::default();

        expect_that!(
            localizer.preferences().storage_key(),
            eq(crate::preference::DEFAULT_STORAGE_KEY)
        );
    }
}
