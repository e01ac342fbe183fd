//! SQL expressions selecting a localized column.
//!
//! Only strings are built here; the query layer that runs them lives outside
//! this crate.

use super::field::{
    NAME_FIELD,
    paired_keys,
};
use crate::types::Language;

/// Expression preferring `{field}_{language}` and falling back to the other
/// language's column. Empty strings count as missing, as in
/// [`resolve_localized_field`](super::resolve_localized_field).
///
/// ```
/// use khmer_lms_i18n::Language;
/// use khmer_lms_i18n::resolver::build_localized_sql_expression;
///
/// assert_eq!(
///     build_localized_sql_expression("title", Language::En, Some("c")),
///     "COALESCE(NULLIF(c.title_en, ''), c.title_km)",
/// );
/// ```
#[must_use]
pub fn build_localized_sql_expression(
    field: &str,
    language: Language,
    table_alias: Option<&str>,
) -> String {
    let prefix = table_alias
        .filter(|alias| !alias.is_empty())
        .map_or_else(String::new, |alias| format!("{alias}."));
    let (en_column, km_column) = paired_keys(field);
    let (preferred, fallback) = match language {
        Language::En => (en_column, km_column),
        Language::Km => (km_column, en_column),
    };

    format!("COALESCE(NULLIF({prefix}{preferred}, ''), {prefix}{fallback})")
}

/// [`build_localized_sql_expression`] for the `name` pair.
#[must_use]
pub fn build_localized_name_sql_expression(language: Language, table_alias: Option<&str>) -> String {
    build_localized_sql_expression(NAME_FIELD, language, table_alias)
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::english(Language::En, None, "COALESCE(NULLIF(name_en, ''), name_km)")]
    #[case::khmer(Language::Km, None, "COALESCE(NULLIF(name_km, ''), name_en)")]
    #[case::alias(Language::Km, Some("c"), "COALESCE(NULLIF(c.name_km, ''), c.name_en)")]
    #[case::empty_alias(Language::En, Some(""), "COALESCE(NULLIF(name_en, ''), name_km)")]
    fn test_build_localized_name_sql_expression(
        #[case] language: Language,
        #[case] alias: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_that!(build_localized_name_sql_expression(language, alias), eq(expected));
    }
}
