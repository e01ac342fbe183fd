//! Selecting one language variant of a field pair.

use super::BilingualSource;
use crate::types::Language;

/// Base name of the required pair.
pub const NAME_FIELD: &str = "name";
/// Base name of the optional pair.
pub const DESCRIPTION_FIELD: &str = "description";

/// Column names of a pair: `("name_en", "name_km")`.
#[must_use]
pub fn paired_keys(field: &str) -> (String, String) {
    (format!("{field}_en"), format!("{field}_km"))
}

/// Picks the variant of `field` for `language`.
///
/// Order, first hit wins:
/// 1. the requested language's variant
/// 2. the Khmer variant
/// 3. the English variant
/// 4. `fallback_field` on the record
/// 5. empty string
#[must_use]
pub fn resolve_localized_field(
    record: &impl BilingualSource,
    field: &str,
    language: Language,
    fallback_field: &str,
) -> String {
    let (en_key, km_key) = paired_keys(field);
    let requested = match language {
        Language::En => &en_key,
        Language::Km => &km_key,
    };

    record
        .text(requested)
        .or_else(|| record.text(&km_key))
        .or_else(|| record.text(&en_key))
        .or_else(|| record.text(fallback_field))
        .unwrap_or_default()
        .to_string()
}

/// Localized `name`, falling back to `fallback_field` (usually `"name"`).
#[must_use]
pub fn resolve_localized_name(
    record: &impl BilingualSource,
    language: Language,
    fallback_field: &str,
) -> String {
    resolve_localized_field(record, NAME_FIELD, language, fallback_field)
}

/// Localized `description`, falling back to the plain `description` field.
#[must_use]
pub fn resolve_localized_description(record: &impl BilingualSource, language: Language) -> String {
    resolve_localized_field(record, DESCRIPTION_FIELD, language, DESCRIPTION_FIELD)
}
