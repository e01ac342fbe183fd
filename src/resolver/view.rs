//! Collapsing bilingual records into single-language views for transport.

use serde_json::Value;

use super::field::{
    DESCRIPTION_FIELD,
    NAME_FIELD,
    paired_keys,
    resolve_localized_field,
};
use super::Record;
use crate::types::Language;

/// Returns a copy of `record` where each pair in `fields` is replaced by one
/// plain `{field}` value in `language`.
///
/// The `_en` / `_km` source columns never appear in the output.
#[must_use]
pub fn localize_record(record: &Record, language: Language, fields: &[&str]) -> Record {
    let mut view = record.clone();
    for field in fields {
        let resolved = resolve_localized_field(record, field, language, field);
        let (en_key, km_key) = paired_keys(field);
        view.remove(&en_key);
        view.remove(&km_key);
        view.insert((*field).to_string(), Value::String(resolved));
    }
    view
}

/// Localizes `name` and `description` of every record, preserving order.
#[must_use]
pub fn to_localized_view(records: &[Record], language: Language) -> Vec<Record> {
    to_localized_view_with_fields(records, language, &[NAME_FIELD, DESCRIPTION_FIELD])
}

/// Localizes the given field pairs of every record, preserving order.
#[must_use]
pub fn to_localized_view_with_fields(
    records: &[Record],
    language: Language,
    fields: &[&str],
) -> Vec<Record> {
    records.iter().map(|record| localize_record(record, language, fields)).collect()
}
