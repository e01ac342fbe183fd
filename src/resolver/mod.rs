//! Bilingual record resolution.
//!
//! Records carry paired `{field}_en` / `{field}_km` values. Everything here is a
//! pure function: inputs are never mutated, missing or empty fields are never an
//! error, and Khmer is preferred whenever the requested language has no content.

/// Field-pair resolution
mod field;
/// Typed bilingual field set, form extraction and merging
mod fields;
/// SQL expression builder for the external query layer
mod sql;
/// Completeness checks
mod validate;
/// Localized views
mod view;

use std::collections::HashMap;

use serde_json::{
    Map,
    Value,
};

pub use field::{
    DESCRIPTION_FIELD,
    NAME_FIELD,
    paired_keys,
    resolve_localized_description,
    resolve_localized_field,
    resolve_localized_name,
};
pub use fields::{
    BilingualFields,
    extract_bilingual_from_form,
    merge_bilingual_updates,
};
pub use sql::{
    build_localized_name_sql_expression,
    build_localized_sql_expression,
};
pub use validate::{
    PairState,
    get_missing_translations,
    is_valid_bilingual_record,
    pair_state,
};
pub use view::{
    localize_record,
    to_localized_view,
    to_localized_view_with_fields,
};

/// A plain record as read from persistence: column name to JSON value.
pub type Record = Map<String, Value>;

/// Read access to the text fields of a record.
///
/// Absent keys, non-string values and empty strings all read as `None`, so the
/// fallback chains treat them identically.
pub trait BilingualSource {
    /// The non-empty text stored under `key`.
    fn text(&self, key: &str) -> Option<&str>;
}

impl BilingualSource for Map<String, Value> {
    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }
}

impl<S: std::hash::BuildHasher> BilingualSource for HashMap<String, String, S> {
    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str).filter(|s| !s.is_empty())
    }
}
