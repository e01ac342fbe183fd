//! Completeness checks on bilingual records.

use serde::Serialize;

use super::field::{
    NAME_FIELD,
    paired_keys,
};
use super::BilingualSource;
use crate::types::Language;

/// How much of a field pair is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PairState {
    /// Both languages present.
    Complete,
    /// Exactly one language present.
    Partial,
    /// Neither language present.
    Empty,
}

/// Reports how much of `field`'s pair is filled in.
#[must_use]
pub fn pair_state(record: &impl BilingualSource, field: &str) -> PairState {
    let (en_key, km_key) = paired_keys(field);
    match (record.text(&en_key).is_some(), record.text(&km_key).is_some()) {
        (true, true) => PairState::Complete,
        (false, false) => PairState::Empty,
        _ => PairState::Partial,
    }
}

/// A record is valid when its name exists in at least one language.
///
/// The description pair is optional: one side, both sides or neither all pass.
#[must_use]
pub fn is_valid_bilingual_record(record: &impl BilingualSource) -> bool {
    pair_state(record, NAME_FIELD) != PairState::Empty
}

/// Languages whose `name` variant is missing, English first.
///
/// Description gaps are not reported.
#[must_use]
pub fn get_missing_translations(record: &impl BilingualSource) -> Vec<Language> {
    let (en_key, km_key) = paired_keys(NAME_FIELD);
    [(Language::En, en_key), (Language::Km, km_key)]
        .into_iter()
        .filter(|(_, key)| record.text(key).is_none())
        .map(|(language, _)| language)
        .collect()
}
