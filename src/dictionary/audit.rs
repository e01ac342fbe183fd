//! Cross-language dictionary audit.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{
    Dictionaries,
    flatten_json,
};
use crate::types::Language;

/// A key defined in one language's dictionary but not the other's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKey {
    pub key: String,
    pub missing_in: Language,
}

/// Reports every flattened key present in one dictionary and missing from the other.
///
/// An absent dictionary counts as empty, so all keys of the other language are
/// reported. Results are sorted by key, English gaps before Khmer ones.
#[must_use]
pub fn find_missing_keys(dictionaries: &Dictionaries, separator: &str) -> Vec<MissingKey> {
    let key_sets: Vec<(Language, BTreeSet<String>)> = Language::ALL
        .iter()
        .map(|&language| {
            let keys = dictionaries
                .get(language)
                .map(|d| flatten_json(d.tree(), separator).into_keys().collect())
                .unwrap_or_default();
            (language, keys)
        })
        .collect();

    let all_keys: BTreeSet<&String> = key_sets.iter().flat_map(|(_, keys)| keys).collect();

    let mut missing = Vec::new();
    for key in all_keys {
        for (language, keys) in &key_sets {
            if !keys.contains(key) {
                missing.push(MissingKey { key: key.clone(), missing_in: *language });
            }
        }
    }

    tracing::debug!("Dictionary audit found {} missing keys", missing.len());
    missing
}
