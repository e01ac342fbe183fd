//! Helpers shared by test modules.
#![cfg(test)]

use serde_json::Value;

use crate::resolver::Record;

/// Converts a `json!` object literal into a [`Record`].
///
/// Non-object values yield an empty record.
pub(crate) fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}
