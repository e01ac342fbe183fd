//! Dictionary file loading.

use std::path::Path;

use serde_json::Value;

use super::{
    Dictionary,
    DictionaryError,
};

/// Reads a dictionary JSON file.
///
/// # Errors
/// - File read error
/// - JSON parse error
/// - The document root is not an object
pub fn load_dictionary(path: &Path) -> Result<Dictionary, DictionaryError> {
    tracing::debug!("Loading dictionary from: {:?}", path);

    let content = std::fs::read_to_string(path)
        .map_err(|source| DictionaryError::Io { path: path.to_path_buf(), source })?;

    parse_dictionary(&content).map_err(|err| err.with_path(path))
}

/// Parses dictionary JSON text.
///
/// # Errors
/// - JSON parse error
/// - The document root is not an object
pub fn parse_dictionary(content: &str) -> Result<Dictionary, DictionaryError> {
    let tree: Value = serde_json::from_str(content)
        .map_err(|source| DictionaryError::Parse { path: None, source })?;

    Dictionary::from_value(tree)
}
