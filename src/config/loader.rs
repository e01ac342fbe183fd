//! Settings and dictionary loading from disk.

use std::path::Path;

use super::{
    ConfigError,
    LocaleSettings,
};
use crate::dictionary::{
    Dictionaries,
    load_dictionary,
};
use crate::types::Language;

/// Name of the settings file looked up in the project root.
pub(super) const CONFIG_FILE_NAME: &str = ".lms-i18n.json";

/// Reads `.lms-i18n.json` from `root`.
///
/// # Returns
/// - `Ok(Some(settings))`: file found and parsed
/// - `Ok(None)`: no settings file
/// - `Err(ConfigError)`: read or parse error
pub(super) fn load_from_root(root: &Path) -> Result<Option<LocaleSettings>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!(path = ?config_path, "No settings file, using defaults");
        return Ok(None);
    }

    tracing::debug!(path = ?config_path, "Reading settings file");

    let content = std::fs::read_to_string(&config_path)?;
    let settings: LocaleSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// Loads the dictionaries named in `settings`, relative paths resolved against `root`.
///
/// Languages without a configured path use the bundled dictionary.
pub(super) fn load_dictionaries(
    settings: &LocaleSettings,
    root: Option<&Path>,
) -> Result<Dictionaries, ConfigError> {
    let mut dictionaries = Dictionaries::builtin()?;

    for language in Language::ALL {
        let Some(path) = settings.dictionaries.get(language) else {
            continue;
        };
        let path = match root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.clone(),
        };
        dictionaries.set(language, Some(load_dictionary(&path)?));
    }

    Ok(dictionaries)
}
