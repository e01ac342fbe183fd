use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::dictionary::DictionaryError;
use crate::preference::DEFAULT_STORAGE_KEY;
use crate::types::Language;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid setting '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "dictionaries.km")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid locale settings:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Cannot read settings file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Settings file is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Cannot load dictionary: {0}")]
    DictionaryError(#[from] DictionaryError),
}

/// Numbered list of validation errors for display.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|err| format!("  - {}: {}", err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    pub dictionaries: DictionaryPaths,

    /// Separator between key path segments in `translate`.
    pub key_separator: String,

    /// Key of the language entry in the persistent preference store.
    pub storage_key: String,
}

/// Dictionary file per language. Unset paths use the bundled dictionary.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryPaths {
    pub en: Option<PathBuf>,
    pub km: Option<PathBuf>,
}

impl DictionaryPaths {
    #[must_use]
    pub fn get(&self, language: Language) -> Option<&PathBuf> {
        match language {
            Language::En => self.en.as_ref(),
            Language::Km => self.km.as_ref(),
        }
    }
}

impl LocaleSettings {
    /// # Errors
    /// - Empty key separator
    /// - Empty storage key
    /// - Empty dictionary path
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.storage_key.trim().is_empty() {
            errors.push(ValidationError::new(
                "storageKey",
                "The storage key cannot be empty. Example: \"language\"",
            ));
        }

        for language in Language::ALL {
            if let Some(path) = self.dictionaries.get(language)
                && path.as_os_str().is_empty()
            {
                errors.push(ValidationError::new(
                    format!("dictionaries.{language}"),
                    "The path cannot be empty. Specify a JSON file, or remove this field to use the bundled dictionary",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            dictionaries: DictionaryPaths::default(),
            key_separator: ".".to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
