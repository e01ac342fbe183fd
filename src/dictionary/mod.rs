//! Per-language translation dictionaries.
//!
//! Each language has its own nested JSON tree (`en.json`, `km.json`); keys are
//! never nested by language inside a single tree. Trees are loaded once and
//! never mutated afterwards.

/// Missing-key audit across languages
mod audit;
/// Dictionary file loader
mod loader;
/// Key-path lookup and flattening
mod lookup;

use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;
use thiserror::Error;

pub use audit::{
    MissingKey,
    find_missing_keys,
};
pub use loader::{
    load_dictionary,
    parse_dictionary,
};
pub use lookup::{
    flatten_json,
    lookup_path,
    lookup_string,
};

use crate::types::Language;

/// Bundled English dictionary.
const BUILTIN_EN: &str = include_str!("../../locales/en.json");
/// Bundled Khmer dictionary.
const BUILTIN_KM: &str = include_str!("../../locales/km.json");

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dictionary{}: {source}", describe_path(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dictionary{} must be a JSON object at the root", describe_path(.path.as_deref()))]
    NotAnObject { path: Option<PathBuf> },
}

/// Formats an optional file path for error messages.
fn describe_path(path: Option<&Path>) -> String {
    path.map_or_else(String::new, |p| format!(" {p:?}"))
}

impl DictionaryError {
    /// Attaches the file path to errors raised while parsing file content.
    #[must_use]
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Parse { source, .. } => Self::Parse { path: Some(path.to_path_buf()), source },
            Self::NotAnObject { .. } => Self::NotAnObject { path: Some(path.to_path_buf()) },
            io @ Self::Io { .. } => io,
        }
    }
}

/// A nested key-value tree for one language. Leaves are strings or string arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    /// Root object of the tree.
    tree: Value,
}

impl Dictionary {
    /// Wraps a parsed tree.
    ///
    /// # Errors
    /// Returns `NotAnObject` if the root is not a JSON object.
    pub fn from_value(tree: Value) -> Result<Self, DictionaryError> {
        if tree.is_object() {
            Ok(Self { tree })
        } else {
            Err(DictionaryError::NotAnObject { path: None })
        }
    }

    #[must_use]
    pub const fn tree(&self) -> &Value {
        &self.tree
    }

    #[must_use]
    pub fn get(&self, key_path: &str, separator: &str) -> Option<&Value> {
        lookup_path(&self.tree, key_path, separator)
    }

    #[must_use]
    pub fn get_string(&self, key_path: &str, separator: &str) -> Option<&str> {
        lookup_string(&self.tree, key_path, separator)
    }

    /// Returns the string at `index` of the array stored at `key_path`.
    #[must_use]
    pub fn get_indexed(&self, key_path: &str, index: usize, separator: &str) -> Option<&str> {
        self.get(key_path, separator)?.as_array()?.get(index)?.as_str()
    }
}

/// The English and Khmer dictionaries.
///
/// Either may be absent; lookups against an absent dictionary fall back to the
/// Khmer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionaries {
    /// English tree.
    en: Option<Dictionary>,
    /// Khmer tree.
    km: Option<Dictionary>,
}

impl Dictionaries {
    #[must_use]
    pub const fn new(en: Option<Dictionary>, km: Option<Dictionary>) -> Self {
        Self { en, km }
    }

    /// The dictionaries bundled with the crate.
    ///
    /// # Errors
    /// Only if the bundled files are malformed.
    pub fn builtin() -> Result<Self, DictionaryError> {
        Ok(Self::new(Some(parse_dictionary(BUILTIN_EN)?), Some(parse_dictionary(BUILTIN_KM)?)))
    }

    /// The dictionary stored for `language`, without fallback.
    #[must_use]
    pub const fn get(&self, language: Language) -> Option<&Dictionary> {
        match language {
            Language::En => self.en.as_ref(),
            Language::Km => self.km.as_ref(),
        }
    }

    /// The dictionary to walk for `language`: its own, else the Khmer one.
    #[must_use]
    pub fn for_lookup(&self, language: Language) -> Option<&Dictionary> {
        self.get(language).or_else(|| {
            tracing::debug!("No '{}' dictionary loaded, using Khmer", language);
            self.km.as_ref()
        })
    }

    /// Replaces the dictionary of one language.
    pub fn set(&mut self, language: Language, dictionary: Option<Dictionary>) {
        match language {
            Language::En => self.en = dictionary,
            Language::Km => self.km = dictionary,
        }
    }
}
