//! Settings: types, validation, loading.
/// Settings file and dictionary loader
mod loader;
/// Settings manager
mod manager;
/// Settings types and validation
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    DictionaryPaths,
    LocaleSettings,
    ValidationError,
};
