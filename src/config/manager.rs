//! Settings management.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    LocaleSettings,
    loader,
};
use crate::dictionary::Dictionaries;

/// Holds the validated settings and the root they were loaded from.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings.
    current_settings: LocaleSettings,

    /// Directory containing `.lms-i18n.json`.
    root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: LocaleSettings::default(), root: None }
    }

    /// Loads settings from `root`, falling back to defaults when no file exists.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!(?root, "Reading locale settings");

        let settings = if let Some(root) = &root {
            loader::load_from_root(root)?.map_or_else(LocaleSettings::default, |loaded| {
                tracing::debug!(?loaded, "Found settings file");
                loaded
            })
        } else {
            LocaleSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.root = root;
        tracing::info!(
            separator = %self.current_settings.key_separator,
            storage_key = %self.current_settings.storage_key,
            "Locale settings ready"
        );

        Ok(())
    }

    /// Replaces the settings after validating them.
    ///
    /// # Errors
    /// Validation error; the previous settings are kept.
    pub fn update_settings(&mut self, new_settings: LocaleSettings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Locale settings replaced");

        Ok(())
    }

    /// Loads the dictionaries the current settings point at.
    ///
    /// # Errors
    /// Dictionary file read or parse error.
    pub fn load_dictionaries(&self) -> Result<Dictionaries, ConfigError> {
        loader::load_dictionaries(&self.current_settings, self.root.as_deref())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &LocaleSettings {
        &self.current_settings
    }

    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}
