//! Reports dictionary keys defined in one language but missing from the other.
//!
//! Reads `.lms-i18n.json` from the directory given as the first argument, or
//! from the current directory.

use std::path::PathBuf;
use std::process::ExitCode;

use khmer_lms_i18n::config::ConfigManager;
use khmer_lms_i18n::dictionary::find_missing_keys;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let root = match std::env::args().nth(1).map_or_else(std::env::current_dir, |arg| {
        Ok(PathBuf::from(arg))
    }) {
        Ok(root) => root,
        Err(e) => {
            tracing::error!("Cannot determine project root: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut config = ConfigManager::new();
    if let Err(e) = config.load_settings(Some(root)) {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }

    let dictionaries = match config.load_dictionaries() {
        Ok(dictionaries) => dictionaries,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let missing = find_missing_keys(&dictionaries, &config.get_settings().key_separator);
    for entry in &missing {
        tracing::warn!(key = %entry.key, language = %entry.missing_in, "Translation missing");
    }

    if missing.is_empty() {
        tracing::info!("English and Khmer dictionaries define the same keys");
        ExitCode::SUCCESS
    } else {
        tracing::error!("{} translation(s) missing", missing.len());
        ExitCode::FAILURE
    }
}
