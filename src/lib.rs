//! khmer-lms-i18n
//!
//! Bilingual (Khmer/English) content layer for a learning platform: resolving
//! paired `*_en` / `*_km` record fields, and translating and formatting for the
//! active language.

pub mod config;
pub mod dictionary;
pub mod format;
pub mod localizer;
pub mod preference;
pub mod resolver;
mod test_utils;
pub mod types;

pub use localizer::Localizer;
pub use types::{
    Language,
    NameFormat,
    TextDirection,
};
