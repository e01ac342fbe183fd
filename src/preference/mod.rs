//! Active language preference.
//!
//! The preference lives in a host-supplied [`PreferenceStore`] and is re-read on
//! every call; nothing is cached here. Changing it notifies subscribers so that
//! dependent views can re-render.

/// Key-value store implementations
mod store;

use std::sync::atomic::{
    AtomicU64,
    Ordering,
};
use std::sync::{
    Arc,
    Mutex,
    PoisonError,
};

pub use store::{
    JsonFileStore,
    MemoryStore,
    NoopStore,
    PreferenceStore,
};

use crate::types::Language;

/// Default key under which the language code is stored.
pub const DEFAULT_STORAGE_KEY: &str = "language";

/// Callback invoked with the new language after a change.
pub type LanguageListener = Arc<dyn Fn(Language) + Send + Sync>;

/// Handle returned by [`LanguagePreferences::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Reads, writes and broadcasts the active language.
pub struct LanguagePreferences {
    /// Persistent store.
    store: Arc<dyn PreferenceStore>,
    /// Key of the language entry in `store`.
    storage_key: String,
    /// Locale tag of the surrounding environment (e.g. `"km-KH"`).
    ambient_locale: Option<String>,
    /// Registered change listeners.
    listeners: Mutex<Vec<(SubscriptionId, LanguageListener)>>,
    /// Next subscription id.
    next_id: AtomicU64,
}

impl LanguagePreferences {
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            ambient_locale: None,
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Preferences for contexts without a persistent store.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(Arc::new(NoopStore), DEFAULT_STORAGE_KEY)
    }

    /// Sets the ambient locale tag consulted when nothing is stored.
    #[must_use]
    pub fn with_ambient_locale(mut self, locale_tag: impl Into<String>) -> Self {
        self.ambient_locale = Some(locale_tag.into());
        self
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Resolves the active language.
    ///
    /// 1. a valid code in the store
    /// 2. Khmer if the ambient locale's primary subtag is `km`
    /// 3. Khmer
    ///
    /// English is never inferred from the ambient locale.
    #[must_use]
    pub fn resolve_active_language(&self) -> Language {
        if let Some(stored) = self.store.get(&self.storage_key) {
            if let Some(language) = Language::from_code(&stored) {
                return language;
            }
            tracing::debug!("Ignoring invalid stored language '{}'", stored);
        }

        match self.ambient_locale.as_deref().map(Language::primary_subtag) {
            Some(subtag) if subtag == Language::Km.code() => Language::Km,
            _ => Language::default(),
        }
    }

    /// Writes `language` to the store without notifying anyone.
    pub fn persist_language(&self, language: Language) {
        tracing::debug!("Persisting language '{}'", language);
        self.store.set(&self.storage_key, language.code());
    }

    /// Persists `language`, then calls every listener with it.
    pub fn change_language(&self, language: Language) {
        self.persist_language(language);

        let listeners: Vec<LanguageListener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::debug!("Notifying {} listeners of language change", listeners.len());
        for listener in listeners {
            listener(language);
        }
    }

    /// Registers a listener for [`change_language`](Self::change_language).
    pub fn subscribe(&self, listener: impl Fn(Language) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

impl std::fmt::Debug for LanguagePreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listener_count =
            self.listeners.lock().unwrap_or_else(PoisonError::into_inner).len();
        f.debug_struct("LanguagePreferences")
            .field("store", &"<dyn PreferenceStore>")
            .field("storage_key", &self.storage_key)
            .field("ambient_locale", &self.ambient_locale)
            .field("listeners", &listener_count)
            .finish_non_exhaustive()
    }
}
