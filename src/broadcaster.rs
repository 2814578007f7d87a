//! Listener registry and language-switch coordination.

use crate::store::LanguageStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// A display element that re-reads its looked-up values when told to.
///
/// `refresh` takes no arguments: the listener knows which keys it owns
/// and pulls them again through [`LanguageStore::lookup`], checking
/// [`LanguageStore::is_ready`] if it wants to skip refreshing against a
/// table left stale by a failed switch.
pub trait RefreshListener: Send + Sync {
    fn refresh(&self);
}

/// Owns the listener registry and coordinates language switches.
///
/// Listeners are keyed by a caller-chosen stable identifier and must be
/// unregistered explicitly when the display element goes away; the
/// registry never drops one on its own. Registering an id twice simply
/// replaces the entry, so a listener is refreshed at most once per
/// switch.
pub struct LanguageSwitchBroadcaster {
    store: Arc<LanguageStore>,
    listeners: Mutex<HashMap<String, Arc<dyn RefreshListener>>>,
}

impl LanguageSwitchBroadcaster {
    /// Create a broadcaster for an existing store.
    pub fn new(store: Arc<LanguageStore>) -> Self {
        Self {
            store,
            listeners: Mutex::new(HashMap::new()),
        }
    }

    /// The store this broadcaster drives.
    pub fn store(&self) -> &Arc<LanguageStore> {
        &self.store
    }

    /// Register `listener` under `id`, replacing any previous entry with
    /// the same id.
    pub fn register(&self, id: impl Into<String>, listener: Arc<dyn RefreshListener>) {
        let id = id.into();
        let mut listeners = self.listeners.lock().expect("listener registry poisoned");
        if listeners.insert(id.clone(), listener).is_some() {
            debug!("Listener '{}' re-registered", id);
        }
    }

    /// Remove the listener registered under `id`. Returns false if there
    /// was none.
    pub fn unregister(&self, id: &str) -> bool {
        self.listeners
            .lock()
            .expect("listener registry poisoned")
            .remove(id)
            .is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .expect("listener registry poisoned")
            .len()
    }

    /// Load the configured default language without notifying listeners.
    ///
    /// Call once at startup, before display elements register. A failed
    /// initial load leaves the store not ready with an empty table, the
    /// same state a failed switch leaves behind.
    pub async fn initialize(&self) {
        let default_language = self.store.config().default_language.clone();
        info!("Loading default language '{}'", default_language);

        // The store logs load failures; initialization has nobody to
        // notify yet either way.
        let _ = self.store.load(&default_language).await;
    }

    /// Switch the active language and refresh every registered listener.
    ///
    /// Switching to the language that is already current (string
    /// equality, case-sensitive) is a complete no-op: no reload, no
    /// notification. Otherwise the store reload is awaited to completion
    /// first, remote fetches included, and listeners are then refreshed
    /// exactly once each whether or not the load succeeded. After a
    /// failure they observe the retained stale table with readiness
    /// false; listeners never refresh against data that has not arrived
    /// yet.
    pub async fn switch_to(&self, language: &str) {
        if self.store.current_language().as_deref() == Some(language) {
            debug!("Language '{}' is already active, nothing to do", language);
            return;
        }

        info!("Switching language to '{}'", language);

        // Load failures are logged by the store; listeners are refreshed
        // either way so they can react to the readiness flag.
        let _ = self.store.load(language).await;

        self.notify_all();
    }

    /// The identifier of the most recently requested language.
    pub fn current_language(&self) -> Option<String> {
        self.store.current_language()
    }

    fn notify_all(&self) {
        // Clone the handles out so listener callbacks run without the
        // registry lock held; a refresh may register or unregister.
        let listeners: Vec<Arc<dyn RefreshListener>> = self
            .listeners
            .lock()
            .expect("listener registry poisoned")
            .values()
            .cloned()
            .collect();

        debug!("Refreshing {} listeners", listeners.len());
        for listener in listeners {
            listener.refresh();
        }
    }
}
