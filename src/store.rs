//! Language table ownership and loading.
//!
//! The store keeps exactly one language's key→value table in memory,
//! loads it from the configured base location (a directory on disk or an
//! HTTP prefix), and serves lookups against the most recently completed
//! load. The table is swapped wholesale on every load; there is no
//! key-by-key merging between languages.

use crate::config::Config;
use crate::error::LoadError;
use crate::metrics::LookupMetrics;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Where a language's data lives once the identifier is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// A file under the base directory, loaded synchronously.
    Local(PathBuf),
    /// A URL under the base prefix, fetched with an HTTP GET.
    Remote(String),
}

/// Table contents plus the flags describing them, swapped under one lock.
struct TableState {
    entries: HashMap<String, String>,
    ready: bool,
    current_language: Option<String>,
}

/// Owns the active language table and performs loads.
///
/// All state sits behind a lock, so a store wrapped in `Arc` can be
/// shared between the broadcaster, listeners, and the host. Readiness is
/// false from the moment a load starts until one completes successfully;
/// a failed load keeps the previous table in place but leaves readiness
/// false, and callers should gate UI refresh on [`is_ready`].
///
/// [`is_ready`]: LanguageStore::is_ready
pub struct LanguageStore {
    config: Config,
    client: reqwest::Client,
    state: RwLock<TableState>,
}

impl LanguageStore {
    /// Create a store with an empty, not-ready table.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            state: RwLock::new(TableState {
                entries: HashMap::new(),
                ready: false,
                current_language: None,
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a language identifier to its data source.
    ///
    /// The locator is `<base>/<language>.<extension>`; if that string
    /// contains `://` the load goes over HTTP, otherwise it is a local
    /// file path.
    pub fn locator(&self, language: &str) -> Locator {
        let location = format!(
            "{}/{}.{}",
            self.config.base_location.trim_end_matches('/'),
            language,
            self.config.file_extension
        );

        if location.contains("://") {
            Locator::Remote(location)
        } else {
            Locator::Local(PathBuf::from(location))
        }
    }

    /// Load the table for `language`, replacing the current one.
    ///
    /// Readiness drops to false immediately and `language` becomes the
    /// current language even if the load then fails, so switching back
    /// to a failed identifier is a no-op at the broadcaster. On failure
    /// the previous table is left untouched, the error is logged, and
    /// the caller gets it back.
    pub async fn load(&self, language: &str) -> Result<(), LoadError> {
        {
            let mut state = self.state.write().expect("language table lock poisoned");
            state.ready = false;
            state.current_language = Some(language.to_string());
        }

        let result = match self.locator(language) {
            Locator::Remote(url) => self.fetch_remote(&url).await,
            Locator::Local(path) => Self::read_local(&path),
        };

        match result {
            Ok(entries) => {
                let count = entries.len();
                {
                    let mut state = self.state.write().expect("language table lock poisoned");
                    state.entries = entries;
                    state.ready = true;
                }
                LookupMetrics::global().record_load();
                info!("Loaded language '{}' ({} entries)", language, count);
                Ok(())
            }
            Err(err) => {
                LookupMetrics::global().record_load_failure();
                error!("Could not load language '{}': {}", language, err);
                Err(err)
            }
        }
    }

    /// Look up the display string for `key`.
    ///
    /// Missing keys are logged and rendered as an empty string so a
    /// single absent translation never takes down string rendering. The
    /// currently retained table is served whether or not the store is
    /// ready; callers that care should check [`is_ready`] first.
    ///
    /// [`is_ready`]: LanguageStore::is_ready
    pub fn lookup(&self, key: &str) -> String {
        match self.get(key) {
            Some(value) => {
                LookupMetrics::global().record_lookup_hit();
                value
            }
            None => {
                LookupMetrics::global().record_lookup_miss();
                warn!("Entry '{}' not found in language table", key);
                String::new()
            }
        }
    }

    /// Like [`lookup`] but without the miss logging, for callers that
    /// want to distinguish absence themselves.
    ///
    /// [`lookup`]: LanguageStore::lookup
    pub fn get(&self, key: &str) -> Option<String> {
        self.state
            .read()
            .expect("language table lock poisoned")
            .entries
            .get(key)
            .cloned()
    }

    /// Whether the table reflects a fully completed load.
    pub fn is_ready(&self) -> bool {
        self.state
            .read()
            .expect("language table lock poisoned")
            .ready
    }

    /// The most recently requested language, successful or not.
    pub fn current_language(&self) -> Option<String> {
        self.state
            .read()
            .expect("language table lock poisoned")
            .current_language
            .clone()
    }

    /// Language identifiers discoverable under a local base directory,
    /// sorted. Remote bases cannot be enumerated and yield an empty list.
    pub fn available_languages(&self) -> Vec<String> {
        if self.config.base_location.contains("://") {
            return Vec::new();
        }

        let suffix = format!(".{}", self.config.file_extension);
        let mut languages: Vec<String> = match std::fs::read_dir(&self.config.base_location) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .filter_map(|entry| entry.file_name().into_string().ok())
                .filter_map(|name| name.strip_suffix(&suffix).map(str::to_string))
                .collect(),
            Err(err) => {
                warn!(
                    "Could not scan language directory '{}': {}",
                    self.config.base_location, err
                );
                Vec::new()
            }
        };

        languages.sort();
        languages
    }

    fn read_local(path: &Path) -> Result<HashMap<String, String>, LoadError> {
        if !path.exists() {
            return Err(LoadError::MissingResource {
                path: path.to_path_buf(),
            });
        }

        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(parse_table(&json)?)
    }

    async fn fetch_remote(&self, url: &str) -> Result<HashMap<String, String>, LoadError> {
        debug!("Fetching language table from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| LoadError::Network {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(LoadError::Http {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|source| LoadError::Network {
            url: url.to_string(),
            source,
        })?;

        Ok(parse_table(&body)?)
    }
}

/// Parse a flat JSON object of string keys to string values.
///
/// Deserializing straight into `HashMap<String, String>` rejects arrays,
/// nesting, and non-string values, which is exactly the wire contract.
fn parse_table(json: &str) -> Result<HashMap<String, String>, serde_json::Error> {
    serde_json::from_str(json)
}
