//! Runtime language-table loading, switching, and change notification.
//!
//! This crate keeps one language's key→value string table in memory at a
//! time, loads it from a local directory or an HTTP resource, and tells
//! registered display elements to refresh whenever the active language
//! changes.
//!
//! # Architecture
//!
//! - `config`: base location, file extension, and default language
//! - `store`: the `LanguageStore` owning the current table, load paths,
//!   and key lookup
//! - `broadcaster`: the `LanguageSwitchBroadcaster` owning the listener
//!   registry and coordinating switches
//! - `error`: the `LoadError` taxonomy for failed loads
//! - `metrics`: process-wide lookup/load counters
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use langswitch::{Config, LanguageStore, LanguageSwitchBroadcaster};
//!
//! let config = Config::new("assets/languages");
//! let store = Arc::new(LanguageStore::new(config));
//! let broadcaster = LanguageSwitchBroadcaster::new(Arc::clone(&store));
//!
//! broadcaster.initialize().await; // loads the default language
//! broadcaster.register("title_label", title_label);
//! broadcaster.switch_to("de").await; // reload + refresh every listener
//! let text = store.lookup("menu.start");
//! ```

pub mod broadcaster;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;

pub use broadcaster::{LanguageSwitchBroadcaster, RefreshListener};
pub use config::Config;
pub use error::LoadError;
pub use metrics::{LookupMetrics, MetricsReport};
pub use store::{LanguageStore, Locator};
