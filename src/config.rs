use anyhow::{Context, Result};

/// Configuration for the language store.
///
/// The host constructs one of these and passes it down explicitly; there
/// is no process-wide instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory or URL prefix the language files live under. A value
    /// containing `://` makes every load go over HTTP.
    pub base_location: String,

    /// File extension of the language files, without the dot.
    pub file_extension: String,

    /// Language loaded by `LanguageSwitchBroadcaster::initialize`.
    pub default_language: String,
}

impl Config {
    /// Create a configuration with the usual `json` extension and `en`
    /// default language.
    pub fn new(base_location: impl Into<String>) -> Self {
        Self {
            base_location: base_location.into(),
            file_extension: "json".to_string(),
            default_language: "en".to_string(),
        }
    }

    /// Set the file extension (without the dot).
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    /// Set the default language.
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_location: std::env::var("LANG_BASE_LOCATION")
                .context("LANG_BASE_LOCATION not set")?,

            file_extension: std::env::var("LANG_FILE_EXTENSION")
                .unwrap_or_else(|_| "json".to_string()),

            default_language: std::env::var("LANG_DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        })
    }
}
