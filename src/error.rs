use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Why a language load failed.
///
/// Load failures never tear down the store: the previous table stays in
/// place and readiness stays false. Lookup misses are not a `LoadError`;
/// `LanguageStore::lookup` logs them and returns an empty string.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resolved local file does not exist.
    #[error("language file does not exist: {path}")]
    MissingResource { path: PathBuf },

    /// The HTTP request could not be completed (DNS, connect, body read).
    #[error("request for {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("server returned {status} for {url}")]
    Http { status: StatusCode, url: String },

    /// The local file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a flat JSON object of string keys to string
    /// values.
    #[error("malformed language table: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_resource_display() {
        let err = LoadError::MissingResource {
            path: PathBuf::from("languages/fr.json"),
        };

        let msg = err.to_string();
        assert!(msg.contains("does not exist"));
        assert!(msg.contains("languages/fr.json"));
    }

    #[test]
    fn test_http_display_includes_status_and_url() {
        let err = LoadError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://host/lang/es.json".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("https://host/lang/es.json"));
    }

    #[test]
    fn test_parse_display() {
        let parse_err = serde_json::from_str::<std::collections::HashMap<String, String>>("[]")
            .expect_err("arrays are not language tables");
        let err = LoadError::from(parse_err);

        assert!(err.to_string().contains("malformed language table"));
    }

    #[test]
    fn test_io_preserves_source() {
        let err = LoadError::Io {
            path: PathBuf::from("languages/en.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let source = std::error::Error::source(&err);
        assert!(source.is_some());
        assert!(source.unwrap().to_string().contains("denied"));
    }
}
