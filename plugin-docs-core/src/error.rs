//! Error types for the documentation pipeline
//!
//! Two tiers: [`DocsError`] aborts the run, [`FetchError`] is absorbed by the
//! fetcher and degrades to "data absent".

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop the generation run
#[derive(Error, Debug)]
pub enum DocsError {
    /// The marketplace catalog does not exist
    #[error("Marketplace file not found: {}", path.display())]
    MarketplaceNotFound { path: PathBuf },

    /// The marketplace catalog exists but could not be read
    #[error("Failed to read marketplace file: {}", path.display())]
    MarketplaceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The marketplace catalog is not valid JSON (or has the wrong shape)
    #[error("Failed to parse marketplace file: {}", path.display())]
    MarketplaceParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An explicitly requested config file could not be read
    #[error("Failed to read config file: {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML
    #[error("Failed to parse config file: {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Failed to create output directory: {}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize normalized records")]
    SerializeRecords(#[source] serde_json::Error),

    #[error("Failed to create HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Remote fetch failures
///
/// Never fatal. The fetcher logs these and reports the data as absent.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Only `https://` URLs are ever requested
    #[error("Refusing to fetch non-HTTPS URL: {url}")]
    UnsafeScheme { url: String },

    #[error("Not found: {url}")]
    NotFound { url: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Connection, TLS or timeout failure
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Invalid JSON from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Whether this failure is the silent "try the next candidate" case
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, DocsError>;
