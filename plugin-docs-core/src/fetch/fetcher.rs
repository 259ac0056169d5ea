//! Companion manifest and repository info lookups
//!
//! Every failure here is degraded, not fatal: it is logged and the caller
//! gets `None`. Requests are issued strictly one after another.

use serde_json::Value;
use tracing::{debug, warn};

use super::transport::{HttpTransport, ReqwestTransport};
use crate::catalog::{RemoteManifest, RepoInfo};
use crate::config::GeneratorConfig;
use crate::error::{DocsError, FetchError};

/// Fetches remote plugin metadata
pub struct Fetcher {
    transport: Box<dyn HttpTransport>,
    config: GeneratorConfig,
}

impl Fetcher {
    /// Create a fetcher using the real HTTPS client
    pub fn new(config: GeneratorConfig) -> Result<Self, DocsError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Create a fetcher over a custom transport
    pub fn with_transport(config: GeneratorConfig, transport: Box<dyn HttpTransport>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// GET a URL and parse the body as JSON
    ///
    /// Non-HTTPS URLs are refused before the transport is touched.
    pub async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        if !url.starts_with("https://") {
            return Err(FetchError::UnsafeScheme {
                url: url.to_string(),
            });
        }

        let response = self.transport.get(url).await?;

        if response.status == 404 {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }

        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Find the companion manifest for a repository
    ///
    /// Candidates are tried in order; the first parseable 2xx body wins.
    /// A 404 moves on silently, any other failure is logged first.
    pub async fn fetch_companion_manifest(&self, repo: &str) -> Option<RemoteManifest> {
        for url in self.config.manifest_candidates(repo) {
            match self.fetch_json(&url).await {
                Ok(value) => {
                    debug!("Found companion manifest at {}", url);
                    return Some(RemoteManifest::from_value(&value));
                }
                Err(e) if e.is_not_found() => {
                    debug!("No companion manifest at {}", url);
                }
                Err(e) => {
                    warn!("Error fetching from {}: {}", url, describe(&e));
                }
            }
        }

        None
    }

    /// Fetch repository statistics from the hosting API
    pub async fn fetch_repo_info(&self, repo: &str) -> Option<RepoInfo> {
        let url = self.config.repo_info_url(repo);

        match self.fetch_json(&url).await {
            Ok(value) => Some(RepoInfo::from_value(&value)),
            Err(e) => {
                warn!("Error fetching repo info for {}: {}", repo, describe(&e));
                None
            }
        }
    }
}

/// Error message including its source chain
fn describe(error: &FetchError) -> String {
    match std::error::Error::source(error) {
        Some(source) => format!("{error}: {source}"),
        None => error.to_string(),
    }
}
