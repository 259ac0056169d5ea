//! Generator configuration
//!
//! Every path, host and timeout the pipeline uses lives here so callers
//! (and tests) can substitute them without touching the environment.
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. CLI flags (`--marketplace`, `--output`, `--timeout`)
//! 2. YAML file passed with `--config`
//! 3. Built-in defaults
//!
//! ```yaml
//! marketplace_path: .claude-plugin/marketplace.json
//! output_dir: docs/plugins
//! timeout_seconds: 10
//! branches: [main, master]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DocsError, Result};

/// Default location of the marketplace catalog
pub const DEFAULT_MARKETPLACE_PATH: &str = ".claude-plugin/marketplace.json";

/// Default output directory for generated pages
pub const DEFAULT_OUTPUT_DIR: &str = "docs/plugins";

/// Raw-content host serving companion manifests
pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Repository metadata API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com/repos";

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Identifying client header sent with every request
pub const DEFAULT_USER_AGENT: &str = "F5XC-Marketplace-Docs/1.0";

/// Marketplace repository shown in the index quick-install snippet
pub const DEFAULT_MARKETPLACE_REPO: &str = "robinmordasiewicz/f5-distributed-cloud-marketplace";

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Path to the local marketplace catalog
    pub marketplace_path: PathBuf,

    /// Directory receiving `<name>.md` and `index.md`
    pub output_dir: PathBuf,

    /// Base URL for companion manifest lookups
    pub raw_base_url: String,

    /// Base URL for repository info lookups
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// User-Agent header value
    pub user_agent: String,

    /// Branches tried for the companion manifest, in order
    pub branches: Vec<String>,

    /// Manifest paths tried within each branch, in order
    pub manifest_paths: Vec<String>,

    /// Repository identifier used in the "Quick Install" snippet
    pub marketplace_repo: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marketplace_path: PathBuf::from(DEFAULT_MARKETPLACE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            branches: vec!["main".to_string(), "master".to_string()],
            manifest_paths: vec![
                ".claude-plugin/plugin.json".to_string(),
                "plugin.json".to_string(),
            ],
            marketplace_repo: DEFAULT_MARKETPLACE_REPO.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DocsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content).map_err(|source| DocsError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }

    /// Per-request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Companion manifest candidates for a repository, in the order tried
    ///
    /// Paths are the outer loop: every branch is tried for the nested
    /// location before any branch is tried for the flat one.
    pub fn manifest_candidates(&self, repo: &str) -> Vec<String> {
        let base = self.raw_base_url.trim_end_matches('/');
        self.manifest_paths
            .iter()
            .flat_map(|path| {
                self.branches
                    .iter()
                    .map(move |branch| format!("{base}/{repo}/{branch}/{path}"))
            })
            .collect()
    }

    /// Repository info endpoint for a repository
    pub fn repo_info_url(&self, repo: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.marketplace_path,
            PathBuf::from(".claude-plugin/marketplace.json")
        );
        assert_eq!(config.output_dir, PathBuf::from("docs/plugins"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent, "F5XC-Marketplace-Docs/1.0");
    }

    #[test]
    fn test_manifest_candidate_order() {
        let config = GeneratorConfig::default();
        let candidates = config.manifest_candidates("acme/widget");

        assert_eq!(
            candidates,
            vec![
                "https://raw.githubusercontent.com/acme/widget/main/.claude-plugin/plugin.json",
                "https://raw.githubusercontent.com/acme/widget/master/.claude-plugin/plugin.json",
                "https://raw.githubusercontent.com/acme/widget/main/plugin.json",
                "https://raw.githubusercontent.com/acme/widget/master/plugin.json",
            ]
        );
    }

    #[test]
    fn test_repo_info_url_trims_trailing_slash() {
        let config = GeneratorConfig {
            api_base_url: "https://api.example.com/repos/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.repo_info_url("acme/widget"),
            "https://api.example.com/repos/acme/widget"
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
output_dir: site/plugins
timeout_seconds: 3
"#;

        let config = GeneratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("site/plugins"));
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.raw_base_url, DEFAULT_RAW_BASE_URL);
        assert_eq!(config.branches, vec!["main", "master"]);
    }

    #[test]
    fn test_load_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = GeneratorConfig::load_from_path(&temp_dir.path().join("nope.yml"));
        assert!(matches!(result, Err(DocsError::ConfigRead { .. })));
    }

    #[test]
    fn test_load_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docs.yml");
        std::fs::write(&path, "timeout_seconds: [not, a, number]").unwrap();

        let result = GeneratorConfig::load_from_path(&path);
        assert!(matches!(result, Err(DocsError::ConfigParse { .. })));
    }
}
