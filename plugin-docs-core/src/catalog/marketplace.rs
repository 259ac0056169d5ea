//! Marketplace catalog parsing (marketplace.json)
//!
//! The catalog lists every plugin in the marketplace together with the
//! marketplace's own name and version.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::author::AuthorInfo;
use super::{lenient, DEFAULT_CATEGORY, DEFAULT_PLUGIN_NAME};
use crate::error::{DocsError, Result};

/// The local marketplace document
///
/// Field types are not enforced: a key holding a value of the wrong type is
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marketplace {
    /// Marketplace display name
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,

    /// Marketplace version
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub version: Option<String>,

    /// All plugin entries, in file order
    #[serde(default, deserialize_with = "lenient::entries")]
    pub plugins: Vec<CatalogEntry>,
}

/// One plugin as listed in the marketplace catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique plugin name; also the output file stem
    #[serde(default = "default_plugin_name", deserialize_with = "lenient::plugin_name")]
    pub name: String,

    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::author",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<AuthorInfo>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub homepage: Option<String>,

    /// SPDX license identifier
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub license: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub keywords: Vec<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    /// Where the plugin lives
    #[serde(
        default,
        deserialize_with = "lenient::source",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<PluginSource>,

    #[serde(flatten)]
    pub components: Components,
}

/// Plugin source: a hosted repository or a path inside the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginSource {
    Path(String),
    Repository(RepositorySource),
}

/// Structured source record (`{"source": "github", "repo": "owner/name"}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySource {
    /// Source kind (e.g., "github")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Repository identifier in `owner/name` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Component indicators
///
/// Mostly only their presence matters; `commands` is also listed on the
/// plugin page when it is an array of strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<serde_json::Value>,

    #[serde(
        default,
        rename = "mcpServers",
        skip_serializing_if = "Option::is_none"
    )]
    pub mcp_servers: Option<serde_json::Value>,
}

fn default_plugin_name() -> String {
    DEFAULT_PLUGIN_NAME.to_string()
}

impl Marketplace {
    /// Load the marketplace catalog from a file path
    ///
    /// A missing file and malformed JSON are distinct errors; both are fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DocsError::MarketplaceNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| DocsError::MarketplaceRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| DocsError::MarketplaceParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse the catalog from a JSON string
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Display name, falling back to a generic label
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Plugin Marketplace")
    }

    /// Version string, falling back to "1.0.0"
    pub fn display_version(&self) -> &str {
        self.version.as_deref().unwrap_or("1.0.0")
    }
}

impl CatalogEntry {
    /// Create an entry with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            version: None,
            author: None,
            homepage: None,
            license: None,
            keywords: Vec::new(),
            category: None,
            tags: Vec::new(),
            source: None,
            components: Components::default(),
        }
    }

    /// Repository identifier from `source.repo`, or "" when there is none
    pub fn repo(&self) -> &str {
        match &self.source {
            Some(PluginSource::Repository(source)) => source.repo.as_deref().unwrap_or(""),
            _ => "",
        }
    }

    /// Category, falling back to [`DEFAULT_CATEGORY`]
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

impl Components {
    /// Whether any indicator shown in the "Components" section is present
    ///
    /// Hooks are carried through the merge but not shown.
    pub fn any_listed(&self) -> bool {
        self.commands.is_some()
            || self.skills.is_some()
            || self.agents.is_some()
            || self.mcp_servers.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
{
  "name": "f5-distributed-cloud-marketplace",
  "version": "2.1.0",
  "plugins": [
    {
      "name": "xc-console",
      "description": "Automate the F5 XC console through Chrome",
      "version": "0.3.0",
      "author": { "name": "Robin", "url": "https://github.com/robin" },
      "category": "automation",
      "tags": ["browser"],
      "keywords": ["f5", "xc"],
      "source": { "source": "github", "repo": "robin/f5xc-console" },
      "commands": ["./commands/login.md"]
    },
    {
      "name": "local-helper",
      "author": "Someone",
      "source": "./plugins/local-helper"
    }
  ]
}
"#;

    #[test]
    fn test_parse_marketplace() {
        let marketplace = Marketplace::from_json(SAMPLE).unwrap();
        assert_eq!(marketplace.display_name(), "f5-distributed-cloud-marketplace");
        assert_eq!(marketplace.display_version(), "2.1.0");
        assert_eq!(marketplace.plugins.len(), 2);

        let console = &marketplace.plugins[0];
        assert_eq!(console.repo(), "robin/f5xc-console");
        assert_eq!(console.category(), "automation");
        assert!(console.components.commands.is_some());
        assert!(console.components.any_listed());
    }

    #[test]
    fn test_string_author_and_path_source() {
        let marketplace = Marketplace::from_json(SAMPLE).unwrap();
        let helper = &marketplace.plugins[1];

        assert_eq!(
            helper.author.as_ref().and_then(|a| a.name.as_deref()),
            Some("Someone")
        );
        assert_eq!(
            helper.source,
            Some(PluginSource::Path("./plugins/local-helper".to_string()))
        );
        assert_eq!(helper.repo(), "");
        assert!(!helper.components.any_listed());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let marketplace = Marketplace::from_json(r#"{"plugins": [{}]}"#).unwrap();
        let entry = &marketplace.plugins[0];

        assert_eq!(entry.name, DEFAULT_PLUGIN_NAME);
        assert_eq!(entry.category(), DEFAULT_CATEGORY);
        assert_eq!(marketplace.display_name(), "Plugin Marketplace");
        assert_eq!(marketplace.display_version(), "1.0.0");
    }

    #[test]
    fn test_hooks_alone_are_not_listed() {
        let mut entry = CatalogEntry::named("hooks-only");
        entry.components.hooks = Some(serde_json::json!("./hooks/hooks.json"));
        assert!(!entry.components.any_listed());
    }

    #[test]
    fn test_null_tags_are_empty() {
        let marketplace = Marketplace::from_json(
            r#"{"plugins": [{"name": "a", "tags": null, "keywords": ["k", 1]}]}"#,
        )
        .unwrap();
        let entry = &marketplace.plugins[0];
        assert!(entry.tags.is_empty());
        assert_eq!(entry.keywords, vec!["k".to_string()]);
    }

    #[test]
    fn test_numeric_version_is_kept_as_text() {
        let marketplace =
            Marketplace::from_json(r#"{"version": 2, "plugins": [{"name": "a", "version": 1}]}"#)
                .unwrap();
        assert_eq!(marketplace.display_version(), "2");
        assert_eq!(marketplace.plugins[0].version.as_deref(), Some("1"));
    }

    #[test]
    fn test_author_with_non_string_key() {
        let marketplace = Marketplace::from_json(
            r#"{"plugins": [{"name": "a", "author": {"name": "A", "email": 5}}]}"#,
        )
        .unwrap();
        let author = marketplace.plugins[0].author.as_ref().unwrap();
        assert_eq!(author.name.as_deref(), Some("A"));
        assert!(author.email.is_none());
    }

    #[test]
    fn test_null_plugins_is_empty_list() {
        let marketplace = Marketplace::from_json(r#"{"name": "m", "plugins": null}"#).unwrap();
        assert!(marketplace.plugins.is_empty());
        assert_eq!(marketplace.display_name(), "m");
    }

    #[test]
    fn test_wrong_types_read_as_missing() {
        let marketplace = Marketplace::from_json(
            r#"{"name": ["m"], "plugins": [{
                "name": null,
                "description": {"text": "d"},
                "category": false,
                "author": 42,
                "source": 7
            }]}"#,
        )
        .unwrap();
        let entry = &marketplace.plugins[0];

        assert_eq!(marketplace.display_name(), "Plugin Marketplace");
        assert_eq!(entry.name, DEFAULT_PLUGIN_NAME);
        assert!(entry.description.is_none());
        assert_eq!(entry.category(), "false");
        assert!(entry.author.is_none());
        assert!(entry.source.is_none());
    }

    #[test]
    fn test_repository_source_with_odd_fields() {
        let marketplace = Marketplace::from_json(
            r#"{"plugins": [{"name": "a", "source": {"source": "github", "repo": 3}}]}"#,
        )
        .unwrap();
        let entry = &marketplace.plugins[0];
        assert_eq!(entry.repo(), "");
        assert!(matches!(entry.source, Some(PluginSource::Repository(_))));
    }

    #[test]
    fn test_load_valid_json_with_loose_types() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("marketplace.json");
        std::fs::write(
            &path,
            r#"{"plugins": [{"name": "a", "tags": null, "version": 1, "author": {"name": "A", "email": 5}}]}"#,
        )
        .unwrap();

        let marketplace = Marketplace::load(&path).unwrap();
        assert_eq!(marketplace.plugins.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Marketplace::load(&temp_dir.path().join("marketplace.json"));
        assert!(matches!(result, Err(DocsError::MarketplaceNotFound { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("marketplace.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = Marketplace::load(&path);
        assert!(matches!(result, Err(DocsError::MarketplaceParse { .. })));
    }
}
