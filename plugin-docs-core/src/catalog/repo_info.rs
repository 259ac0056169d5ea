//! Repository metadata from the hosting API

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::manifest::{string_field, string_list};

/// Statistics about a plugin's hosting repository
///
/// Every field has a default; a payload missing a key still yields a
/// complete record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    /// Star count
    pub stars: u64,

    /// Last-updated timestamp as reported by the API
    pub updated_at: String,

    /// Repository topics
    pub topics: Vec<String>,

    /// Default branch name
    pub default_branch: String,
}

impl Default for RepoInfo {
    fn default() -> Self {
        Self {
            stars: 0,
            updated_at: String::new(),
            topics: Vec::new(),
            default_branch: "main".to_string(),
        }
    }
}

impl RepoInfo {
    /// Extract repository statistics from an API response body
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(map) = value.as_object() else {
            return defaults;
        };

        Self {
            stars: map
                .get("stargazers_count")
                .and_then(Value::as_u64)
                .unwrap_or(defaults.stars),
            updated_at: string_field(map, "updated_at").unwrap_or(defaults.updated_at),
            topics: map
                .get("topics")
                .and_then(string_list)
                .unwrap_or(defaults.topics),
            default_branch: string_field(map, "default_branch").unwrap_or(defaults.default_branch),
        }
    }
}
