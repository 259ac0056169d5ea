//! Companion manifest (plugin.json) hosted in a plugin's own repository
//!
//! Remote JSON is read leniently: each key is looked up on its own and a
//! value of an unexpected type is treated as if the key were missing. A
//! manifest with one odd field still contributes everything else.

use serde_json::{Map, Value};

use super::author::AuthorInfo;
use super::marketplace::Components;

/// Fields of a companion manifest that take part in the merge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub homepage: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub author: Option<AuthorInfo>,
    pub components: Components,
}

impl RemoteManifest {
    /// Extract the known keys from a fetched JSON document
    ///
    /// Anything that is not a JSON object yields an empty manifest.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        Self {
            name: string_field(map, "name"),
            version: string_field(map, "version"),
            description: string_field(map, "description"),
            license: string_field(map, "license"),
            homepage: string_field(map, "homepage"),
            keywords: map.get("keywords").and_then(string_list),
            author: map.get("author").and_then(AuthorInfo::from_value),
            components: Components {
                commands: map.get("commands").cloned(),
                agents: map.get("agents").cloned(),
                skills: map.get("skills").cloned(),
                hooks: map.get("hooks").cloned(),
                mcp_servers: map.get("mcpServers").cloned(),
            },
        }
    }
}

pub(crate) fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Strings of a JSON array; non-string elements are skipped
pub(crate) fn string_list(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}
