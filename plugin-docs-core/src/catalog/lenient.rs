//! Field deserializers for the local catalog
//!
//! Any syntactically valid catalog loads. A value of an unexpected type reads
//! as if the key were missing, and scalar numbers or booleans in text fields
//! are kept as their JSON text (`"version": 1` becomes `"1"`).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::author::AuthorInfo;
use super::manifest::{string_field, string_list};
use super::marketplace::{CatalogEntry, PluginSource, RepositorySource};
use super::DEFAULT_PLUGIN_NAME;

/// Text of a scalar JSON value; arrays, objects and null have none
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(&Value::deserialize(deserializer)?))
}

pub(crate) fn plugin_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_else(|| DEFAULT_PLUGIN_NAME.to_string()))
}

/// Strings of an array; anything else is an empty list
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_list(&Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn author<'de, D>(deserializer: D) -> Result<Option<AuthorInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(AuthorInfo::from_value(&Value::deserialize(deserializer)?))
}

/// A path string or a repository record; other shapes mean no source
pub(crate) fn source<'de, D>(deserializer: D) -> Result<Option<PluginSource>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(path) => Some(PluginSource::Path(path)),
        Value::Object(map) => Some(PluginSource::Repository(RepositorySource {
            source: string_field(&map, "source"),
            repo: string_field(&map, "repo"),
            url: string_field(&map, "url"),
        })),
        _ => None,
    })
}

/// Plugin entries; a missing or non-array list has no entries
///
/// Each element must still be a JSON object.
pub(crate) fn entries<'de, D>(deserializer: D) -> Result<Vec<CatalogEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}
