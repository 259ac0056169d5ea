//! Plugin author information

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::manifest::string_field;

const KNOWN_KEYS: [&str; 3] = ["name", "email", "url"];

/// Author as written in a catalog entry or companion manifest
///
/// Supports both:
/// - `"author": "Jane Doe"`
/// - `"author": { "name": "Jane Doe", "url": "https://..." }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Plain(String),
    Named(AuthorInfo),
}

/// Normalized author record
///
/// Keys other than `name`, `email` and `url` are kept in `extra` and written
/// back out alongside them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Author> for AuthorInfo {
    fn from(author: Author) -> Self {
        match author {
            Author::Plain(name) => AuthorInfo {
                name: Some(name),
                ..Default::default()
            },
            Author::Named(info) => info,
        }
    }
}

impl AuthorInfo {
    /// Shallow key union; keys present in `other` win
    pub fn merge(&mut self, other: AuthorInfo) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.email.is_some() {
            self.email = other.email;
        }
        if other.url.is_some() {
            self.url = other.url;
        }
        self.extra.extend(other.extra);
    }

    /// Build from an arbitrary JSON value, ignoring anything that is not a
    /// string or an object
    ///
    /// A non-string `name`, `email` or `url` is dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Author::Plain(name.clone()).into()),
            Value::Object(map) => Some(AuthorInfo {
                name: string_field(map, "name"),
                email: string_field(map, "email"),
                url: string_field(map, "url"),
                extra: map
                    .iter()
                    .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            }),
            _ => None,
        }
    }
}
