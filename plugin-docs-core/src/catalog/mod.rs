//! Plugin catalog data model
//!
//! Three sources describe a plugin:
//!
//! ```text
//! .claude-plugin/marketplace.json   ← Marketplace / CatalogEntry (local, required)
//!            │
//!            ├── <repo>/plugin.json ← RemoteManifest (companion manifest, optional)
//!            └── repos/<repo>       ← RepoInfo (hosting API, optional)
//! ```
//!
//! Author values arrive either as a plain string or as a structured record.
//! Both are normalized to [`AuthorInfo`] as soon as they are parsed so that
//! the rest of the pipeline never branches on the shape.

mod author;
mod lenient;
mod manifest;
mod marketplace;
mod repo_info;

pub use author::{Author, AuthorInfo};
pub use manifest::RemoteManifest;
pub use marketplace::{CatalogEntry, Components, Marketplace, PluginSource, RepositorySource};
pub use repo_info::RepoInfo;

/// Fallback category for entries that do not declare one
pub const DEFAULT_CATEGORY: &str = "automation";

/// Fallback name for entries that do not declare one
pub const DEFAULT_PLUGIN_NAME: &str = "unknown";
