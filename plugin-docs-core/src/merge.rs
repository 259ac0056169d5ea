//! Metadata merge
//!
//! Precedence, highest first:
//! 1. Companion manifest, for version/description/license/keywords/homepage
//!    (only non-empty values), author (key union) and component fields
//!    (replaced wholesale)
//! 2. Catalog entry
//!
//! Repository info never overlaps with either; it is attached as-is.

use serde::Serialize;

use crate::catalog::{CatalogEntry, RemoteManifest, RepoInfo};

/// Render-ready plugin record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    #[serde(flatten)]
    pub entry: CatalogEntry,

    /// Hosting repository statistics, when the lookup succeeded
    #[serde(flatten)]
    pub repo_info: Option<RepoInfo>,
}

impl NormalizedRecord {
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}

/// Combine a catalog entry with the optional remote sources
pub fn merge(
    entry: &CatalogEntry,
    manifest: Option<&RemoteManifest>,
    info: Option<&RepoInfo>,
) -> NormalizedRecord {
    let mut merged = entry.clone();

    if let Some(manifest) = manifest {
        overlay(&mut merged.version, &manifest.version);
        overlay(&mut merged.description, &manifest.description);
        overlay(&mut merged.license, &manifest.license);
        overlay(&mut merged.homepage, &manifest.homepage);

        if let Some(keywords) = manifest.keywords.as_ref().filter(|k| !k.is_empty()) {
            merged.keywords = keywords.clone();
        }

        if let Some(author) = &manifest.author {
            merged
                .author
                .get_or_insert_with(Default::default)
                .merge(author.clone());
        }

        let components = &manifest.components;
        replace_if_defined(&mut merged.components.commands, &components.commands);
        replace_if_defined(&mut merged.components.agents, &components.agents);
        replace_if_defined(&mut merged.components.skills, &components.skills);
        replace_if_defined(&mut merged.components.hooks, &components.hooks);
        replace_if_defined(&mut merged.components.mcp_servers, &components.mcp_servers);
    }

    NormalizedRecord {
        entry: merged,
        repo_info: info.cloned(),
    }
}

/// Overwrite only with a non-empty value
fn overlay(target: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
        *target = Some(value.clone());
    }
}

fn replace_if_defined<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        target.clone_from(value);
    }
}
