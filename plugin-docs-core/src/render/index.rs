//! Marketplace overview page (`index.md`)

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::{footer, title_case, truncate};
use crate::catalog::Marketplace;
use crate::merge::NormalizedRecord;

const DEFAULT_DESCRIPTION: &str = "No description";

/// Render the overview page, stamped with the current time
pub fn render_index_page(
    records: &[NormalizedRecord],
    marketplace: &Marketplace,
    marketplace_repo: &str,
) -> String {
    render_index_page_at(records, marketplace, marketplace_repo, Utc::now())
}

/// Render the overview page with a fixed timestamp
///
/// Table descriptions are cut at 60 characters, category list descriptions
/// at 80. Categories are listed in ascending order; plugins within a
/// category keep catalog order.
pub fn render_index_page_at(
    records: &[NormalizedRecord],
    marketplace: &Marketplace,
    marketplace_repo: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let marketplace_name = marketplace.display_name();

    let mut lines = vec![
        "---".to_string(),
        "title: Plugin Overview".to_string(),
        format!("description: All available plugins in the {marketplace_name} marketplace"),
        "---".to_string(),
        String::new(),
        "# Plugin Overview".to_string(),
        String::new(),
        format!("*Marketplace Version: {}*", marketplace.display_version()),
        String::new(),
        format!("This page lists all plugins available in the {marketplace_name} marketplace."),
        String::new(),
        "## Available Plugins".to_string(),
        String::new(),
        "| Plugin | Version | Category | Description |".to_string(),
        "|--------|---------|----------|-------------|".to_string(),
    ];

    for record in records {
        let entry = &record.entry;
        let name = entry.name.as_str();
        let description = entry.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
        lines.push(format!(
            "| [{name}]({name}.md) | {} | {} | {} |",
            entry.version.as_deref().unwrap_or("N/A"),
            entry.category(),
            truncate(description, 60, 57),
        ));
    }

    lines.extend([
        String::new(),
        "## Quick Install".to_string(),
        String::new(),
        "```bash".to_string(),
        "# Add this marketplace".to_string(),
        format!("/plugin marketplace add {marketplace_repo}"),
        String::new(),
        "# Install any plugin".to_string(),
        "/plugin install <plugin-name>".to_string(),
        "```".to_string(),
        String::new(),
        "## Plugin Categories".to_string(),
        String::new(),
    ]);

    let mut categories: BTreeMap<&str, Vec<&NormalizedRecord>> = BTreeMap::new();
    for record in records {
        categories
            .entry(record.entry.category())
            .or_default()
            .push(record);
    }

    for (category, members) in &categories {
        lines.push(format!("### {}", title_case(category)));
        lines.push(String::new());
        for record in members {
            let name = record.name();
            let description = record
                .entry
                .description
                .as_deref()
                .unwrap_or(DEFAULT_DESCRIPTION);
            lines.push(format!(
                "- [{name}]({name}.md) - {}",
                truncate(description, 80, 77)
            ));
        }
        lines.push(String::new());
    }

    footer(&mut lines, generated_at);

    lines.join("\n")
}
