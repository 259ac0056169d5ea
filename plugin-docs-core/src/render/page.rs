//! Per-plugin documentation page (`<name>.md`)

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

use super::footer;
use crate::merge::NormalizedRecord;

const BADGE_BASE_URL: &str = "https://img.shields.io/badge";
const DEFAULT_DESCRIPTION: &str = "No description available.";
const DEFAULT_LICENSE: &str = "MIT";
const DEFAULT_VERSION: &str = "N/A";
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Second column for every row of the command table
const COMMAND_PLACEHOLDER: &str = "See plugin documentation";

/// Render the documentation page for one plugin, stamped with the current time
pub fn render_plugin_page(record: &NormalizedRecord) -> String {
    render_plugin_page_at(record, Utc::now())
}

/// Render the documentation page for one plugin with a fixed timestamp
pub fn render_plugin_page_at(record: &NormalizedRecord, generated_at: DateTime<Utc>) -> String {
    let entry = &record.entry;
    let name = entry.name.as_str();
    let description = entry.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION);
    let version = entry.version.as_deref().unwrap_or(DEFAULT_VERSION);
    let license = entry.license.as_deref().unwrap_or(DEFAULT_LICENSE);
    let category = entry.category();
    let repo = entry.repo();

    let mut lines = vec![
        "---".to_string(),
        format!("title: {name}"),
        format!("description: {description}"),
        "---".to_string(),
        String::new(),
        format!("# {name}"),
        String::new(),
        format!("![Version]({BADGE_BASE_URL}/version-{version}-blue)"),
        format!("![License]({BADGE_BASE_URL}/license-{license}-green)"),
        format!("![Category]({BADGE_BASE_URL}/category-{category}-orange)"),
        String::new(),
        format!("> {description}"),
        String::new(),
    ];

    let components = &entry.components;
    if components.any_listed() {
        let labels: Vec<&str> = [
            (components.commands.is_some(), ":material-console: Commands"),
            (components.skills.is_some(), ":material-puzzle: Skills"),
            (components.agents.is_some(), ":material-robot: Agents"),
            (components.mcp_servers.is_some(), ":material-server: MCP Servers"),
        ]
        .into_iter()
        .filter_map(|(present, label)| present.then_some(label))
        .collect();

        lines.push("## Components".to_string());
        lines.push(String::new());
        lines.push(labels.join(" | "));
        lines.push(String::new());
    }

    lines.extend([
        "## Installation".to_string(),
        String::new(),
        "=== \"From Marketplace\"".to_string(),
        String::new(),
        "    ```bash".to_string(),
        format!("    /plugin install {name}"),
        "    ```".to_string(),
        String::new(),
    ]);

    if !repo.is_empty() {
        lines.extend([
            "=== \"Direct from GitHub\"".to_string(),
            String::new(),
            "    ```bash".to_string(),
            format!("    /plugin install {repo}"),
            "    ```".to_string(),
            String::new(),
        ]);
    }

    if let Some(commands) = &components.commands {
        lines.push("## Available Commands".to_string());
        lines.push(String::new());

        match commands.as_array().filter(|items| !items.is_empty()) {
            Some(items) => {
                lines.push("| Command | Description |".to_string());
                lines.push("|---------|-------------|".to_string());
                for command in items.iter().filter_map(|c| c.as_str()) {
                    lines.push(format!("| `{command}` | {COMMAND_PLACEHOLDER} |"));
                }
            }
            None => {
                lines.push(
                    "Commands are provided by this plugin; see the source repository for details."
                        .to_string(),
                );
            }
        }
        lines.push(String::new());
    }

    lines.push("## Requirements".to_string());
    lines.push(String::new());
    lines.push("- Claude Code installed and configured".to_string());
    if needs_browser(name, description) {
        lines.push("- Claude in Chrome browser extension".to_string());
    }
    lines.push(String::new());

    let tags: BTreeSet<&str> = entry
        .tags
        .iter()
        .chain(entry.keywords.iter())
        .map(String::as_str)
        .collect();
    if !tags.is_empty() {
        let spans: Vec<String> = tags.iter().map(|tag| format!("`{tag}`")).collect();
        lines.push("## Tags".to_string());
        lines.push(String::new());
        lines.push(spans.join(" "));
        lines.push(String::new());
    }

    lines.push("## Links".to_string());
    lines.push(String::new());

    if !repo.is_empty() {
        lines.push(format!(
            "- :material-github: [Source Repository](https://github.com/{repo})"
        ));
    }

    let author = entry.author.as_ref();
    let author_name = author
        .and_then(|a| a.name.as_deref())
        .unwrap_or(UNKNOWN_AUTHOR);
    let author_url = author.and_then(|a| a.url.as_deref()).unwrap_or("");

    if !author_url.is_empty() {
        lines.push(format!(
            "- :material-account: [Author: {author_name}]({author_url})"
        ));
    } else if !author_name.is_empty() && author_name != UNKNOWN_AUTHOR {
        lines.push(format!("- :material-account: Author: {author_name}"));
    }

    lines.push(String::new());
    footer(&mut lines, generated_at);

    lines.join("\n")
}

/// Whether the plugin appears to drive a browser
fn needs_browser(name: &str, description: &str) -> bool {
    let name = name.to_lowercase();
    let description = description.to_lowercase();
    ["chrome", "browser"]
        .iter()
        .any(|needle| name.contains(needle) || description.contains(needle))
}
