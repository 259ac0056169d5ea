//! Structural checks for generated plugin pages
//!
//! Findings are warnings only. They never block writing a page and never
//! change the exit status of a generation run.

/// Sections every plugin page must contain
pub const REQUIRED_SECTIONS: &[&str] = &["## Installation", "## Links"];

/// Marker of the version badge
pub const VERSION_BADGE_MARKER: &str = "![Version]";

/// Leading frontmatter delimiter
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Check a rendered plugin page; returns one message per failed check
pub fn validate_page(markdown: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    for section in REQUIRED_SECTIONS {
        if !markdown.contains(section) {
            warnings.push(format!("Missing required section: {section}"));
        }
    }

    if !markdown.contains(VERSION_BADGE_MARKER) {
        warnings.push(format!("Missing version badge ({VERSION_BADGE_MARKER})"));
    }

    if !markdown.starts_with(FRONTMATTER_DELIMITER) {
        warnings.push(format!(
            "Missing frontmatter: document must start with '{FRONTMATTER_DELIMITER}'"
        ));
    }

    warnings
}
