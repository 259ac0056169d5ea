//! Markdown rendering
//!
//! Pages are plain string assembly. Field values are inserted verbatim;
//! nothing is escaped.

mod index;
mod page;

pub use index::{render_index_page, render_index_page_at};
pub use page::{render_plugin_page, render_plugin_page_at};

use chrono::{DateTime, Utc};

/// Format used for the trailing "Last generated" line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Horizontal rule and generation timestamp closing every page
fn footer(lines: &mut Vec<String>, generated_at: DateTime<Utc>) {
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(format!(
        "*Last generated: {}*",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
}

/// Shorten `text` to `keep` characters plus "..." when it exceeds `limit`
pub fn truncate(text: &str, limit: usize, keep: usize) -> String {
    if text.chars().count() > limit {
        let mut short: String = text.chars().take(keep).collect();
        short.push_str("...");
        short
    } else {
        text.to_string()
    }
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest
///
/// `dev-tools` becomes `Dev-Tools`, `AI_ML` becomes `Ai_Ml`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}
