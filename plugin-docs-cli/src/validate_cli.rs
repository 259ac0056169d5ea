//! `plugin-docs validate` command
//!
//! Re-runs the structural page checks over an existing output directory.
//! Unlike `generate`, findings here fail the command so it can gate CI.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use plugin_docs_core::generator::INDEX_FILE;
use plugin_docs_core::validator::validate_page;
use plugin_docs_core::GeneratorConfig;

pub fn run(config: GeneratorConfig, output: Option<PathBuf>) -> Result<()> {
    let output_dir = output.unwrap_or(config.output_dir);

    if !output_dir.is_dir() {
        anyhow::bail!("Output directory not found: {}", output_dir.display());
    }

    let pages = plugin_pages(&output_dir)?;
    println!("Validating {} page(s) in {}", pages.len(), output_dir.display());

    let mut total = 0;
    for page in &pages {
        let content = std::fs::read_to_string(page)
            .with_context(|| format!("Failed to read {}", page.display()))?;

        let warnings = validate_page(&content);
        if warnings.is_empty() {
            println!("  ✓ {}", page.display());
        } else {
            println!("  ✗ {}", page.display());
            for warning in &warnings {
                println!("      - {warning}");
            }
        }
        total += warnings.len();
    }

    if total > 0 {
        anyhow::bail!("{} validation warning(s) found", total);
    }

    println!("All pages passed validation");
    Ok(())
}

/// Plugin pages directly inside `dir`, sorted, excluding the index
fn plugin_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        let path = entry.path();

        let is_markdown = path.extension().map(|e| e == "md").unwrap_or(false);
        let is_index = path.file_name().map(|n| n == INDEX_FILE).unwrap_or(false);

        if entry.file_type().is_file() && is_markdown && !is_index {
            pages.push(path.to_path_buf());
        }
    }

    pages.sort();
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_plugin_pages_skips_index_and_other_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        std::fs::write(dir.join("index.md"), "").unwrap();
        std::fs::write(dir.join("b.md"), "").unwrap();
        std::fs::write(dir.join("a.md"), "").unwrap();
        std::fs::write(dir.join("plugins.json"), "[]").unwrap();
        std::fs::create_dir(dir.join("nested")).unwrap();
        std::fs::write(dir.join("nested/c.md"), "").unwrap();

        let pages = plugin_pages(dir).unwrap();
        assert_eq!(pages, vec![dir.join("a.md"), dir.join("b.md")]);
    }

    #[test]
    fn test_run_fails_on_broken_page() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("broken.md"), "# no frontmatter").unwrap();

        let result = run(
            GeneratorConfig::default(),
            Some(temp_dir.path().to_path_buf()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_run_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = run(
            GeneratorConfig::default(),
            Some(temp_dir.path().join("absent")),
        );
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
