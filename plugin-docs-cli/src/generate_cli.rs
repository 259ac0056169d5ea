//! `plugin-docs generate` command

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use plugin_docs_core::generator::ProcessedPlugin;
use plugin_docs_core::{GenerationReport, Generator, GeneratorConfig};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to marketplace.json
    #[clap(long)]
    pub marketplace: Option<PathBuf>,

    /// Output directory for generated pages
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[clap(long)]
    pub timeout: Option<u64>,

    /// Skip companion manifest and repository info lookups
    #[clap(long)]
    pub offline: bool,

    /// Also write the merged records to plugins.json
    #[clap(long)]
    pub emit_json: bool,
}

impl GenerateArgs {
    /// Apply CLI overrides on top of the loaded config
    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(path) = &self.marketplace {
            config.marketplace_path = path.clone();
        }
        if let Some(dir) = &self.output {
            config.output_dir = dir.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        config
    }
}

/// Table row for the generation summary
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Plugin")]
    name: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "plugin.json")]
    manifest: String,
    #[tabled(rename = "Stars")]
    stars: String,
}

impl From<&ProcessedPlugin> for SummaryRow {
    fn from(plugin: &ProcessedPlugin) -> Self {
        let entry = &plugin.record.entry;
        Self {
            name: entry.name.clone(),
            version: entry.version.clone().unwrap_or_else(|| "N/A".to_string()),
            category: entry.category().to_string(),
            manifest: if plugin.manifest_found { "yes" } else { "no" }.to_string(),
            stars: plugin
                .record
                .repo_info
                .as_ref()
                .map(|info| info.stars.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub async fn run(config: GeneratorConfig, args: GenerateArgs) -> Result<()> {
    let config = args.apply(config);

    let generator = if args.offline {
        Generator::offline(config)
    } else {
        Generator::new(config).context("Failed to set up remote fetching")?
    };

    let report = generator
        .emit_records(args.emit_json)
        .run()
        .await
        .context("Documentation generation failed")?;

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    for name in &report.skipped {
        println!("Skipped {name:?}: name is not usable as a file name");
    }

    if report.plugins.is_empty() {
        return;
    }

    let rows: Vec<SummaryRow> = report.plugins.iter().map(SummaryRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    println!("{table}");

    if !report.warnings.is_empty() {
        println!(
            "\n{} validation warning(s); pages were written anyway.",
            report.warnings.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overrides_replace_config_values() {
        let args = GenerateArgs {
            marketplace: Some(PathBuf::from("m.json")),
            output: None,
            timeout: Some(3),
            offline: false,
            emit_json: false,
        };

        let config = args.apply(GeneratorConfig::default());
        assert_eq!(config.marketplace_path, PathBuf::from("m.json"));
        assert_eq!(config.output_dir, PathBuf::from("docs/plugins"));
        assert_eq!(config.timeout_seconds, 3);
    }
}
