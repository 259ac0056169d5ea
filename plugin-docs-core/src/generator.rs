//! Generation pipeline
//!
//! ```text
//! marketplace.json ─► for each plugin: fetch ─► merge ─► render ─► validate ─► write
//!                     then once:       index.md (+ plugins.json)
//! ```
//!
//! Plugins are processed strictly one at a time. Only the loader and file
//! writes can fail the run; fetch failures degrade to catalog-only data and
//! validation findings are reported after everything is written. An entry
//! whose name cannot be used as a file name inside the output directory is
//! skipped with a warning.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::catalog::{CatalogEntry, Marketplace};
use crate::config::GeneratorConfig;
use crate::error::{DocsError, Result};
use crate::fetch::Fetcher;
use crate::merge::{merge, NormalizedRecord};
use crate::render::{render_index_page, render_plugin_page};
use crate::validator::validate_page;

/// File name of the overview page
pub const INDEX_FILE: &str = "index.md";

/// File name of the optional normalized-record dump
pub const RECORDS_FILE: &str = "plugins.json";

/// Outcome for a single plugin
#[derive(Debug, Clone)]
pub struct ProcessedPlugin {
    pub record: NormalizedRecord,

    /// Whether a companion manifest was found
    pub manifest_found: bool,

    /// Where the page was written
    pub page_path: PathBuf,
}

/// A validation finding tied to the page it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWarning {
    pub page: PathBuf,
    pub message: String,
}

/// Summary of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub plugins: Vec<ProcessedPlugin>,
    pub index_path: Option<PathBuf>,
    pub records_path: Option<PathBuf>,
    pub warnings: Vec<PageWarning>,

    /// Names of entries that were not written because of their name
    pub skipped: Vec<String>,
}

impl GenerationReport {
    /// Every file written during the run, sorted
    pub fn written_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .plugins
            .iter()
            .map(|p| p.page_path.clone())
            .chain(self.index_path.clone())
            .chain(self.records_path.clone())
            .collect();
        files.sort();
        files.dedup();
        files
    }

    pub fn records(&self) -> Vec<&NormalizedRecord> {
        self.plugins.iter().map(|p| &p.record).collect()
    }
}

/// Runs the documentation pipeline
pub struct Generator {
    config: GeneratorConfig,
    /// `None` when running offline
    fetcher: Option<Fetcher>,
    emit_records: bool,
}

impl Generator {
    /// Create a generator that fetches remote metadata over HTTPS
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let fetcher = Fetcher::new(config.clone())?;
        Ok(Self::with_fetcher(fetcher))
    }

    /// Create a generator that uses a prepared fetcher (and its config)
    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        Self {
            config: fetcher.config().clone(),
            fetcher: Some(fetcher),
            emit_records: false,
        }
    }

    /// Create a generator that never touches the network
    pub fn offline(config: GeneratorConfig) -> Self {
        Self {
            config,
            fetcher: None,
            emit_records: false,
        }
    }

    /// Also write the normalized records to `plugins.json`
    pub fn emit_records(mut self, enabled: bool) -> Self {
        self.emit_records = enabled;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the whole pipeline
    pub async fn run(&self) -> Result<GenerationReport> {
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir).map_err(|source| DocsError::CreateOutputDir {
            path: output_dir.clone(),
            source,
        })?;

        info!("Loading {}...", self.config.marketplace_path.display());
        let marketplace = Marketplace::load(&self.config.marketplace_path)?;

        let mut report = GenerationReport::default();

        if marketplace.plugins.is_empty() {
            warn!(
                "No plugins found in {}",
                self.config.marketplace_path.display()
            );
            return Ok(report);
        }

        info!("Found {} plugin(s)", marketplace.plugins.len());

        for entry in &marketplace.plugins {
            if !is_page_stem(&entry.name) {
                warn!(
                    "Skipping plugin {:?}: name is not usable as a file name",
                    entry.name
                );
                report.skipped.push(entry.name.clone());
                continue;
            }

            let processed = self.process_plugin(entry, &mut report.warnings).await?;
            report.plugins.push(processed);
        }

        info!("Generating plugin index...");
        let records: Vec<NormalizedRecord> =
            report.plugins.iter().map(|p| p.record.clone()).collect();
        let index = render_index_page(&records, &marketplace, &self.config.marketplace_repo);
        let index_path = output_dir.join(INDEX_FILE);
        write_file(&index_path, &index)?;
        report.index_path = Some(index_path);

        if self.emit_records {
            let json = serde_json::to_string_pretty(&records).map_err(DocsError::SerializeRecords)?;
            let records_path = output_dir.join(RECORDS_FILE);
            write_file(&records_path, &json)?;
            report.records_path = Some(records_path);
        }

        let written = report.written_files();
        info!(
            "Done! Generated {} files in {}/",
            written.len(),
            output_dir.display()
        );
        for file in &written {
            info!("  - {}", file.display());
        }

        if !report.warnings.is_empty() {
            warn!("Validation warnings ({}):", report.warnings.len());
            for warning in &report.warnings {
                warn!("  {}: {}", warning.page.display(), warning.message);
            }
        }

        Ok(report)
    }

    async fn process_plugin(
        &self,
        entry: &CatalogEntry,
        warnings: &mut Vec<PageWarning>,
    ) -> Result<ProcessedPlugin> {
        info!("Processing: {}", entry.name);

        let repo = entry.repo();
        let mut manifest = None;
        let mut repo_info = None;

        if let Some(fetcher) = self.fetcher.as_ref().filter(|_| !repo.is_empty()) {
            info!("  Fetching plugin.json from {}...", repo);
            manifest = fetcher.fetch_companion_manifest(repo).await;
            if manifest.is_some() {
                info!("  Found plugin.json");
            } else {
                info!("  No plugin.json found (using marketplace metadata only)");
            }

            info!("  Fetching repo info...");
            repo_info = fetcher.fetch_repo_info(repo).await;
        }

        let record = merge(entry, manifest.as_ref(), repo_info.as_ref());
        let page = render_plugin_page(&record);
        let page_path = self.config.output_dir.join(format!("{}.md", record.name()));

        warnings.extend(validate_page(&page).into_iter().map(|message| PageWarning {
            page: page_path.clone(),
            message,
        }));

        info!("  Writing {}...", page_path.display());
        write_file(&page_path, &page)?;

        Ok(ProcessedPlugin {
            record,
            manifest_found: manifest.is_some(),
            page_path,
        })
    }
}

/// Whether `name` can be used as `<name>.md` directly inside the output
/// directory
fn is_page_stem(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(&['/', '\\', '\0'][..])
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| DocsError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
