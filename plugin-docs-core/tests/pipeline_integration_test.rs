//! End-to-end tests for the generation pipeline
//!
//! The network is replaced by a scripted transport; everything else
//! (loading, merging, rendering, writing) runs for real in a temp directory.

use anyhow::Result;
use async_trait::async_trait;
use plugin_docs_core::catalog::{Marketplace, RepoInfo};
use plugin_docs_core::fetch::{Fetcher, HttpResponse, HttpTransport};
use plugin_docs_core::{DocsError, FetchError, Generator, GeneratorConfig};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Transport answering from a fixed table; anything else is a 404
#[derive(Default)]
struct ScriptedTransport {
    responses: HashMap<String, HttpResponse>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    fn with(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), HttpResponse::new(status, body));
        self
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        Ok(self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(404, "404: Not Found")))
    }
}

const MARKETPLACE: &str = r#"{
  "name": "f5-distributed-cloud-marketplace",
  "version": "1.4.0",
  "plugins": [
    {
      "name": "xc-console",
      "description": "Catalog description of the console plugin",
      "version": "0.1.0",
      "license": "MIT",
      "keywords": ["console"],
      "author": {"name": "A", "url": "https://example.com/a"},
      "category": "automation",
      "source": {"source": "github", "repo": "acme/xc-console"}
    },
    {
      "name": "xc-api",
      "description": "Catalog description of the API plugin",
      "version": "0.2.0",
      "category": "development",
      "source": {"source": "github", "repo": "acme/xc-api"}
    }
  ]
}"#;

const REPO_INFO: &str = r#"{
  "full_name": "acme/xc-console",
  "stargazers_count": 17,
  "updated_at": "2025-05-06T07:08:09Z",
  "topics": ["f5", "xc"],
  "default_branch": "trunk"
}"#;

fn setup(dir: &Path) -> Result<GeneratorConfig> {
    let config = GeneratorConfig {
        marketplace_path: dir.join(".claude-plugin/marketplace.json"),
        output_dir: dir.join("docs/plugins"),
        ..Default::default()
    };
    std::fs::create_dir_all(dir.join(".claude-plugin"))?;
    std::fs::write(&config.marketplace_path, MARKETPLACE)?;
    Ok(config)
}

fn generator(config: GeneratorConfig, transport: ScriptedTransport) -> Generator {
    Generator::with_fetcher(Fetcher::with_transport(config, Box::new(transport)))
}

#[tokio::test]
async fn test_missing_manifest_with_repo_info() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = setup(temp_dir.path())?;
    let transport = ScriptedTransport::default().with(
        "https://api.github.com/repos/acme/xc-console",
        200,
        REPO_INFO,
    );
    let requested = transport.requested.clone();

    let report = generator(config.clone(), transport).run().await?;

    let raw = Marketplace::load(&config.marketplace_path)?;
    let console = &report.plugins[0];
    assert!(!console.manifest_found);
    assert_eq!(console.record.entry, raw.plugins[0]);
    assert_eq!(
        console.record.repo_info,
        Some(RepoInfo {
            stars: 17,
            updated_at: "2025-05-06T07:08:09Z".to_string(),
            topics: vec!["f5".to_string(), "xc".to_string()],
            default_branch: "trunk".to_string(),
        })
    );

    // Four manifest candidates, then repo info, for each plugin in order
    let requested = requested.lock().unwrap();
    assert_eq!(requested.len(), 10);
    assert_eq!(
        requested[0],
        "https://raw.githubusercontent.com/acme/xc-console/main/.claude-plugin/plugin.json"
    );
    assert_eq!(requested[4], "https://api.github.com/repos/acme/xc-console");
    assert_eq!(
        requested[5],
        "https://raw.githubusercontent.com/acme/xc-api/main/.claude-plugin/plugin.json"
    );

    // The second plugin's repo info 404'd, so it has no stats
    assert!(report.plugins[1].record.repo_info.is_none());
    Ok(())
}

#[tokio::test]
async fn test_pages_without_manifest_show_catalog_values() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = setup(temp_dir.path())?;

    generator(config.clone(), ScriptedTransport::default())
        .run()
        .await?;

    let page = std::fs::read_to_string(config.output_dir.join("xc-console.md"))?;
    assert!(page.contains("description: Catalog description of the console plugin"));
    assert!(page.contains("version-0.1.0-blue"));
    assert!(page.contains("license-MIT-green"));
    assert!(page.contains("`console`"));
    assert!(page.contains("[Author: A](https://example.com/a)"));
    Ok(())
}

#[tokio::test]
async fn test_manifest_values_win_on_rendered_page() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = setup(temp_dir.path())?;
    let transport = ScriptedTransport::default().with(
        "https://raw.githubusercontent.com/acme/xc-console/master/plugin.json",
        200,
        r#"{"version": "3.0.0", "author": "B", "commands": ["/xc:console login"]}"#,
    );

    let report = generator(config.clone(), transport).run().await?;
    assert!(report.plugins[0].manifest_found);

    let page = std::fs::read_to_string(config.output_dir.join("xc-console.md"))?;
    assert!(page.contains("![Version](https://img.shields.io/badge/version-3.0.0-blue)"));
    assert!(!page.contains("version-0.1.0"));
    assert!(page.contains("[Author: B](https://example.com/a)"));
    assert!(page.contains("| `/xc:console login` |"));

    let index = std::fs::read_to_string(config.output_dir.join("index.md"))?;
    assert!(index.contains("| [xc-console](xc-console.md) | 3.0.0 | automation |"));
    assert!(index.contains("### Development"));
    Ok(())
}

#[tokio::test]
async fn test_insecure_hosts_degrade_to_catalog_data() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = setup(temp_dir.path())?;
    config.raw_base_url = "http://raw.example.com".to_string();
    config.api_base_url = "http://api.example.com/repos".to_string();
    let transport = ScriptedTransport::default();
    let requested = transport.requested.clone();

    let report = generator(config, transport).run().await?;

    assert!(requested.lock().unwrap().is_empty());
    assert_eq!(report.plugins.len(), 2);
    assert!(report.plugins.iter().all(|p| p.record.repo_info.is_none()));
    Ok(())
}

#[tokio::test]
async fn test_generated_pages_pass_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = setup(temp_dir.path())?;

    let report = generator(config, ScriptedTransport::default()).run().await?;
    assert!(report.warnings.is_empty());
    assert_eq!(report.written_files().len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_malformed_marketplace_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = setup(temp_dir.path())?;
    std::fs::write(&config.marketplace_path, "{\"plugins\": [")?;

    let result = generator(config, ScriptedTransport::default()).run().await;
    assert!(matches!(result, Err(DocsError::MarketplaceParse { .. })));
    Ok(())
}
