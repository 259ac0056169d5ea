//! plugin-docs - Marketplace plugin documentation generator
//!
//! Reads `.claude-plugin/marketplace.json`, enriches each plugin with its
//! companion `plugin.json` and repository info, and writes one markdown page
//! per plugin plus an overview `index.md`.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

use plugin_docs_core::GeneratorConfig;

mod generate_cli;
mod validate_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "plugin-docs",
    about = "Generate marketplace plugin documentation from marketplace.json",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON lines
    #[clap(long, global = true)]
    log_json: bool,

    /// YAML configuration file (hosts, paths, timeout)
    #[clap(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate plugin pages and the overview index
    Generate(generate_cli::GenerateArgs),

    /// Check previously generated plugin pages
    Validate {
        /// Directory containing generated pages
        #[clap(long)]
        output: Option<PathBuf>,
    },
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr; stdout is reserved for the summary table.
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load the config file if one was given, defaults otherwise
fn load_config(path: Option<&PathBuf>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => Ok(GeneratorConfig::load_from_path(path)?),
        None => Ok(GeneratorConfig::default()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.log_json);

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Fatal: {:#}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Generate(args) => generate_cli::run(config, args).await,
        Command::Validate { output } => validate_cli::run(config, output),
    };

    if let Err(e) = result {
        error!("Fatal: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
