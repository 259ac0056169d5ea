//! plugin-docs library exports
//!
//! Builds static documentation pages for a plugin marketplace by combining
//! the local `marketplace.json` with companion manifests and repository
//! statistics fetched from each plugin's hosting repository.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod generator;
pub mod merge;
pub mod render;
pub mod validator;

pub use config::GeneratorConfig;
pub use error::{DocsError, FetchError, Result};
pub use generator::{GenerationReport, Generator};
