//! # Magentoify Core
//!
//! Mechanical patching of Rails model files generated from a Magento schema:
//! - Model file selection beneath `<project>/app/models`
//! - A line buffer with substring anchors and offset-based insertion
//! - The `PatchRule` trait and the driver that applies rules file by file
//! - The four Magento rules (table names, attribute references, entity
//!   references, entity value relations)
//!
//! Every rule works on raw lines. Nothing here parses Ruby, and none of the
//! rules are idempotent: running one twice duplicates its insertions.

#![warn(clippy::all)]

use std::path::{Path, PathBuf};

pub mod model_file;
pub mod patcher;
pub mod selector;

// Re-export commonly used types
pub use model_file::ModelFile;
pub use patcher::magento_rules::RuleKind;
pub use patcher::{ModelPatcher, PatchContext, PatchOutcome, PatchRule, PatchSummary, SourceLines};
pub use selector::select_model_files;

/// Magentoify version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the magentoify crates
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("magentoify_core=info,magentoify=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Patch run configuration
#[derive(Debug, Clone)]
pub struct MagentoifyConfig {
    /// Root of the Rails project
    pub project_root: PathBuf,
    /// Models directory, relative to the project root
    pub models_dir: PathBuf,
    /// Extension of model files, without the dot
    pub extension: String,
    /// File names that are never patched
    pub files_to_skip: Vec<String>,
    /// Enabled rules, in the order they run
    pub rules: Vec<RuleKind>,
}

impl Default for MagentoifyConfig {
    fn default() -> Self {
        Self {
            project_root: ".".into(),
            models_dir: Path::new("app").join("models"),
            extension: "rb".to_string(),
            files_to_skip: vec!["application_record.rb".to_string()],
            rules: RuleKind::DEFAULT.to_vec(),
        }
    }
}

impl MagentoifyConfig {
    /// Build a configuration for a project root.
    ///
    /// Fails with [`MagentoifyError::Config`] when no root was supplied.
    pub fn from_project<P: Into<PathBuf>>(project_root: Option<P>) -> Result<Self> {
        let project_root: PathBuf = project_root
            .map(Into::into)
            .ok_or_else(|| MagentoifyError::Config("A path to a project is required!".to_string()))?;

        Ok(Self {
            project_root,
            ..Default::default()
        })
    }

    /// Replace the enabled rules
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = RuleKind>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    /// Absolute (or root-relative) path of the models directory
    pub fn models_path(&self) -> PathBuf {
        self.project_root.join(&self.models_dir)
    }
}

/// Select the model files for `config` and run every enabled rule over them
pub fn run(config: &MagentoifyConfig) -> Result<PatchSummary> {
    let files = select_model_files(config)?;
    let mut patcher = ModelPatcher::from_kinds(&config.rules);
    patcher.patch_files(&files)
}

/// Error types for magentoify operations
#[derive(thiserror::Error, Debug)]
pub enum MagentoifyError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error on a specific path
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MagentoifyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for magentoify operations
pub type Result<T> = std::result::Result<T, MagentoifyError>;
