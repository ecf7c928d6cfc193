//! Defines the core `Config` struct and related types for application
//! configuration.
//!
//! This module consolidates all the settings parsed and validated from the
//! CLI, making them available to the rest of the application in a structured
//! and type-safe manner. Building a `Config` validates the repair-rule
//! table, so a malformed table aborts a run before any file is touched.

use crate::normalize::BlankLineConfig;
use crate::rules::RuleTable;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;

/// Configuration options related to file discovery and filtering.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Maximum file size in bytes. Files larger than this will be skipped.
    pub max_size: Option<u128>,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// List of file extensions (lowercase) to include. If `Some`, only files with these extensions are processed.
    pub extensions: Option<Vec<String>>,
    /// List of file extensions (lowercase) to exclude. Takes precedence over `extensions`.
    pub exclude_extensions: Option<Vec<String>>,
    /// List of custom ignore patterns (glob syntax) provided via `-i`.
    pub ignore_patterns: Option<Vec<String>>,
    /// Whether to respect `.gitignore`, `.ignore`, and other VCS ignore files.
    pub use_gitignore: bool,
}

impl DiscoveryConfig {
    #[doc(hidden)]
    pub fn default_for_test() -> Self {
        Self {
            max_size: None,
            recursive: true,
            extensions: None,
            exclude_extensions: None,
            ignore_patterns: None,
            use_gitignore: true,
        }
    }
}

/// Configuration options for the repair stage.
#[derive(Debug, Clone)]
pub struct RepairConfig {
    /// The validated, ordered rule table.
    pub rules: RuleTable,
    /// Blank-line normalization settings. `None` disables the pass; there
    /// is deliberately no default policy.
    pub blank_lines: Option<BlankLineConfig>,
    /// Reinterpret bytes as Latin-1 when strict UTF-8 decode fails, instead
    /// of taking the lossy path.
    pub latin1_fallback: bool,
}

/// The fully-resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The canonicalized path to the directory or file to process.
    pub input_path: PathBuf,
    /// The input path as the user supplied it, for display.
    pub base_path_display: String,
    /// Whether the input path is a single file rather than a directory.
    pub input_is_file: bool,
    /// Configuration for the discovery stage.
    pub discovery: DiscoveryConfig,
    /// Configuration for the repair stage.
    pub repair: RepairConfig,
    /// If `true`, report what would be repaired without writing anything.
    pub dry_run: bool,
    #[cfg(feature = "json-report")]
    /// Emit machine-readable per-file reports instead of the text summary.
    pub report_json: bool,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_path: PathBuf::from("."),
            base_path_display: ".".to_string(),
            input_is_file: false,
            discovery: DiscoveryConfig::default_for_test(),
            repair: RepairConfig {
                rules: crate::rules::built_in_rules().clone(),
                blank_lines: None,
                latin1_fallback: false,
            },
            dry_run: false,
            #[cfg(feature = "json-report")]
            report_json: false,
        }
    }
}
