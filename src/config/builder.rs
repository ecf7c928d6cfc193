// src/config/builder.rs

use super::parsing::{normalize_extensions, parse_max_size};
use super::{Config, DiscoveryConfig, RepairConfig};
use crate::cli::Cli;
use crate::constants::DEFAULT_BLANK_LINE_THRESHOLD;
use crate::normalize::{BlankLineConfig, BlankLinePolicy};
use crate::errors::AppError;
use crate::rules::{built_in_rules, RepairRule, RuleTable};
use anyhow::{Context, Result};
use std::fs;

/// Builds a [`Config`] programmatically or from parsed CLI arguments.
///
/// `build()` is where startup validation lives: the rule table is checked
/// before a run can touch any file, the input path is resolved, and option
/// combinations are sanity-checked.
///
/// # Examples
///
/// ```
/// use demojibake::ConfigBuilder;
/// # use tempfile::tempdir;
/// # let temp = tempdir().unwrap();
/// let config = ConfigBuilder::new()
///     .input_path(temp.path().to_str().unwrap())
///     .extensions(vec!["tsx".to_string(), "ts".to_string()])
///     .dry_run(true)
///     .build()
///     .unwrap();
/// assert!(config.dry_run);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    input_path: Option<String>,
    max_size: Option<String>,
    no_recursive: bool,
    extensions: Option<Vec<String>>,
    exclude_extensions: Option<Vec<String>>,
    ignore_patterns: Option<Vec<String>>,
    no_gitignore: bool,
    rules: Option<Vec<RepairRule>>,
    blank_lines: Option<BlankLinePolicy>,
    blank_line_threshold: Option<f64>,
    latin1_fallback: bool,
    dry_run: bool,
    #[cfg(feature = "json-report")]
    report_json: bool,
}

impl ConfigBuilder {
    /// Creates a builder with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: Some(cli.input_path),
            max_size: cli.max_size,
            no_recursive: cli.no_recursive,
            extensions: cli.extensions,
            exclude_extensions: cli.exclude_extensions,
            ignore_patterns: cli.ignore_patterns,
            no_gitignore: cli.no_gitignore,
            rules: None,
            blank_lines: cli.blank_lines,
            blank_line_threshold: Some(cli.blank_line_threshold),
            latin1_fallback: cli.latin1,
            dry_run: cli.dry_run,
            #[cfg(feature = "json-report")]
            report_json: cli.report_json,
        }
    }

    /// Sets the directory or file to process.
    pub fn input_path(mut self, path: &str) -> Self {
        self.input_path = Some(path.to_string());
        self
    }

    /// Restricts processing to files with these extensions.
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    /// Excludes files with these extensions.
    pub fn exclude_extensions(mut self, extensions: Vec<String>) -> Self {
        self.exclude_extensions = Some(extensions);
        self
    }

    /// Ignores files matching these glob patterns (relative to the input path).
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = Some(patterns);
        self
    }

    /// Sets a maximum file size (human-readable, e.g. "1M").
    pub fn max_size(mut self, size: &str) -> Self {
        self.max_size = Some(size.to_string());
        self
    }

    /// Disables recursion into subdirectories.
    pub fn no_recursive(mut self, value: bool) -> Self {
        self.no_recursive = value;
        self
    }

    /// Disables `.gitignore` handling.
    pub fn no_gitignore(mut self, value: bool) -> Self {
        self.no_gitignore = value;
        self
    }

    /// Replaces the built-in rule catalog. The rules are validated in
    /// `build()`.
    pub fn rules(mut self, rules: Vec<RepairRule>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Enables blank-line normalization under the given policy.
    pub fn blank_lines(mut self, policy: BlankLinePolicy) -> Self {
        self.blank_lines = Some(policy);
        self
    }

    /// Overrides the blank-line trigger ratio.
    pub fn blank_line_threshold(mut self, threshold: f64) -> Self {
        self.blank_line_threshold = Some(threshold);
        self
    }

    /// Reinterprets non-UTF-8 files as Latin-1 instead of decoding lossily.
    pub fn latin1_fallback(mut self, value: bool) -> Self {
        self.latin1_fallback = value;
        self
    }

    /// Reports without writing.
    pub fn dry_run(mut self, value: bool) -> Self {
        self.dry_run = value;
        self
    }

    /// Resolves, validates and assembles the final [`Config`].
    ///
    /// # Errors
    /// Fails when the input path does not exist, the blank-line threshold is
    /// out of range, or the rule table is invalid. Rule-table validation
    /// happening here is what guarantees a bad table aborts the run before
    /// any file is touched.
    pub fn build(self) -> Result<Config> {
        let base_path_display = self.input_path.unwrap_or_else(|| ".".to_string());
        let input_path = fs::canonicalize(&base_path_display)
            .with_context(|| format!("Input path '{}' is not accessible", base_path_display))?;
        let input_is_file = input_path.is_file();

        let threshold = self
            .blank_line_threshold
            .unwrap_or(DEFAULT_BLANK_LINE_THRESHOLD);
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(AppError::ConfigError(format!(
                "blank-line threshold must be between 0 and 1 (exclusive), got {}",
                threshold
            ))
            .into());
        }

        let rules = match self.rules {
            Some(rules) => RuleTable::new(rules)?,
            None => built_in_rules().clone(),
        };

        Ok(Config {
            input_path,
            base_path_display,
            input_is_file,
            discovery: DiscoveryConfig {
                max_size: parse_max_size(self.max_size)?,
                recursive: !self.no_recursive,
                extensions: normalize_extensions(self.extensions),
                exclude_extensions: normalize_extensions(self.exclude_extensions),
                ignore_patterns: self.ignore_patterns,
                use_gitignore: !self.no_gitignore,
            },
            repair: RepairConfig {
                rules,
                blank_lines: self
                    .blank_lines
                    .map(|policy| BlankLineConfig { policy, threshold }),
                latin1_fallback: self.latin1_fallback,
            },
            dry_run: self.dry_run,
            #[cfg(feature = "json-report")]
            report_json: self.report_json,
        })
    }
}
