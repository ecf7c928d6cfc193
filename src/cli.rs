// src/cli.rs

use crate::normalize::BlankLinePolicy;
use clap::Parser;

/// Detects and repairs text-encoding corruption across a source tree.
///
/// demojibake recursively walks a directory (respecting .gitignore rules),
/// finds files whose text was damaged by encoding mistakes - stray byte-order
/// marks, Unicode replacement characters, one- or two-layer mojibake of
/// characters like emoji or the copyright sign - and rewrites them in place
/// with the intended characters. Running it again on a repaired tree changes
/// nothing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the directory or file to repair.
    #[arg(default_value = ".")]
    pub input_path: String,

    // --- Filtering Options ---
    /// Maximum file size to consider (e.g., "1M", "512k"). Larger files are skipped.
    #[arg(short = 'm', long, value_name = "BYTES")]
    pub max_size: Option<String>,

    /// Do not recurse into subdirectories.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub no_recursive: bool,

    /// Repair only files with these extensions (case-insensitive, repeatable).
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Exclude files with these extensions (case-insensitive, repeatable).
    #[arg(short = 'x', long = "exclude-ext", value_name = "EXT", num_args = 1..)]
    pub exclude_extensions: Option<Vec<String>>,

    /// Ignore files/directories matching these glob patterns (relative to the input path, repeatable).
    #[arg(short = 'i', long = "ignore", value_name = "GLOB", num_args = 1..)]
    pub ignore_patterns: Option<Vec<String>>,

    /// Do not respect .gitignore, .ignore, or other VCS ignore files.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub no_gitignore: bool,

    // --- Repair Options ---
    /// Reinterpret non-UTF-8 files as Latin-1 before re-detecting mojibake,
    /// instead of decoding them lossily.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub latin1: bool,

    /// Normalize pathological blank-line inflation under the given policy.
    /// 'collapse' reduces each blank run to one blank line; 'strip' removes
    /// all blank lines. Off unless a policy is named.
    #[arg(long = "blank-lines", value_enum, value_name = "POLICY")]
    pub blank_lines: Option<BlankLinePolicy>,

    /// Blank-line ratio above which normalization triggers.
    #[arg(long, value_name = "RATIO", default_value_t = crate::constants::DEFAULT_BLANK_LINE_THRESHOLD)]
    pub blank_line_threshold: f64,

    // --- Execution Control ---
    /// Perform a dry run. Report files that would be repaired but write nothing.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    #[cfg(feature = "json-report")]
    /// Emit machine-readable JSON reports instead of the text summary.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub report_json: bool,
}
