//! `demojibake` is a library and command-line tool for detecting and
//! repairing text-encoding corruption across a tree of source-like files.
//!
//! Files damaged by a bad encode/decode round-trip carry recognizable scars:
//! byte-order marks where none belong, Unicode replacement characters, and
//! "mojibake" - valid-looking character salad produced by decoding UTF-8
//! bytes under the wrong single-byte encoding, sometimes more than once.
//! This crate reverses a catalogued set of those corruptions in place,
//! without disturbing unaffected bytes, and is idempotent by construction:
//! running it twice over the same tree changes nothing the second time.
//!
//! As a library, it provides a three-stage pipeline:
//! 1.  **Discover**: Walk the tree and collect candidate files based on the
//!     configured filters (.gitignore rules, extensions, size).
//! 2.  **Repair**: Decode, detect and rewrite each file independently, in
//!     parallel. Dry-run mode computes everything but writes nothing.
//! 3.  **Report**: Hand the caller a complete per-file outcome list.
//!
//! # Example: Library Usage
//!
//! ```
//! use demojibake::{discover, repair, CancellationToken, ConfigBuilder};
//! use demojibake::core_types::Outcome;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. A tree with one mojibake casualty.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("hero.tsx"), "Launch ðŸš€").unwrap();
//! fs::write(temp_dir.path().join("ok.ts"), "fine as is\n").unwrap();
//!
//! // 2. Configure the run.
//! let config = ConfigBuilder::new()
//!     .input_path(temp_dir.path().to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! // 3. Discover, then repair.
//! let token = CancellationToken::new();
//! let files = discover(&config, &token).unwrap();
//! let reports = repair(&files, &config, &token).unwrap();
//!
//! assert_eq!(reports.len(), 2);
//! assert_eq!(reports[0].outcome, Outcome::Repaired);
//! assert_eq!(reports[1].outcome, Outcome::Unchanged);
//! assert_eq!(
//!     fs::read_to_string(temp_dir.path().join("hero.tsx")).unwrap(),
//!     "Launch 🚀"
//! );
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod decode;
pub mod detect;
pub mod discovery;
pub mod errors;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod rules;
pub mod signal;

pub mod filtering;
pub use filtering::{is_repairable_text, passes_extension_filters};

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};
pub use core_types::{FileInfo, FileReport, Outcome, RepairReport};
pub use rules::{built_in_rules, RepairRule, RuleTable};

use crate::errors::AppError;
use std::io::Write;

/// Discovers candidate files based on the provided configuration.
///
/// This is the first stage of the pipeline. It walks the filesystem
/// according to the rules in the `Config` (respecting .gitignore, extension
/// and size filters) and returns the candidates sorted by relative path.
/// File content is not read at this stage.
///
/// # Errors
/// Returns [`AppError::Interrupted`] if the token is cancelled mid-walk.
pub fn discover(
    config: &Config,
    token: &CancellationToken,
) -> Result<Vec<FileInfo>, AppError> {
    discovery::discover_files(config, token)
}

/// Repairs a batch of discovered files.
///
/// This is the second stage. Each file is decoded, scanned for corruption,
/// repaired, and written back atomically when (and only when) its text
/// changed - or left alone entirely in dry-run mode. Files are processed in
/// parallel; per-file errors are isolated into the returned reports.
///
/// # Errors
/// Returns [`AppError::Interrupted`] if the token is cancelled between
/// files.
pub fn repair(
    files: &[FileInfo],
    config: &Config,
    token: &CancellationToken,
) -> Result<Vec<FileReport>, AppError> {
    pipeline::repair_files(files, config, token)
}

/// Executes the complete pipeline: discover, repair, and report.
///
/// This mirrors the command-line execution: the rendered report goes to
/// `writer` and the raw per-file reports are returned for programmatic use.
///
/// # Errors
/// Returns [`AppError::NoFilesFound`] when discovery yields no candidates,
/// [`AppError::Interrupted`] on cancellation, and [`AppError::IoError`] if
/// the report cannot be written.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    writer: &mut dyn Write,
) -> Result<Vec<FileReport>, AppError> {
    let files = discover(config, token)?;
    if files.is_empty() {
        return Err(AppError::NoFilesFound);
    }

    let reports = repair(&files, config, token)?;
    output::write_reports(writer, &reports, config)
        .map_err(|e| errors::io_error_with_path(e, "<report output>"))?;
    Ok(reports)
}
