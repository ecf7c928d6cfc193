//! The per-file repair pipeline and its parallel batch driver.
//!
//! Each file moves through a fixed sequence of states: read, decoded,
//! detected, repaired, and finally unchanged or written. No state is shared
//! between files, so the batch driver runs them on a rayon pool with the
//! cancellation token checked between files; in-flight per-file work is pure
//! in-memory computation and always runs to completion.

use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::constants::{BOM, REPLACEMENT_CHARACTER};
use crate::core_types::{FileInfo, FileReport, Outcome, RepairReport};
use crate::decode::decode_bytes;
use crate::detect::detect_corruption;
use crate::errors::AppError;
use crate::filtering::is_repairable_text;
use crate::normalize::normalize_blank_lines;
use crate::rules::engine::apply_rules;
use log::debug;
use rayon::prelude::*;
use std::fs;

mod atomic;

use atomic::write_atomic;

/// Repairs a batch of discovered files in parallel.
///
/// Per-file errors are folded into each file's [`Outcome`] and never abort
/// the batch. Report order matches the input order.
///
/// # Errors
/// Returns [`AppError::Interrupted`] when the token is cancelled; files
/// already processed are not rolled back (their writes were atomic and
/// complete).
pub fn repair_files(
    files: &[FileInfo],
    config: &Config,
    token: &CancellationToken,
) -> Result<Vec<FileReport>, AppError> {
    let reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|file| {
            if token.is_cancelled() {
                return None;
            }
            Some(repair_file(file, config))
        })
        .collect();

    if token.is_cancelled() {
        return Err(AppError::Interrupted);
    }
    Ok(reports)
}

/// Runs one file through the full state machine.
pub fn repair_file(file: &FileInfo, config: &Config) -> FileReport {
    debug!("Processing file: {}", file.absolute_path.display());

    // --- Read ---
    let bytes = match fs::read(&file.absolute_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            return FileReport {
                relative_path: file.relative_path.clone(),
                outcome: Outcome::Failed(format!("read failed: {}", e)),
                report: RepairReport::default(),
            }
        }
    };

    // Binary content is diverted before decoding; text repair on it would
    // be meaningless at best.
    if !is_repairable_text(&bytes) {
        debug!("Skipping binary file: {}", file.relative_path.display());
        return FileReport {
            relative_path: file.relative_path.clone(),
            outcome: Outcome::SkippedBinary,
            report: RepairReport::default(),
        };
    }

    // --- Decode ---
    let decoded = decode_bytes(&bytes, config.repair.latin1_fallback);

    // --- Detect (read-only, for reporting) ---
    let findings = detect_corruption(&decoded.text, &config.repair.rules, &file.relative_path);

    // --- Repair ---
    // Leading BOM and leading replacement characters are stripped as
    // universal normalization. All leading occurrences go at once; stripping
    // just the first would leave the next one leading and take a second run.
    let stripped = decoded
        .text
        .trim_start_matches(|c| c == BOM || c == REPLACEMENT_CHARACTER);
    let engine_out = apply_rules(stripped, &config.repair.rules, &file.relative_path);
    let (final_text, blank_lines_removed) = match &config.repair.blank_lines {
        Some(blank_config) => normalize_blank_lines(&engine_out.text, blank_config),
        None => (engine_out.text, 0),
    };

    let modified = final_text != decoded.text;
    let report = RepairReport {
        strategy: Some(decoded.strategy),
        findings,
        applications: engine_out.applications,
        blank_lines_removed,
        modified,
    };

    // --- Unchanged | WriteQueued ---
    if !modified {
        return FileReport {
            relative_path: file.relative_path.clone(),
            outcome: Outcome::Unchanged,
            report,
        };
    }

    if config.dry_run {
        // Short-circuit at the write: the report is complete, the tree is
        // untouched.
        return FileReport {
            relative_path: file.relative_path.clone(),
            outcome: Outcome::Repaired,
            report,
        };
    }

    match write_atomic(&file.absolute_path, final_text.as_bytes()) {
        Ok(()) => FileReport {
            relative_path: file.relative_path.clone(),
            outcome: Outcome::Repaired,
            report,
        },
        Err(e) => FileReport {
            relative_path: file.relative_path.clone(),
            outcome: Outcome::Failed(e.to_string()),
            report,
        },
    }
}
