// src/discovery/entry_processor.rs

use crate::config::Config;
use crate::core_types::FileInfo;
use crate::errors::AppError;
use crate::filtering::{is_file_type, passes_extension_filters, passes_size_filter};
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::path::PathBuf;

/// Processes a single directory entry from the walk.
///
/// Performs filtering based on type, size and extensions (gitignore rules
/// and custom ignore patterns are handled by the walker itself).
///
/// Returns `Ok(Some(FileInfo))` if the entry is a file that passes all filters.
/// Returns `Ok(None)` if the entry is filtered out or is not a regular file.
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    config: &Config,
) -> Result<Option<FileInfo>, AppError> {
    // --- 1. Handle Walker Errors ---
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return Ok(None); // Skip this entry
        }
    };

    let absolute_path = entry.path().to_path_buf();
    trace!("Processing entry: {}", absolute_path.display());

    // --- 2. Calculate Relative Path ---
    let relative_path = if config.input_is_file {
        absolute_path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| absolute_path.clone())
    } else {
        absolute_path
            .strip_prefix(&config.input_path)
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|err| {
                warn!(
                    "Failed to strip prefix '{}' from '{}': {}. Using absolute path.",
                    config.input_path.display(),
                    absolute_path.display(),
                    err
                );
                absolute_path.clone()
            })
    };

    // --- 3. Get Metadata ---
    let metadata = match entry.metadata() {
        Ok(md) => md,
        Err(e) => {
            warn!(
                "Skipping entry '{}' due to metadata error: {}",
                absolute_path.display(),
                e
            );
            return Ok(None);
        }
    };

    // --- 4. Filter by File Type ---
    if !is_file_type(&metadata) {
        trace!("Skipping non-file entry: {}", absolute_path.display());
        return Ok(None);
    }

    // --- 5. Filter by Size ---
    if !passes_size_filter(&metadata, &config.discovery) {
        debug!(
            "Skipping file due to size constraint: {} ({} bytes)",
            absolute_path.display(),
            metadata.len()
        );
        return Ok(None);
    }

    // --- 6. Filter by Extension ---
    if !passes_extension_filters(&absolute_path, &config.discovery) {
        debug!(
            "Skipping file due to extension filter: {}",
            absolute_path.display()
        );
        return Ok(None);
    }

    Ok(Some(FileInfo {
        absolute_path,
        relative_path,
        size: metadata.len(),
    }))
}
