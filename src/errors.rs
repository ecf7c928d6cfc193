//! Defines application-specific error types.
//!
//! This module provides the `AppError` enum, which categorizes the errors
//! that can occur during a repair run, offering more context than generic
//! I/O or `anyhow` errors.

use thiserror::Error;

/// Application-specific errors used throughout `demojibake`.
///
/// Per-file errors (`IoError`, `WriteFailed`) are isolated into the file's
/// report and never abort the batch; configuration errors (`InvalidRule`,
/// `ConfigError`) abort the run before any file is touched.
#[derive(Error, Debug)]
pub enum AppError {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    IoError {
        /// The path that caused the I/O error.
        path: String, // Use String to avoid lifetime issues if PathBuf is dropped
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The atomic replace of a repaired file could not be completed. The
    /// original file is left byte-for-byte untouched.
    #[error("failed to write repaired file '{path}': {source}")]
    WriteFailed {
        /// The path of the file that could not be replaced.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Configuration Errors ---
    /// A repair rule failed table validation (ambiguous unscoped pattern,
    /// or a correction that re-matches a rule of equal or lower priority).
    #[error("invalid repair rule '{id}': {reason}")]
    InvalidRule {
        /// Identifier of the offending rule.
        id: String,
        /// Why the rule was rejected.
        reason: String,
    },

    /// Generic error related to invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    // --- Signal Handling ---
    /// Error indicating that the operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// Error indicating that no files were found that matched the given criteria.
    #[error("No files found matching the specified criteria.")]
    NoFilesFound,
}

/// Helper function to create an `AppError::IoError` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
///
/// # Returns
/// An `AppError::IoError` variant containing the path string and the source error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::IoError {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = io_error_with_path(source_error, &path);

        match app_error {
            AppError::IoError {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::IoError"),
        }
    }

    #[test]
    fn test_invalid_rule_display() {
        let err = AppError::InvalidRule {
            id: "short-marker".to_string(),
            reason: "global pattern shorter than 3 characters".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("short-marker"));
        assert!(msg.contains("shorter than 3"));
    }

    #[test]
    fn test_write_failed_preserves_source() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let err = AppError::WriteFailed {
            path: "out/file.ts".to_string(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("out/file.ts"));
        assert!(msg.contains("Access denied"));
    }
}
