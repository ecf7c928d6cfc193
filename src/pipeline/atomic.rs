// src/pipeline/atomic.rs

//! Atomic in-place file replacement.
//!
//! Repaired content is written to a temporary file in the target's own
//! directory and renamed over the original. Readers never observe a partial
//! write, and any failure leaves the original byte-for-byte untouched.

use crate::errors::AppError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the file at `path` with `contents` atomically.
///
/// # Errors
/// Returns [`AppError::WriteFailed`] on any failure; the original file is
/// untouched in that case.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    let write_failed = |source: std::io::Error| AppError::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    // The temp file must live in the same directory as the target so the
    // final rename cannot cross a filesystem boundary.
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).ok_or_else(|| {
        write_failed(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "target path has no parent directory",
        ))
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_failed)?;
    temp.write_all(contents).map_err(write_failed)?;
    temp.flush().map_err(write_failed)?;
    temp.persist(path).map_err(|e| write_failed(e.error))?;
    Ok(())
}
