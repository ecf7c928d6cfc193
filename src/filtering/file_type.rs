// src/filtering/file_type.rs

use std::fs::Metadata;

/// True for regular files; directories, symlinks and special files are
/// never repair candidates.
#[inline]
pub(crate) fn is_file_type(metadata: &Metadata) -> bool {
    metadata.is_file()
}
