// src/config/parsing.rs

use anyhow::{Context, Result};
use byte_unit::Byte;
use std::str::FromStr;

/// Parses the optional max size string into Option<u128>.
pub(super) fn parse_max_size(max_size_str: Option<String>) -> Result<Option<u128>> {
    max_size_str
        .map(|s| {
            Byte::from_str(&s)
                .map(|b| b.as_u128())
                .with_context(|| format!("Invalid size format: '{}'", s))
        })
        .transpose()
}

/// Normalizes a vector of extension strings to lowercase, stripping any
/// leading dot so `-e .tsx` and `-e tsx` mean the same thing.
pub(super) fn normalize_extensions(exts: Option<Vec<String>>) -> Option<Vec<String>> {
    exts.map(|v| {
        v.into_iter()
            .map(|s| s.trim_start_matches('.').to_lowercase())
            .collect()
    })
}
