//! Defines core data structures used throughout the repair pipeline.
//!
//! A discovered file is described by [`FileInfo`]; running it through the
//! pipeline produces a [`FileReport`] containing the per-file [`Outcome`]
//! and a [`RepairReport`] with everything the run observed and changed.

use std::fmt;
use std::path::PathBuf;

/// Represents a file discovered during the walk.
///
/// Only identity and metadata are captured here; content is read later, by
/// the repair stage, so discovery stays cheap and side-effect free.
///
/// # Examples
///
/// ```
/// use demojibake::core_types::FileInfo;
/// use std::path::PathBuf;
///
/// let file_info = FileInfo {
///     absolute_path: PathBuf::from("/project/src/Footer.tsx"),
///     relative_path: PathBuf::from("src/Footer.tsx"),
///     size: 1204,
/// };
/// assert_eq!(file_info.relative_path.to_str(), Some("src/Footer.tsx"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileInfo {
    /// The absolute path to the file on the filesystem.
    pub absolute_path: PathBuf,
    /// The path relative to the initial input directory, used for display
    /// and for matching rule path scopes.
    pub relative_path: PathBuf,
    /// The size of the file in bytes, obtained from metadata.
    pub size: u64,
}

/// Which decode attempt produced the working text of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json-report", derive(serde::Serialize))]
pub enum EncodingStrategy {
    /// The bytes were valid UTF-8 as-is.
    Utf8Strict,
    /// Strict UTF-8 decode failed; invalid sequences were replaced with
    /// U+FFFD. A lossy decode is itself corruption evidence, not a clean
    /// result, and is surfaced through replacement-character findings.
    Utf8Lossy,
    /// The bytes were reinterpreted as Latin-1. Selected explicitly by the
    /// caller, never automatically.
    Latin1Fallback,
}

impl EncodingStrategy {
    /// True when the strict decode path did not succeed.
    pub fn is_degraded(&self) -> bool {
        !matches!(self, EncodingStrategy::Utf8Strict)
    }
}

impl fmt::Display for EncodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            EncodingStrategy::Utf8Strict => "utf8-strict",
            EncodingStrategy::Utf8Lossy => "utf8-lossy",
            EncodingStrategy::Latin1Fallback => "latin1-fallback",
        };
        f.write_str(tag)
    }
}

/// The class of a corruption finding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-report", derive(serde::Serialize))]
pub enum FindingKind {
    /// A byte-order mark as the first character of the text. A BOM at any
    /// later position is ordinary content, not corruption.
    LeadingBom,
    /// An occurrence of U+FFFD, wherever it appears.
    ReplacementCharacter,
    /// A match of a repair-rule pattern, reported without mutating the text.
    MojibakeSignature {
        /// The id of the matching rule.
        rule_id: String,
    },
}

/// A single piece of corruption evidence located in decoded text.
///
/// Offsets and lengths are byte positions within the decoded string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-report", derive(serde::Serialize))]
pub struct CorruptionFinding {
    /// What was found.
    pub kind: FindingKind,
    /// Byte offset of the finding in the decoded text.
    pub offset: usize,
    /// Byte length of the finding.
    pub length: usize,
}

/// Application log entry for one rule over one file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-report", derive(serde::Serialize))]
pub struct RuleApplication {
    /// The id of the rule that fired.
    pub rule_id: String,
    /// How many times it fired.
    pub count: usize,
    /// 1-based line numbers (in the pre-application text) that were touched.
    pub lines: Vec<usize>,
}

/// Everything one pipeline pass observed and changed for one file.
///
/// Produced fresh per run and handed to the caller; the core never persists
/// it.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "json-report", derive(serde::Serialize))]
pub struct RepairReport {
    /// The decode strategy that produced the working text, if the file was
    /// decoded at all (binary files are skipped before decoding completes).
    pub strategy: Option<EncodingStrategy>,
    /// Corruption evidence found before any repair was applied.
    pub findings: Vec<CorruptionFinding>,
    /// Ordered per-rule application log.
    pub applications: Vec<RuleApplication>,
    /// Number of blank lines removed by the normalizer, if it ran.
    pub blank_lines_removed: usize,
    /// Whether the repaired text differs from the decoded original.
    pub modified: bool,
}

/// Terminal state of one file after a pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json-report", derive(serde::Serialize))]
pub enum Outcome {
    /// The repaired text equals the decoded original; nothing was written.
    Unchanged,
    /// Repairs applied. In a dry run the write is skipped but the outcome is
    /// still reported as `Repaired`.
    Repaired,
    /// Content cannot be meaningfully treated as text; the file was left
    /// untouched and excluded from repair.
    SkippedBinary,
    /// A per-file error (read or atomic-write failure). The original file is
    /// untouched; other files are unaffected.
    Failed(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unchanged => f.write_str("unchanged"),
            Outcome::Repaired => f.write_str("repaired"),
            Outcome::SkippedBinary => f.write_str("skipped (binary)"),
            Outcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// The per-file result surfaced to the caller.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json-report", derive(serde::Serialize))]
pub struct FileReport {
    /// The path relative to the input root.
    pub relative_path: PathBuf,
    /// Terminal state of the file.
    pub outcome: Outcome,
    /// The detailed report backing the outcome.
    pub report: RepairReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_display_tags() {
        assert_eq!(EncodingStrategy::Utf8Strict.to_string(), "utf8-strict");
        assert_eq!(EncodingStrategy::Utf8Lossy.to_string(), "utf8-lossy");
        assert_eq!(
            EncodingStrategy::Latin1Fallback.to_string(),
            "latin1-fallback"
        );
    }

    #[test]
    fn test_strategy_degradation() {
        assert!(!EncodingStrategy::Utf8Strict.is_degraded());
        assert!(EncodingStrategy::Utf8Lossy.is_degraded());
        assert!(EncodingStrategy::Latin1Fallback.is_degraded());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Unchanged.to_string(), "unchanged");
        assert_eq!(Outcome::SkippedBinary.to_string(), "skipped (binary)");
        assert_eq!(
            Outcome::Failed("disk full".to_string()).to_string(),
            "failed: disk full"
        );
    }
}
