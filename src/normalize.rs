//! Blank-line normalization for files inflated by accidental line-doubling.
//!
//! This is a distinct corruption class from mojibake: a file that went
//! through a broken round-trip sometimes comes back double-spaced. The
//! normalizer triggers only when the blank-line ratio exceeds a threshold,
//! so intentional spacing in healthy files is never touched.

use crate::constants::DEFAULT_BLANK_LINE_THRESHOLD;
use clap::ValueEnum;

/// What to do with blank lines once the trigger fires.
///
/// The two policies are not equivalent; which one is right depends on what
/// the corrupted files originally looked like, so the choice is an explicit,
/// named configuration option with no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BlankLinePolicy {
    /// Collapse every run of blank lines to a single blank line.
    Collapse,
    /// Remove all blank lines entirely.
    Strip,
}

/// Configuration for the blank-line pass.
#[derive(Debug, Clone, Copy)]
pub struct BlankLineConfig {
    /// The policy applied when the trigger fires.
    pub policy: BlankLinePolicy,
    /// Blank-line ratio (blank / total) above which the policy applies.
    pub threshold: f64,
}

impl BlankLineConfig {
    /// A config with the given policy and the default trigger threshold.
    pub fn with_policy(policy: BlankLinePolicy) -> Self {
        Self {
            policy,
            threshold: DEFAULT_BLANK_LINE_THRESHOLD,
        }
    }
}

/// Applies blank-line normalization, returning the new text and the number
/// of lines removed.
///
/// A line is blank when it contains only whitespace. When the blank ratio
/// does not exceed the threshold the text passes through unchanged. Both
/// policies are idempotent: collapsed runs cannot be collapsed further and a
/// blank-stripped file has nothing left to strip, so re-running the pass is
/// a no-op regardless of whether the trigger fires again.
///
/// # Examples
///
/// ```
/// use demojibake::normalize::{normalize_blank_lines, BlankLineConfig, BlankLinePolicy};
///
/// let cfg = BlankLineConfig::with_policy(BlankLinePolicy::Collapse);
/// let (text, removed) = normalize_blank_lines("a\n\n\nb", &cfg);
/// assert_eq!(text, "a\n\nb");
/// assert_eq!(removed, 1);
/// ```
pub fn normalize_blank_lines(text: &str, config: &BlankLineConfig) -> (String, usize) {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return (text.to_string(), 0);
    }

    let blank_count = lines.iter().filter(|line| line.trim().is_empty()).count();
    let ratio = blank_count as f64 / lines.len() as f64;
    if ratio <= config.threshold {
        return (text.to_string(), 0);
    }

    let kept: Vec<&str> = match config.policy {
        BlankLinePolicy::Strip => lines
            .iter()
            .copied()
            .filter(|line| !line.trim().is_empty())
            .collect(),
        BlankLinePolicy::Collapse => {
            let mut kept = Vec::with_capacity(lines.len());
            let mut previous_blank = false;
            for line in &lines {
                let blank = line.trim().is_empty();
                if !(blank && previous_blank) {
                    kept.push(*line);
                }
                previous_blank = blank;
            }
            kept
        }
    };

    let removed = lines.len() - kept.len();
    let mut result = kept.join("\n");
    if text.ends_with('\n') && !result.is_empty() {
        result.push('\n');
    }
    (result, removed)
}
