//! The scan-and-replace engine behind the rule table.
//!
//! Rules apply left-to-right, top-to-bottom: one full scan per rule, in
//! table order, with each rule's output committed before the next rule
//! scans. Later rules therefore see already-corrected text, which is what
//! prevents double-corruption when two patterns overlap.
//!
//! The same matching logic runs in a detection-only mode that reports where
//! repair would apply without mutating anything; the pipeline's dry run is
//! built on that guarantee.

use crate::core_types::{CorruptionFinding, FindingKind, RuleApplication};
use crate::rules::{RepairRule, RulePattern, RuleTable};
use log::debug;
use std::ops::Range;
use std::path::Path;

/// Corrected text plus the per-rule application log.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    /// The text after every applicable rule has run.
    pub text: String,
    /// One entry per rule that fired, in priority order.
    pub applications: Vec<RuleApplication>,
}

/// Runs the full rule table over `text`.
///
/// Line numbers in the application log are 1-based and refer to the text as
/// it was when that rule scanned (i.e. after all higher-priority rules).
pub fn apply_rules(text: &str, table: &RuleTable, relative_path: &Path) -> EngineOutput {
    let mut current = text.to_string();
    let mut applications = Vec::new();

    for rule in table.rules() {
        let ranges = match_ranges(&current, rule, relative_path);
        if ranges.is_empty() {
            continue;
        }
        debug!(
            "Rule '{}' fired {} time(s) in {}",
            rule.id,
            ranges.len(),
            relative_path.display()
        );
        let lines = ranges
            .iter()
            .map(|r| line_number_at(&current, r.start))
            .collect();
        applications.push(RuleApplication {
            rule_id: rule.id.clone(),
            count: ranges.len(),
            lines,
        });
        current = splice(&current, &ranges, &rule.replacement);
    }

    EngineOutput {
        text: current,
        applications,
    }
}

/// Detection-only pass: reports each place a rule pattern matches, without
/// mutating the text.
///
/// Every rule scans the same original text, so offsets are all relative to
/// `text`; where two rules' patterns overlap, a real repair pass would have
/// rewritten the region under the higher-priority rule first.
pub fn signature_findings(
    text: &str,
    table: &RuleTable,
    relative_path: &Path,
) -> Vec<CorruptionFinding> {
    let mut findings = Vec::new();
    for rule in table.rules() {
        for range in match_ranges(text, rule, relative_path) {
            findings.push(CorruptionFinding {
                kind: FindingKind::MojibakeSignature {
                    rule_id: rule.id.clone(),
                },
                offset: range.start,
                length: range.len(),
            });
        }
    }
    findings
}

/// Collects the match ranges of one rule, honoring its scope predicates.
/// Ranges are ascending and non-overlapping.
fn match_ranges(text: &str, rule: &RepairRule, relative_path: &Path) -> Vec<Range<usize>> {
    if !rule.scope.admits_path(relative_path) {
        return Vec::new();
    }

    let mut ranges: Vec<Range<usize>> = match &rule.pattern {
        RulePattern::Literal(lit) => text
            .match_indices(lit.as_str())
            .map(|(start, matched)| start..start + matched.len())
            .collect(),
        RulePattern::Regex(re) => re
            .find_iter(text)
            .filter(|m| !m.range().is_empty())
            .map(|m| m.range())
            .collect(),
    };

    if let Some(marker) = &rule.scope.line_marker {
        ranges.retain(|range| line_at(text, range.start).contains(marker.as_str()));
    }

    ranges
}

/// Replaces every range (ascending, non-overlapping) with `replacement`.
fn splice(text: &str, ranges: &[Range<usize>], replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in ranges {
        result.push_str(&text[cursor..range.start]);
        result.push_str(replacement);
        cursor = range.end;
    }
    result.push_str(&text[cursor..]);
    result
}

/// The full line containing byte `offset` (for multi-line matches, the line
/// the match starts on).
fn line_at(text: &str, offset: usize) -> &str {
    let start = text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(text.len());
    &text[start..end]
}

/// 1-based line number of byte `offset`.
fn line_number_at(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}
