//! Read-only corruption detection over decoded text.
//!
//! Detection never mutates its input; that guarantee is what the pipeline's
//! dry-run mode is built on. Findings come out in a fixed priority order:
//! a byte-order mark in leading position, then every replacement-character
//! occurrence, then the rule table's mojibake signatures in detection-only
//! mode.

use crate::constants::{BOM, REPLACEMENT_CHARACTER};
use crate::core_types::{CorruptionFinding, FindingKind};
use crate::rules::engine::signature_findings;
use crate::rules::RuleTable;
use std::path::Path;

/// Scans decoded text for corruption evidence.
///
/// Offsets are byte positions in `text`. A BOM is reported only when it is
/// the very first character; at any later position it is ordinary content.
/// Replacement characters are reported wherever they occur, since each one
/// marks a byte sequence some earlier decode could not represent.
pub fn detect_corruption(
    text: &str,
    table: &RuleTable,
    relative_path: &Path,
) -> Vec<CorruptionFinding> {
    let mut findings = Vec::new();

    if text.starts_with(BOM) {
        findings.push(CorruptionFinding {
            kind: FindingKind::LeadingBom,
            offset: 0,
            length: BOM.len_utf8(),
        });
    }

    for (offset, ch) in text.char_indices() {
        if ch == REPLACEMENT_CHARACTER {
            findings.push(CorruptionFinding {
                kind: FindingKind::ReplacementCharacter,
                offset,
                length: ch.len_utf8(),
            });
        }
    }

    findings.extend(signature_findings(text, table, relative_path));
    findings
}
