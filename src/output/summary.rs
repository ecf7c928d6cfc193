// src/output/summary.rs

use crate::config::Config;
use crate::constants;
use crate::core_types::{FileReport, FindingKind, Outcome, RepairReport};
use crate::output::{dry_run::write_dry_run_output, OutcomeCounts};
use log::debug;
use std::io::Write;

/// Writes per-file outcome lines and the closing summary block.
///
/// Unchanged files are not listed individually; a healthy tree should
/// produce a quiet run. Dry runs render the would-be repairs in their own
/// framed block instead of outcome lines.
pub fn write_reports(
    writer: &mut dyn Write,
    reports: &[FileReport],
    config: &Config,
) -> std::io::Result<()> {
    debug!("Writing report for {} file(s)...", reports.len());

    #[cfg(feature = "json-report")]
    if config.report_json {
        serde_json::to_writer_pretty(&mut *writer, reports)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(writer)?;
        return writer.flush();
    }

    if config.dry_run {
        write_dry_run_output(writer, reports)?;
    } else {
        for report in reports {
            match &report.outcome {
                Outcome::Unchanged => {}
                Outcome::Repaired => writeln!(
                    writer,
                    "repaired: {}{}",
                    report.relative_path.display(),
                    describe_repairs(&report.report)
                )?,
                Outcome::SkippedBinary => writeln!(
                    writer,
                    "skipped (binary): {}",
                    report.relative_path.display()
                )?,
                Outcome::Failed(reason) => writeln!(
                    writer,
                    "failed: {} ({})",
                    report.relative_path.display(),
                    reason
                )?,
            }
        }
    }

    let counts = OutcomeCounts::from_reports(reports);
    writeln!(writer, "\n{}", constants::SUMMARY_SEPARATOR)?;
    writeln!(
        writer,
        "{}: {} | Unchanged: {} | Skipped: {} | Failed: {}",
        if config.dry_run {
            "Would repair"
        } else {
            "Repaired"
        },
        counts.repaired,
        counts.unchanged,
        counts.skipped,
        counts.failed
    )?;
    writer.flush()
}

/// Renders what a repair actually did, e.g. " (bom, rocket x2)".
pub(crate) fn describe_repairs(report: &RepairReport) -> String {
    let mut parts = Vec::new();
    if report
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::LeadingBom)
    {
        parts.push("bom".to_string());
    }
    for application in &report.applications {
        parts.push(format!("{} x{}", application.rule_id, application.count));
    }
    if report.blank_lines_removed > 0 {
        parts.push(format!("blank-lines -{}", report.blank_lines_removed));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}
