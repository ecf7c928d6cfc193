// src/output/dry_run.rs

use crate::core_types::{FileReport, Outcome};
use crate::output::summary::describe_repairs;
use log::debug;
use std::io::Write;

/// Writes the output for a dry run (-D).
///
/// Lists the relative paths of files that would be repaired, in the order
/// the reports were produced, together with what would change in each.
pub(crate) fn write_dry_run_output(
    writer: &mut dyn Write,
    reports: &[FileReport],
) -> std::io::Result<()> {
    debug!("Executing dry run output...");
    writeln!(writer, "\n--- Dry Run: files that would be repaired ---")?;

    for report in reports {
        if report.outcome == Outcome::Repaired {
            writeln!(
                writer,
                "- {}{}",
                report.relative_path.display(),
                describe_repairs(&report.report)
            )?;
        }
    }

    writeln!(writer, "--- End Dry Run ---")?;
    writer.flush()
}
