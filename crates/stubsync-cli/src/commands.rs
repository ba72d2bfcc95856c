//! Check command implementation

use std::path::Path;

use colored::Colorize;

use stubsync_core::SyncChecker;

use crate::error::Result;

/// Run the consistency check, printing every mismatch before the final
/// summary so one invocation surfaces everything.
///
/// Returns the process exit code; the caller decides when to exit.
pub fn run_check(root: &Path, fix: bool) -> Result<i32> {
    let report = SyncChecker::new(root).with_fix(fix).run()?;

    for mismatch in &report.mismatches {
        println!("{mismatch}");
    }
    for applied in &report.fixes {
        println!("Copying {} to {}", applied.from.display(), applied.to.display());
    }

    if report.is_clean() {
        println!(
            "{} {} moves index(es) scanned, all copies in sync.",
            "OK".green().bold(),
            report.indexes_scanned
        );
    } else if fix {
        let unfixed = report.mismatches.len() - report.fixes.len();
        if unfixed == 0 {
            println!(
                "{} Applied {} fix(es) for {} mismatch(es).",
                "OK".green().bold(),
                report.fixes.len(),
                report.mismatches.len()
            );
        } else {
            println!(
                "{} Applied {} fix(es); {} mismatch(es) could not be fixed.",
                "PARTIAL".yellow().bold(),
                report.fixes.len(),
                unfixed
            );
        }
    } else {
        println!(
            "Finished with {} errors. Add {} to correct.",
            report.mismatches.len(),
            "--fix".cyan()
        );
    }

    Ok(report.exit_code(fix))
}
