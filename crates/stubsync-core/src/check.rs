//! Orchestration of a full consistency check across discovered roots

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::compare::compare_files;
use crate::error::{Error, Mismatch, Result};
use crate::fix::{AppliedFix, fix_import};
use crate::parse::{ImportAlias, parse_import_line};
use crate::resolve::{MOVES_NAMESPACE, resolve_module};
use crate::scan::discover_indexes;

/// Report from a full synchronization check
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of moves index files scanned
    pub indexes_scanned: usize,
    /// Recoverable mismatches, in scan order
    pub mismatches: Vec<Mismatch>,
    /// Copies applied while running in fix mode
    pub fixes: Vec<AppliedFix>,
}

impl CheckReport {
    /// True when no mismatch was found.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Process exit status for this report.
    ///
    /// Nonzero only when mismatches remain unaddressed; a fix-mode run is
    /// assumed to have resolved what it could.
    pub fn exit_code(&self, fix: bool) -> i32 {
        if self.is_clean() || fix { 0 } else { 1 }
    }
}

/// Walks every discovered moves index and validates each aliasing line.
///
/// Recoverable mismatches are tallied and the scan continues; fatal errors
/// (unreadable index file, missing diff binary) abort immediately. The
/// checker never exits the process — callers map the returned report to an
/// exit status.
#[derive(Debug)]
pub struct SyncChecker {
    workspace: PathBuf,
    fix: bool,
}

impl SyncChecker {
    /// Create a checker rooted at the given workspace directory.
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            fix: false,
        }
    }

    /// Enable or disable fix mode.
    pub fn with_fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    /// Run the consistency check across all discovered project roots.
    pub fn run(&self) -> Result<CheckReport> {
        let mut report = CheckReport::default();

        for project in discover_indexes(&self.workspace)? {
            debug!(index = %project.index.display(), "scanning moves index");
            report.indexes_scanned += 1;

            let content =
                fs::read_to_string(&project.index).map_err(|e| Error::io(&project.index, e))?;

            for line in content.lines() {
                let Some(import) = parse_import_line(line) else {
                    continue;
                };

                if let Some(mismatch) = self.check_import(&project.root, &import)? {
                    report.mismatches.push(mismatch);
                    if self.fix
                        && let Some(applied) = fix_import(&project.root, &import)?
                    {
                        report.fixes.push(applied);
                    }
                }
            }
        }

        Ok(report)
    }

    /// Validate one aliasing line: resolve both sides, then compare.
    fn check_import(&self, root: &Path, import: &ImportAlias) -> Result<Option<Mismatch>> {
        let original = match resolve_module(root, &import.module) {
            Ok(path) => path,
            Err(miss) => return Ok(Some(miss)),
        };

        let copy_module = format!("{MOVES_NAMESPACE}.{}", import.alias);
        let copy = match resolve_module(root, &copy_module) {
            Ok(path) => path,
            Err(miss) => return Ok(Some(miss)),
        };

        compare_files(&original, &copy)
    }
}
