//! Comparison of resolved stub pairs via the external `diff` utility

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Mismatch, Result};

/// Compare two stub files with `diff -u`, capturing its output.
///
/// `Ok(None)` means the files are identical; `Ok(Some(..))` carries the
/// recoverable mismatch with both paths and the diff text. A `diff` binary
/// that cannot be spawned at all is fatal and aborts the run.
pub fn compare_files(original: &Path, copy: &Path) -> Result<Option<Mismatch>> {
    debug!(
        original = %original.display(),
        copy = %copy.display(),
        "comparing stub pair"
    );

    let output = Command::new("diff")
        .arg("-u")
        .arg(original)
        .arg(copy)
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::DiffUnavailable,
            _ => Error::DiffInvocation { source: e },
        })?;

    if output.status.success() {
        return Ok(None);
    }

    Ok(Some(Mismatch::FilesDiffer {
        original: original.to_path_buf(),
        copy: copy.to_path_buf(),
        diff: String::from_utf8_lossy(&output.stdout).to_string(),
    }))
}
