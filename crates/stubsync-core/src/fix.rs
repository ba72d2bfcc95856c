//! Repair of divergent moves stubs by re-copying from the original tree

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::parse::ImportAlias;
use crate::resolve::{MOVES_NAMESPACE, resolve_module};

/// A copy applied while repairing one import line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFix {
    /// The resolved original stub that was copied
    pub from: PathBuf,
    /// The alias-side stub that was overwritten or created
    pub to: PathBuf,
}

/// Copy the original stub over the alias-side stub for one import line.
///
/// The alias side falls back to its expected flat path under `six/moves/`
/// when it does not resolve yet, so missing copies are created rather than
/// reported twice. Returns `None` when the original side itself is missing,
/// since there is nothing to copy from.
pub fn fix_import(root: &Path, import: &ImportAlias) -> Result<Option<AppliedFix>> {
    let Ok(from) = resolve_module(root, &import.module) else {
        debug!(module = %import.module, "original missing, nothing to copy");
        return Ok(None);
    };

    let copy_module = format!("{MOVES_NAMESPACE}.{}", import.alias);
    let to = match resolve_module(root, &copy_module) {
        Ok(path) => path,
        Err(_) => root
            .join("six")
            .join("moves")
            .join(format!("{}.pyi", import.alias)),
    };

    fs::copy(&from, &to).map_err(|e| Error::io(&to, e))?;
    Ok(Some(AppliedFix { from, to }))
}
