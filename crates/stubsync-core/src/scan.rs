//! Discovery of `six.moves` index files under third-party roots

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// A discovered project root and the moves index file that anchors it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIndex {
    /// The `third_party/<pkg>` directory the index belongs to
    pub root: PathBuf,
    /// The `six/moves/__init__.pyi` file enumerating the aliasing imports
    pub index: PathBuf,
}

/// Enumerate every `third_party/<pkg>/six/moves/__init__.pyi` under the
/// workspace root.
///
/// The project root for each hit is the index path with the known
/// `six/moves/__init__.pyi` suffix stripped. A missing `third_party`
/// directory yields an empty set; non-directory entries are skipped.
pub fn discover_indexes(workspace: &Path) -> Result<Vec<ProjectIndex>> {
    let third_party = workspace.join("third_party");
    if !third_party.is_dir() {
        debug!(path = %third_party.display(), "no third_party directory");
        return Ok(Vec::new());
    }

    let mut found = Vec::new();

    let entries = fs::read_dir(&third_party).map_err(|e| Error::io(&third_party, e))?;
    for entry in entries.flatten() {
        let root = entry.path();
        if !root.is_dir() {
            continue;
        }

        let index = root.join("six").join("moves").join("__init__.pyi");
        if index.is_file() {
            found.push(ProjectIndex { root, index });
        }
    }

    found.sort_by(|a, b| a.root.cmp(&b.root));
    Ok(found)
}
