//! Resolution of dotted module names to stub file paths

use std::path::{Path, PathBuf};

use crate::error::Mismatch;

/// Dotted prefix identifying modules that live in the moves mirror.
pub const MOVES_NAMESPACE: &str = "six.moves";

/// True when the dotted name lives inside the `six.moves` namespace.
///
/// Exact prefix match: the name is `six.moves` itself or starts with
/// `six.moves.`.
pub fn in_moves_namespace(module: &str) -> bool {
    module == MOVES_NAMESPACE
        || module
            .strip_prefix(MOVES_NAMESPACE)
            .is_some_and(|rest| rest.starts_with('.'))
}

/// Redirect a `third_party/<pkg>` project root to its `stdlib/<pkg>`
/// counterpart by replacing the first `third_party` path component.
fn redirect_to_stdlib(root: &Path) -> PathBuf {
    let mut redirected = PathBuf::new();
    let mut replaced = false;
    for component in root.components() {
        if !replaced && component.as_os_str() == "third_party" {
            redirected.push("stdlib");
            replaced = true;
        } else {
            redirected.push(component);
        }
    }
    redirected
}

/// Resolve a dotted module name to an existing stub file.
///
/// Modules outside the moves namespace are looked up under the stdlib
/// counterpart of the project root. The package form `<base>/__init__.pyi`
/// is preferred over the flat `<base>.pyi` when both exist. A module with
/// neither form is a recoverable [`Mismatch::MissingModule`].
pub fn resolve_module(root: &Path, module: &str) -> Result<PathBuf, Mismatch> {
    let search_root = if in_moves_namespace(module) {
        root.to_path_buf()
    } else {
        redirect_to_stdlib(root)
    };

    let mut base = search_root.clone();
    for part in module.split('.') {
        base.push(part);
    }

    let init = base.join("__init__.pyi");
    if init.is_file() {
        return Ok(init);
    }
    let flat = base.with_extension("pyi");
    if flat.is_file() {
        return Ok(flat);
    }

    Err(Mismatch::MissingModule {
        module: module.to_string(),
        root: search_root,
    })
}
