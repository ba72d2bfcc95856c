//! Consistency checking for mirrored `six.moves` stub trees.
//!
//! `six.moves` creates fake modules in a way type-checkers cannot follow,
//! so stub distributions keep a literal copy of each moved stdlib stub
//! under `six/moves/`. This crate verifies that every aliasing line in a
//! `six/moves/__init__.pyi` index refers to a copy that is byte-identical
//! to its stdlib original, and can repair divergence by re-copying.

pub mod check;
pub mod compare;
pub mod error;
pub mod fix;
pub mod parse;
pub mod resolve;
pub mod scan;

pub use check::{CheckReport, SyncChecker};
pub use error::{Error, Mismatch, Result};
pub use fix::AppliedFix;
pub use parse::ImportAlias;
pub use scan::ProjectIndex;
