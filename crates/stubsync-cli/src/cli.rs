//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Check that mirrored six.moves stubs match their stdlib originals
///
/// Scans every third_party/<pkg>/six/moves/__init__.pyi index and verifies
/// that each `import <module> as <alias>` line refers to a copy that is
/// byte-identical to the original stub. Exits nonzero when any pair
/// diverges.
#[derive(Parser, Debug)]
#[command(name = "stubsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root containing the stdlib/ and third_party/ trees
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Repair divergence by copying original stubs over the six.moves copies
    #[arg(long)]
    pub fix: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
