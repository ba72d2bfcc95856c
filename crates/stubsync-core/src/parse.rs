//! Parsing of aliasing import lines from a moves index file

use std::sync::LazyLock;

use regex::Regex;

/// Matches `import <module> as <alias>` spanning a whole line.
static IMPORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import (.*) as (.*)$").unwrap());

/// One aliasing line: `import <module> as <alias>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAlias {
    /// Dotted name of the original module, e.g. `urllib.parse`
    pub module: String,
    /// Name the module is re-exported under inside `six.moves`
    pub alias: String,
}

/// Parse one line of a moves index file.
///
/// Lines that do not match the import pattern are no-ops, never errors.
pub fn parse_import_line(line: &str) -> Option<ImportAlias> {
    let line = line.trim_end_matches(['\r', '\n']);
    IMPORT_PATTERN.captures(line).map(|caps| ImportAlias {
        module: caps[1].to_string(),
        alias: caps[2].to_string(),
    })
}
