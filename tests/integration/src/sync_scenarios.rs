//! End-to-end scenarios over realistic multi-package stub trees.
//!
//! These tests exercise the complete flow: index discovery -> line parsing
//! -> module resolution -> diff comparison -> fix application.

use pretty_assertions::assert_eq;
use stubsync_core::{Mismatch, SyncChecker};
use stubsync_test_utils::StubTree;

/// A two-package tree with versioned stdlib roots: one clean pair, one
/// divergent pair, and one unresolved module.
fn mixed_tree() -> StubTree {
    let tree = StubTree::new();

    // Package "2": fully in sync.
    tree.write_stub("stdlib/2/Queue.pyi", "class Queue: ...\n");
    tree.write_stub("third_party/2/six/moves/queue.pyi", "class Queue: ...\n");
    tree.moves_index("2", &["import Queue as queue"]);

    // Package "3": one drifted copy, one dangling import.
    tree.write_stub(
        "stdlib/3/collections/__init__.pyi",
        "class OrderedDict: ...\nclass Counter: ...\n",
    );
    tree.write_stub(
        "third_party/3/six/moves/collections_alias.pyi",
        "class OrderedDict: ...\n",
    );
    tree.moves_index(
        "3",
        &[
            "# stubs mirrored from stdlib",
            "import collections as collections_alias",
            "import does_not_exist as dangling",
        ],
    );

    tree
}

#[test]
fn test_mixed_tree_tallies_each_failure_once() {
    let tree = mixed_tree();

    let report = SyncChecker::new(tree.root()).run().unwrap();
    assert_eq!(report.indexes_scanned, 2);
    assert_eq!(report.mismatches.len(), 2);
    assert_eq!(report.exit_code(false), 1);

    let missing = report
        .mismatches
        .iter()
        .filter(|m| matches!(m, Mismatch::MissingModule { .. }))
        .count();
    let differing = report
        .mismatches
        .iter()
        .filter(|m| matches!(m, Mismatch::FilesDiffer { .. }))
        .count();
    assert_eq!((missing, differing), (1, 1));
}

#[test]
fn test_fix_converges_after_one_pass() {
    let tree = mixed_tree();

    let fixed = SyncChecker::new(tree.root()).with_fix(true).run().unwrap();
    // The drifted copy is repaired; the dangling import has no original to
    // copy from and stays broken.
    assert_eq!(fixed.mismatches.len(), 2);
    assert_eq!(fixed.fixes.len(), 1);
    assert_eq!(fixed.exit_code(true), 0);
    assert_eq!(
        tree.read("third_party/3/six/moves/collections_alias.pyi"),
        "class OrderedDict: ...\nclass Counter: ...\n"
    );

    let rerun = SyncChecker::new(tree.root()).run().unwrap();
    assert_eq!(rerun.mismatches.len(), 1);
    assert!(matches!(
        rerun.mismatches[0],
        Mismatch::MissingModule { .. }
    ));
}

#[test]
fn test_moves_package_form_resolves_before_flat_form() {
    let tree = StubTree::new();
    tree.write_stub("stdlib/3/urllib/parse.pyi", "def urlparse(url: str): ...\n");
    tree.write_stub(
        "third_party/3/six/moves/urllib_parse/__init__.pyi",
        "def urlparse(url: str): ...\n",
    );
    tree.write_stub("third_party/3/six/moves/urllib_parse.pyi", "stale\n");
    tree.moves_index("3", &["import urllib.parse as urllib_parse"]);

    // The package form wins, and it matches the original.
    let report = SyncChecker::new(tree.root()).run().unwrap();
    assert!(report.is_clean());
}

#[test]
fn test_report_diff_text_shows_both_directions() {
    let tree = StubTree::new();
    tree.write_stub("stdlib/3/shlex.pyi", "def split(s: str): ...\n");
    tree.write_stub("third_party/3/six/moves/shlex.pyi", "def split(s): ...\n");
    tree.moves_index("3", &["import shlex as shlex"]);

    let report = SyncChecker::new(tree.root()).run().unwrap();
    let Mismatch::FilesDiffer { diff, .. } = &report.mismatches[0] else {
        panic!("expected FilesDiffer");
    };
    assert!(diff.contains("-def split(s: str): ..."));
    assert!(diff.contains("+def split(s): ..."));
}
