//! [`StubTree`] builder for stub-workspace test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary stub workspace with helper methods for test setup and
/// assertion.
///
/// The layout mirrors a real stub distribution: a `stdlib/<pkg>/` tree and
/// a parallel `third_party/<pkg>/` tree whose `six/moves/__init__.pyi`
/// enumerates the aliasing imports.
///
/// # Example
///
/// ```rust,no_run
/// use stubsync_test_utils::StubTree;
///
/// let tree = StubTree::new();
/// tree.write_stub("stdlib/3/queue.pyi", "class Queue: ...\n");
/// tree.write_stub("third_party/3/six/moves/queue.pyi", "class Queue: ...\n");
/// tree.moves_index("3", &["import queue as queue"]);
/// ```
pub struct StubTree {
    temp_dir: TempDir,
}

impl Default for StubTree {
    fn default() -> Self {
        Self::new()
    }
}

impl StubTree {
    /// Create an empty temporary workspace.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the workspace root path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a stub file at a path relative to the workspace root,
    /// creating parent directories as needed. Returns the absolute path.
    pub fn write_stub(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `third_party/<pkg>/six/moves/__init__.pyi` containing the
    /// given lines. Returns the absolute path of the index file.
    pub fn moves_index(&self, pkg: &str, lines: &[&str]) -> PathBuf {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        self.write_stub(
            &format!("third_party/{pkg}/six/moves/__init__.pyi"),
            &content,
        )
    }

    /// Read a file relative to the workspace root.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.join(relative)).unwrap()
    }

    /// Assert that a file exists relative to the workspace root.
    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.join(relative).is_file(),
            "expected file to exist: {relative}"
        );
    }

    fn join(&self, relative: &str) -> PathBuf {
        let mut path = self.root().to_path_buf();
        for part in relative.split('/') {
            path.push(part);
        }
        path
    }
}
