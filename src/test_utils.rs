//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty file, creating parent directories as needed.
    pub fn add_file(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, "").expect("Failed to write file");
        full_path
    }

    /// Create a directory and any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate the layout used throughout the test suite:
    ///
    /// ```text
    /// contents
    /// ├── a
    /// │   ├── a1
    /// │   ├── a2
    /// │   │   └── aa
    /// │   └── a3
    /// ├── b
    /// └── c\ 0
    ///     └── c\ c
    /// ```
    ///
    /// Returns the path of `contents`.
    pub fn sample_tree(&self) -> PathBuf {
        self.add_file("contents/a/a2/aa");
        self.add_file("contents/a/a1");
        self.add_file("contents/b");
        self.add_dir("contents/a/a3");
        self.add_file("contents/c 0/c c");
        self.dir.path().join("contents")
    }

    /// Build `width` directories per level, `depth` levels deep, each holding
    /// `width` files.
    pub fn wide_tree(&self, width: usize, depth: usize) -> PathBuf {
        fn fill(dir: &Path, width: usize, depth: usize) {
            for i in 0..width {
                fs::write(dir.join(format!("file_{:03}.txt", i)), "")
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let sub = dir.join(format!("dir_{:03}", i));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1);
            }
        }

        let root = self.add_dir("wide");
        fill(&root, width, depth);
        root
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
