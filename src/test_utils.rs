//! Shared fixtures for unit tests.

/// Temporary directory builders.
pub mod fixtures {
    use anyhow::Result;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Temporary notes directory for scanner tests.
    pub struct TestTree {
        /// Removed on drop
        pub temp_dir: TempDir,
    }

    impl TestTree {
        /// Creates an empty tree in a fresh temporary directory.
        pub fn new() -> Result<Self> {
            Ok(Self {
                temp_dir: tempfile::tempdir()?,
            })
        }

        /// Root of the tree.
        pub fn root(&self) -> &Path {
            self.temp_dir.path()
        }

        /// Creates a file (and its parents) with placeholder HTML content.
        pub fn file(&self, relative: &str) -> Result<PathBuf> {
            let path = self.root().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, format!("<html><body>{relative}</body></html>"))?;
            Ok(path)
        }

        /// Creates a directory (and its parents) with no contents.
        pub fn dir(&self, relative: &str) -> Result<PathBuf> {
            let path = self.root().join(relative);
            fs::create_dir_all(&path)?;
            Ok(path)
        }
    }
}
