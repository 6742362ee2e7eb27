//! Recursive directory scanner that builds the notes tree.
//!
//! The walk reads one directory level at a time, filters entries against the
//! [`ScanConfig`], recurses into subdirectories and drops any folder that ends
//! up with no children. Siblings are sorted folders-first, then by name.

use crate::config::ScanConfig;
use crate::scanner::collation::NameCollator;
use crate::scanner::node::{FileNode, FolderNode, Node};
use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, span};
use walkdir::WalkDir;

/// Builds the ordered folder/file tree for a directory.
#[derive(Debug)]
pub struct TreeScanner<'a> {
    /// Filtering rules
    config: &'a ScanConfig,
    /// Sibling name ordering
    collator: NameCollator,
}

impl<'a> TreeScanner<'a> {
    /// Create a scanner for the given rules
    ///
    /// # Errors
    ///
    /// Returns an error if the configured collation cannot be loaded
    pub fn new(config: &'a ScanConfig) -> Result<Self> {
        Ok(Self {
            config,
            collator: NameCollator::new(config.collation)?,
        })
    }

    /// Scan `root` and return its filtered, sorted contents.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `root` does not exist or is not a directory
    /// - Any directory in the walk cannot be read
    /// - A symlinked directory leads back to one of its ancestors
    pub fn scan(&self, root: &Path) -> Result<Vec<Node>> {
        let metadata = std::fs::metadata(root)
            .with_context(|| format!("Failed to access scan root: {}", root.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Scan root is not a directory: {}", root.display());
        }

        let mut ancestors = Vec::new();
        self.scan_directory(root, "", &mut ancestors)
    }

    /// Scan one directory. `relative` is its path from the root ("" at the root).
    fn scan_directory(
        &self,
        dir: &Path,
        relative: &str,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<Vec<Node>> {
        let span = span!(Level::DEBUG, "scan_directory", path = %dir.display());
        let _guard = span.enter();

        let pushed = if self.config.follow_symlinks {
            let real = dir
                .canonicalize()
                .with_context(|| format!("Failed to resolve directory: {}", dir.display()))?;
            if ancestors.contains(&real) {
                anyhow::bail!(
                    "Directory loop detected: {} resolves to ancestor {}",
                    dir.display(),
                    real.display()
                );
            }
            ancestors.push(real);
            true
        } else {
            false
        };

        let result = self.collect_entries(dir, relative, ancestors);

        if pushed {
            ancestors.pop();
        }

        let mut items = result?;
        items.sort_by(|a, b| self.compare_nodes(a, b));

        debug!(entries = items.len(), "Directory scanned");
        Ok(items)
    }

    /// Read the immediate entries of `dir`, recursing into subdirectories.
    fn collect_entries(
        &self,
        dir: &Path,
        relative: &str,
        ancestors: &mut Vec<PathBuf>,
    ) -> Result<Vec<Node>> {
        let mut items = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_symlinks)
        {
            let entry = entry
                .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;

            let name = entry.file_name().to_string_lossy().into_owned();
            let item_path = join_relative(relative, &name);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if self.config.is_excluded_dir(&name) {
                    debug!(dir = %item_path, "Skipping excluded directory");
                    continue;
                }

                let children = self.scan_directory(entry.path(), &item_path, ancestors)?;
                if children.is_empty() {
                    debug!(dir = %item_path, "Pruning empty directory");
                    continue;
                }

                items.push(Node::Folder(FolderNode {
                    name,
                    path: item_path,
                    children,
                }));
            } else if file_type.is_file() {
                let Some(display_name) = self.config.display_name(&name) else {
                    continue;
                };

                items.push(Node::File(FileNode {
                    name: display_name.to_string(),
                    path: item_path,
                }));
            }
        }

        Ok(items)
    }

    /// Folders first, then collated name, then codepoint name and path.
    fn compare_nodes(&self, a: &Node, b: &Node) -> Ordering {
        b.is_folder()
            .cmp(&a.is_folder())
            .then_with(|| self.collator.compare(a.name(), b.name()))
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| a.path().cmp(b.path()))
    }
}

/// Convenience wrapper: scan `root` with `config`.
///
/// # Errors
///
/// See [`TreeScanner::scan`].
pub fn scan_tree(root: &Path, config: &ScanConfig) -> Result<Vec<Node>> {
    TreeScanner::new(config)?.scan(root)
}

/// `parent/name`, or just `name` at the root.
fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
