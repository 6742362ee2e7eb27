/// Locale-aware ordering of sibling names.
pub mod collation;

/// Folder/file node types and tree aggregates.
pub mod node;

/// Recursive directory walk producing the notes tree.
pub mod tree;

pub use collation::NameCollator;
pub use node::{FileNode, FolderNode, Node, count_files, count_folders};
pub use tree::{TreeScanner, scan_tree};
