use serde::{Deserialize, Serialize};

/// One entry in the notes tree.
///
/// Serialized with an internal `type` tag so the JSON reads
/// `{"type": "folder", "name": ..., "path": ..., "children": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A directory that (transitively) contains at least one listed file.
    Folder(FolderNode),
    /// A listed file.
    File(FileNode),
}

/// A directory in the tree. `children` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Raw directory name.
    pub name: String,
    /// `/`-separated path relative to the scan root.
    pub path: String,
    /// Sorted entries of this directory.
    pub children: Vec<Node>,
}

/// A file in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// File name with the extension stripped.
    pub name: String,
    /// `/`-separated path relative to the scan root, extension included.
    pub path: String,
}

impl Node {
    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::File(file) => &file.name,
        }
    }

    /// Path relative to the scan root.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.path,
            Self::File(file) => &file.path,
        }
    }

    /// Whether this is a folder.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Child nodes; empty for files.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Folder(folder) => &folder.children,
            Self::File(_) => &[],
        }
    }
}

/// Number of file nodes at any depth.
#[must_use]
pub fn count_files(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::File(_) => 1,
            Node::Folder(folder) => count_files(&folder.children),
        })
        .sum()
}

/// Number of folder nodes at any depth.
#[must_use]
pub fn count_folders(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::File(_) => 0,
            Node::Folder(folder) => 1 + count_folders(&folder.children),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, path: &str) -> Node {
        Node::File(FileNode {
            name: name.to_string(),
            path: path.to_string(),
        })
    }

    fn folder(name: &str, path: &str, children: Vec<Node>) -> Node {
        Node::Folder(FolderNode {
            name: name.to_string(),
            path: path.to_string(),
            children,
        })
    }

    fn sample() -> Vec<Node> {
        vec![
            folder(
                "docs",
                "docs",
                vec![
                    folder("sub", "docs/sub", vec![file("b", "docs/sub/b.html")]),
                    file("a", "docs/a.html"),
                ],
            ),
            file("top", "top.html"),
        ]
    }

    #[test]
    fn test_counts() {
        let nodes = sample();
        assert_eq!(count_files(&nodes), 3);
        assert_eq!(count_folders(&nodes), 2);
    }

    #[test]
    fn test_counts_empty() {
        assert_eq!(count_files(&[]), 0);
        assert_eq!(count_folders(&[]), 0);
    }

    #[test]
    fn test_json_shape() -> anyhow::Result<()> {
        let value = serde_json::to_value(&sample()[0])?;

        assert_eq!(
            value,
            serde_json::json!({
                "type": "folder",
                "name": "docs",
                "path": "docs",
                "children": [
                    {
                        "type": "folder",
                        "name": "sub",
                        "path": "docs/sub",
                        "children": [
                            {"type": "file", "name": "b", "path": "docs/sub/b.html"}
                        ]
                    },
                    {"type": "file", "name": "a", "path": "docs/a.html"}
                ]
            })
        );
        Ok(())
    }

    #[test]
    fn test_field_order_in_text() -> anyhow::Result<()> {
        let text = serde_json::to_string(&file("a", "docs/a.html"))?;
        assert_eq!(text, r#"{"type":"file","name":"a","path":"docs/a.html"}"#);
        Ok(())
    }

    #[test]
    fn test_accessors() {
        let nodes = sample();
        assert!(nodes[0].is_folder());
        assert_eq!(nodes[0].children().len(), 2);
        assert_eq!(nodes[1].name(), "top");
        assert_eq!(nodes[1].path(), "top.html");
        assert!(nodes[1].children().is_empty());
    }
}
