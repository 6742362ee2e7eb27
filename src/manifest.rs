//! The manifest document written for the notes sidebar.
//!
//! A manifest is the scanned tree plus the instant it was generated. It is
//! rebuilt from scratch on every run and written as pretty-printed JSON,
//! replacing whatever file was there before.

use crate::config::ScanConfig;
use crate::scanner::{Node, count_files, count_folders, scan_tree};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Top-level JSON document: `{ "generated": ..., "notes": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// UTC instant the manifest was generated.
    #[serde(with = "iso8601_millis")]
    pub generated: DateTime<Utc>,
    /// Root-level nodes.
    pub notes: Vec<Node>,
}

impl Manifest {
    /// Wraps an already scanned tree, stamped with the current time.
    #[must_use]
    pub fn new(notes: Vec<Node>) -> Self {
        Self {
            generated: Utc::now(),
            notes,
        }
    }

    /// Scans `root` once and wraps the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails.
    pub fn generate(root: &Path, config: &ScanConfig) -> Result<Self> {
        let notes = scan_tree(root, config)?;
        Ok(Self::new(notes))
    }

    /// Total number of file nodes at any depth.
    #[must_use]
    pub fn file_count(&self) -> usize {
        count_files(&self.notes)
    }

    /// Total number of folder nodes at any depth.
    #[must_use]
    pub fn folder_count(&self) -> usize {
        count_folders(&self.notes)
    }

    /// Serializes to two-space indented JSON, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest")
    }

    /// Overwrites `path` with the serialized manifest.
    ///
    /// The file is truncated and rewritten in place; a failure part way
    /// through can leave it incomplete.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json.as_bytes())
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
        debug!(path = %path.display(), bytes = json.len(), "Manifest written");
        Ok(())
    }

    /// Reads a manifest previously produced by [`Manifest::write`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))
    }
}

/// `DateTime<Utc>` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Millisecond precision with a `Z` suffix.
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Accepts any RFC 3339 timestamp and converts it to UTC.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{FileNode, FolderNode};
    use crate::test_utils::fixtures::TestTree;
    use chrono::TimeZone;

    fn fixed_manifest() -> Manifest {
        Manifest {
            generated: Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap()
                + chrono::Duration::milliseconds(789),
            notes: vec![Node::Folder(FolderNode {
                name: "メモ".into(),
                path: "メモ".into(),
                children: vec![Node::File(FileNode {
                    name: "今日".into(),
                    path: "メモ/今日.html".into(),
                })],
            })],
        }
    }

    #[test]
    fn test_exact_json_text() -> Result<()> {
        let json = fixed_manifest().to_json()?;

        let expected = r#"{
  "generated": "2024-05-01T12:34:56.789Z",
  "notes": [
    {
      "type": "folder",
      "name": "メモ",
      "path": "メモ",
      "children": [
        {
          "type": "file",
          "name": "今日",
          "path": "メモ/今日.html"
        }
      ]
    }
  ]
}"#;
        assert_eq!(json, expected);
        Ok(())
    }

    #[test]
    fn test_empty_notes() -> Result<()> {
        let manifest = Manifest {
            notes: Vec::new(),
            ..fixed_manifest()
        };
        let json = manifest.to_json()?;

        assert!(json.ends_with("\"notes\": []\n}"));
        assert_eq!(manifest.file_count(), 0);
        assert_eq!(manifest.folder_count(), 0);
        Ok(())
    }

    #[test]
    fn test_write_overwrites_and_loads_back() -> Result<()> {
        let tree = TestTree::new()?;
        let out = tree.root().join("notes-structure.json");
        std::fs::write(&out, "x".repeat(10_000))?;

        let manifest = fixed_manifest();
        manifest.write(&out)?;

        let text = std::fs::read_to_string(&out)?;
        assert_eq!(text, manifest.to_json()?);
        assert_eq!(Manifest::load(&out)?, manifest);
        Ok(())
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let tree = TestTree::new().unwrap();
        let out = tree.root().join("no/such/dir/out.json");

        let err = fixed_manifest().write(&out).unwrap_err();
        assert!(err.to_string().contains("Failed to write manifest"));
    }

    #[test]
    fn test_generate_counts() -> Result<()> {
        let tree = TestTree::new()?;
        tree.file("index.html")?;
        tree.file("docs/a.html")?;
        tree.file("docs/sub/b.html")?;
        tree.file("top.html")?;

        let manifest = Manifest::generate(tree.root(), &ScanConfig::default())?;

        assert_eq!(manifest.file_count(), 3);
        assert_eq!(manifest.folder_count(), 2);
        Ok(())
    }

    #[test]
    fn test_generated_is_recent_utc() -> Result<()> {
        let before = Utc::now();
        let manifest = Manifest::new(Vec::new());
        let after = Utc::now();

        assert!(manifest.generated >= before && manifest.generated <= after);
        let json = manifest.to_json()?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        let stamp = value["generated"].as_str().unwrap_or_default();
        assert!(stamp.ends_with('Z'));
        assert_eq!(stamp.len(), "2024-05-01T12:34:56.789Z".len());
        Ok(())
    }
}
