//! Scan rules and output location.
//!
//! Every value has a built-in default, so a configuration file is optional.
//! When present it is TOML with `[scan]` and `[output]` tables.

/// TOML parsing and validation.
pub mod parser;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default manifest file name, relative to the scan root.
pub const DEFAULT_OUTPUT_FILE: &str = "notes-structure.json";

/// Default extension a file must end with to be listed.
pub const DEFAULT_EXTENSION: &str = ".html";

/// Directory names skipped by default.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "node_modules", "scripts", ".vscode"];

/// File names skipped by default.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["index.html"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which entries the scanner keeps and how it orders them.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Where the manifest goes.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Rules applied by the tree scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Suffix a file name must end with (case-sensitive).
    pub extension: String,
    /// Directory names that are never entered, at any depth.
    pub excluded_dirs: BTreeSet<String>,
    /// File names that are never listed, at any depth.
    pub excluded_files: BTreeSet<String>,
    /// Resolve symbolic links instead of skipping them.
    pub follow_symlinks: bool,
    /// How sibling names are ordered.
    pub collation: Collation,
}

/// Name ordering used when sorting siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collation {
    /// Japanese locale-aware collation.
    #[default]
    Japanese,
    /// Plain Unicode codepoint order.
    Codepoint,
}

/// Manifest output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Manifest path; relative paths are resolved against the scan root.
    pub path: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(ToString::to_string).collect(),
            excluded_files: DEFAULT_EXCLUDED_FILES.iter().map(ToString::to_string).collect(),
            follow_symlinks: false,
            collation: Collation::Japanese,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl ScanConfig {
    /// Whether a directory with this raw name is skipped.
    #[must_use]
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    /// Returns the display name for a file that should be listed, or `None`
    /// if the file is filtered out.
    #[must_use]
    pub fn display_name<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        if self.excluded_files.contains(file_name) {
            return None;
        }
        file_name.strip_suffix(self.extension.as_str())
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid TOML or unknown fields
    /// - A value fails validation
    pub fn load(path: &Path) -> Result<Self> {
        parser::parse_config_file(path)
    }
}
