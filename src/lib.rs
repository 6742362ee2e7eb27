#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Notetree - HTML Notes Manifest Generator
//!
//! Notetree walks a directory of HTML notes and writes a JSON manifest of the
//! folder/file hierarchy, suitable for driving a navigation sidebar on a
//! static notes site.
//!
//! ## Architecture
//!
//! - [`scanner`]: Recursive directory walk, exclusion rules, pruning and ordering
//! - [`manifest`]: The timestamped output document and its writer
//! - [`commands`]: Command implementations driven by the CLI
//! - [`config`]: Scan rules and output location, with TOML overrides
//! - [`output`]: Console messages with verbosity control
//! - [`cli`]: Argument parsing structures
//!
//! ## Example Usage
//!
//! ```no_run
//! use notetree::NotetreeContext;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = NotetreeContext::new(".".into(), None, None)?;
//! let report = notetree::commands::generate::execute(&ctx)?;
//! println!("{} files in {} folders", report.files, report.folders);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Command implementations.
pub mod commands;

/// Configuration parsing, validation, and defaults.
pub mod config;

/// Manifest document and serialization.
pub mod manifest;

/// Output formatting and verbosity control.
pub mod output;

/// Directory scanning and tree construction.
pub mod scanner;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Current version of the notetree binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration file looked up in the scan root when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "notetree.toml";

/// Environment variable overriding the configuration file lookup.
pub const CONFIG_PATH_ENV: &str = "NOTETREE_CONFIG_PATH";

/// Resolved inputs for a single notetree run.
///
/// Holds the canonical scan root, the loaded configuration and the final
/// output path. Paths given relative to the working directory are resolved
/// once here so the rest of the crate only sees absolute paths.
#[derive(Debug, Clone)]
pub struct NotetreeContext {
    /// Absolute path of the directory being scanned.
    pub root: PathBuf,

    /// Configuration file that was loaded, if any.
    pub config_path: Option<PathBuf>,

    /// Loaded configuration settings.
    pub config: config::Config,

    /// Where the manifest is written.
    pub output_path: PathBuf,
}

impl NotetreeContext {
    /// Builds a context for scanning `root`.
    ///
    /// The configuration is taken from `config_path` when given, otherwise
    /// from `$NOTETREE_CONFIG_PATH`, otherwise from `notetree.toml` in the
    /// root if present. A relative `output` is resolved against the root.
    ///
    /// # Errors
    ///
    /// Returns an error if the root does not exist or is not a directory,
    /// or if an explicitly requested configuration file cannot be loaded.
    pub fn new(
        root: PathBuf,
        config_path: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve scan root: {}", root.display()))?;

        if !root.is_dir() {
            anyhow::bail!("Scan root is not a directory: {}", root.display());
        }

        let (config, config_path) = match config_path {
            Some(path) => (config::Config::load(&path)?, Some(path)),
            None => Self::discover_config(&root)?,
        };

        let output_path =
            resolve_against(&root, output.as_deref().unwrap_or(&config.output.path));

        Ok(Self {
            root,
            config_path,
            config,
            output_path,
        })
    }

    /// Builds a context from an already loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be canonicalized.
    pub fn with_config(root: PathBuf, config: config::Config) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve scan root: {}", root.display()))?;
        let output_path = resolve_against(&root, &config.output.path);

        Ok(Self {
            root,
            config_path: None,
            config,
            output_path,
        })
    }

    /// Finds the configuration via environment variable or the root's default file.
    fn discover_config(root: &Path) -> Result<(config::Config, Option<PathBuf>)> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            return Ok((config::Config::load(&path)?, Some(path)));
        }

        let default_path = root.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            return Ok((config::Config::load(&default_path)?, Some(default_path)));
        }

        Ok((config::Config::default(), None))
    }
}

/// Joins `path` onto `base` unless it is already absolute.
fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
