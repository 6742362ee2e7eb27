//! Command-line interface definitions for notetree.
//!
//! The CLI definitions are shared between the main binary and build tools
//! (like xtask) for man page generation.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for notetree.
#[derive(Parser)]
#[command(
    name = "notetree",
    version = crate::VERSION,
    about = "Generate a JSON manifest of HTML notes for a navigation sidebar",
    long_about = "Scans a directory tree for HTML files and writes notes-structure.json, \
                  a folder/file hierarchy sorted folders-first in Japanese collation order"
)]
pub struct Cli {
    /// Optional subcommand; without one the manifest is generated
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Manifest file to write (relative paths resolve against the root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to $NOTETREE_CONFIG_PATH, then notetree.toml in the root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
