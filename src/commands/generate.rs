use crate::NotetreeContext;
use crate::manifest::Manifest;
use crate::output;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{Level, info, span};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Where the manifest was written.
    pub output_path: PathBuf,
    /// Number of listed files.
    pub files: usize,
    /// Number of listed folders.
    pub folders: usize,
}

/// Scan the context root, write the manifest and report counts.
///
/// Nothing is written if the scan fails.
///
/// # Errors
///
/// Returns an error if:
/// - The scan fails (missing root, unreadable directory, symlink loop)
/// - The manifest cannot be written
pub fn execute(ctx: &NotetreeContext) -> Result<GenerateReport> {
    let span = span!(Level::INFO, "generate", root = %ctx.root.display());
    let _guard = span.enter();

    output::info("Scanning HTML files...");
    if let Some(config_path) = &ctx.config_path {
        output::verbose(&format!("Using config: {}", config_path.display()));
    }

    let manifest = Manifest::generate(&ctx.root, &ctx.config.scan)?;
    manifest.write(&ctx.output_path)?;

    let report = GenerateReport {
        output_path: ctx.output_path.clone(),
        files: manifest.file_count(),
        folders: manifest.folder_count(),
    };
    info!(files = report.files, folders = report.folders, "Manifest generated");

    output::info(&format!("Generated: {}", report.output_path.display()));
    output::success(&format!(
        "Found {} HTML files in {} folders",
        report.files, report.folders
    ));

    Ok(report)
}
