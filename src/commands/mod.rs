/// Scan the notes tree and write the manifest.
pub mod generate;
