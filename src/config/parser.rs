use super::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// Reads, parses and validates a TOML configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML for
/// [`Config`], or fails validation.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Parses and validates configuration from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML for [`Config`] or fails
/// validation.
pub fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse TOML config")?;

    // Validate and return validation errors directly without wrapping
    validate_config(&config)?;
    Ok(config)
}

/// Rejects values the scanner cannot use.
fn validate_config(config: &Config) -> Result<()> {
    let scan = &config.scan;

    if scan.extension.is_empty() {
        anyhow::bail!("scan.extension must not be empty");
    }

    if !scan.extension.starts_with('.') {
        anyhow::bail!("scan.extension must start with '.': {}", scan.extension);
    }

    for (field, names) in [
        ("scan.excluded_dirs", &scan.excluded_dirs),
        ("scan.excluded_files", &scan.excluded_files),
    ] {
        for name in names {
            if name.is_empty() {
                anyhow::bail!("{field} contains an empty name");
            }
            if name.contains('/') || name.contains('\\') {
                anyhow::bail!("{field} entries are plain names, not paths: {name}");
            }
        }
    }

    if config.output.path.as_os_str().is_empty() {
        anyhow::bail!("output.path must not be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Collation;

    #[test]
    fn test_empty_config_is_default() -> Result<()> {
        let config = parse_config_str("")?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_override() -> Result<()> {
        let config = parse_config_str(
            r#"
[scan]
excluded_files = ["index.html", "404.html"]
collation = "codepoint"
"#,
        )?;

        assert!(config.scan.excluded_files.contains("404.html"));
        assert_eq!(config.scan.collation, Collation::Codepoint);
        // untouched fields keep their defaults
        assert_eq!(config.scan.extension, ".html");
        assert!(config.scan.is_excluded_dir(".git"));
        Ok(())
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            "[scan]\nextension = \"\"",
            "[scan]\nextension = \"html\"",
            "[scan]\nexcluded_dirs = [\"\"]",
            "[scan]\nexcluded_dirs = [\"a/b\"]",
            "[scan]\nexcluded_files = [\"sub\\\\index.html\"]",
            "[output]\npath = \"\"",
            "[scan]\ncollation = \"klingon\"",
            "[scan]\nunknown_key = 1",
            "[mystery]\nkey = 1",
            "[scan\nbroken",
        ];

        for case in cases {
            assert!(parse_config_str(case).is_err(), "accepted: {case}");
        }
    }
}
