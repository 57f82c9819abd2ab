//! User-level configuration for sign-impact
//!
//! Lives at `~/.config/sign-impact/config.toml` and uses the same format as
//! the per-directory `sign-impact.toml`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Commented example written by `sign-impact init`
pub const EXAMPLE_CONFIG: &str = r#"# sign-impact configuration

[share]
# Page linked from LinkedIn and Facebook shares
# app_url = "https://yourappurl.com"

# Product name quoted at the end of the share sentence
# brand = "Evia Sign Savings calculator"

# Hashtag appended to the share sentence (without '#')
# hashtag = "eviasign"

# LinkedIn article title
# title = "Sustainability Impact"

[defaults]
# Default output format (text, markdown, json, html)
format = "text"

# Disable emoji in terminal output
no_emoji = false
"#;

/// Get the user config file path
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sign-impact").join("config.toml"))
}

/// Write the example config to `path`, creating parent directories.
///
/// Returns `false` without touching the file when it already exists and
/// `force` is not set.
pub fn write_example_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: ProjectConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.share, Default::default());
        assert_eq!(config.defaults.format.as_deref(), Some("text"));
        assert_eq!(config.defaults.no_emoji, Some(false));
    }

    #[test]
    fn test_write_example_config_respects_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sign-impact.toml");

        assert!(write_example_config(&path, false).unwrap());
        std::fs::write(&path, "# edited").unwrap();

        assert!(!write_example_config(&path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# edited");

        assert!(write_example_config(&path, true).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), EXAMPLE_CONFIG);
    }

    #[test]
    fn test_user_config_path_returns_some() {
        if let Some(p) = user_config_path() {
            assert!(p.ends_with("sign-impact/config.toml"));
        }
    }
}
