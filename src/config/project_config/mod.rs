//! Project-level configuration support
//!
//! Loads configuration from `sign-impact.toml` or `.sign-impactrc.json` in
//! the working directory, falling back to the user-level file.
//!
//! # Configuration Format
//!
//! ```toml
//! # sign-impact.toml
//!
//! [share]
//! app_url = "https://sign.example.com"
//! brand = "Evia Sign Savings calculator"
//! hashtag = "eviasign"
//! title = "Sustainability Impact"
//!
//! [defaults]
//! format = "text"
//! no_emoji = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::user_config;

/// File names searched in the working directory, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["sign-impact.toml", ".sign-impactrc.json"];

pub const DEFAULT_APP_URL: &str = "https://yourappurl.com";
pub const DEFAULT_BRAND: &str = "Evia Sign Savings calculator";
pub const DEFAULT_HASHTAG: &str = "eviasign";
pub const DEFAULT_SHARE_TITLE: &str = "Sustainability Impact";

/// Project configuration loaded from sign-impact.toml or similar
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ProjectConfig {
    /// Share-link settings
    #[serde(default)]
    pub share: ShareConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Settings that end up inside the share links
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ShareConfig {
    /// Page linked from LinkedIn and Facebook shares
    #[serde(default = "default_app_url")]
    pub app_url: String,

    /// Product name quoted at the end of the share sentence
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Hashtag without the leading '#'
    #[serde(default = "default_hashtag")]
    pub hashtag: String,

    /// LinkedIn article title
    #[serde(default = "default_share_title")]
    pub title: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            app_url: default_app_url(),
            brand: default_brand(),
            hashtag: default_hashtag(),
            title: default_share_title(),
        }
    }
}

fn default_app_url() -> String {
    DEFAULT_APP_URL.to_string()
}
fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}
fn default_hashtag() -> String {
    DEFAULT_HASHTAG.to_string()
}
fn default_share_title() -> String {
    DEFAULT_SHARE_TITLE.to_string()
}

impl ShareConfig {
    /// Hashtag with any leading '#' characters stripped
    pub fn hashtag(&self) -> &str {
        self.hashtag.trim_start_matches('#')
    }
}

/// Default CLI flags that can be set in config
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default output format (text, json, html, markdown)
    #[serde(default)]
    pub format: Option<String>,

    /// Disable emoji by default
    #[serde(default)]
    pub no_emoji: Option<bool>,
}

/// Load configuration.
///
/// Search order:
/// 1. `explicit` path, when given (`--config`)
/// 2. `sign-impact.toml` in `dir`
/// 3. `.sign-impactrc.json` in `dir`
/// 4. `~/.config/sign-impact/config.toml`
///
/// A file that fails to parse is logged and skipped. Returns defaults when
/// nothing usable is found.
pub fn load_project_config(dir: &Path, explicit: Option<&Path>) -> ProjectConfig {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(path) = explicit {
        if !path.exists() {
            warn!("Config file {} does not exist", path.display());
        }
        candidates.push(path.to_path_buf());
    }
    candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)));
    if let Some(user_path) = user_config::user_config_path() {
        candidates.push(user_path);
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    ProjectConfig::default()
}

/// Load a config file, picking the parser from its extension
fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let config = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(config)
}
