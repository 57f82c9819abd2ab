//! Configuration module for sign-impact
//!
//! This module handles:
//! - Directory-level configuration (sign-impact.toml, .sign-impactrc.json)
//! - User-level configuration (~/.config/sign-impact/config.toml)
//! - Share-link settings and CLI defaults

mod project_config;
mod user_config;

pub use project_config::{
    CliDefaults,
    ProjectConfig,
    ShareConfig,
    load_project_config,
    CONFIG_FILE_NAMES,
    DEFAULT_APP_URL,
};
pub use user_config::{user_config_path, write_example_config, EXAMPLE_CONFIG};
