//! Init command - write an example config file

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::config::{user_config_path, write_example_config, CONFIG_FILE_NAMES};

/// Run the init command
pub fn run(dir: &Path, force: bool, user: bool) -> Result<()> {
    let config_path = if user {
        user_config_path().context("Could not determine config directory")?
    } else {
        dir.join(CONFIG_FILE_NAMES[0])
    };

    println!("\n{} Initializing sign-impact\n", style("🌍").bold());

    if write_example_config(&config_path, force)? {
        println!(
            "{} Created {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    } else {
        println!(
            "{} Already exists: {} (use --force to overwrite)",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    }

    println!("\nNext steps:");
    println!("  {} Set your app URL and hashtag", style("edit the [share] section").cyan());
    println!(
        "  {} Calculate savings",
        style("sign-impact calculate --total 5000 --signed 1000").cyan()
    );
    println!("  {} Interactive form", style("sign-impact").cyan());

    Ok(())
}
