//! Share command - print social share links

use anyhow::Result;
use console::style;

use crate::config::ProjectConfig;
use crate::impact;
use crate::models::DocumentCounts;
use crate::share::{build_url, share_links, share_text, ShareTarget};

pub fn run(counts: DocumentCounts, config: &ProjectConfig, target: Option<&str>) -> Result<()> {
    let report = match impact::calculate(&counts) {
        Ok(report) => report,
        Err(err) => super::exit_with_warning(err),
    };

    // A single target prints the bare URL so it can be piped
    if let Some(target) = target {
        let target: ShareTarget = target.parse()?;
        let text = share_text(&report, &config.share);
        println!("{}", build_url(target, &text, &config.share));
        return Ok(());
    }

    println!("\n📢 {}\n", style("Share Your Impact").bold());
    for link in share_links(&report, &config.share) {
        println!(
            "  Share on {} {}\n    {}",
            style(link.target.name()).bold(),
            link.target.emoji(),
            style(&link.url).cyan()
        );
    }
    println!();
    Ok(())
}
