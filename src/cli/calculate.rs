//! Calculate command - compute savings and print or save the report

use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ProjectConfig;
use crate::impact;
use crate::models::{DocumentCounts, ImpactReport};
use crate::reporters::{self, OutputFormat, RenderOptions, DOWNLOAD_FILE_NAME};
use crate::share::share_links;

/// Resolved flags for a single calculate run
#[derive(Debug, Clone)]
pub struct CalculateOptions {
    pub format: String,
    pub output: Option<PathBuf>,
    pub download: bool,
    pub no_emoji: bool,
    pub share: bool,
}

/// Run the calculate command
pub fn run(counts: DocumentCounts, config: &ProjectConfig, options: CalculateOptions) -> Result<()> {
    let report = match impact::calculate(&counts) {
        Ok(report) => report,
        Err(err) => super::exit_with_warning(err),
    };

    let format: OutputFormat = options.format.parse()?;
    let render_options = RenderOptions {
        share_links: if options.share {
            share_links(&report, &config.share)
        } else {
            Vec::new()
        },
        no_emoji: options.no_emoji,
    };
    let output = reporters::report_with_format(&report, format, &render_options)?;

    match &options.output {
        Some(path) => {
            write_report(path, &output)?;
            println!(
                "{}Report written to: {}",
                emoji_prefix("📄 ", options.no_emoji),
                style(path.display()).cyan()
            );
        }
        None => println!("{}", output),
    }

    if options.download {
        let path = download_markdown(&report, Path::new(DOWNLOAD_FILE_NAME))?;
        // Keep stdout clean for machine-readable formats
        let line = format!(
            "{}Downloaded results as Markdown: {}",
            emoji_prefix("📅 ", options.no_emoji),
            style(path.display()).cyan()
        );
        if format == OutputFormat::Json {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Save the markdown report to `path`
pub(crate) fn download_markdown(report: &ImpactReport, path: &Path) -> Result<PathBuf> {
    let md = reporters::report_with_format(report, OutputFormat::Markdown, &RenderOptions::default())?;
    write_report(path, &md)?;
    Ok(path.to_path_buf())
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn emoji_prefix(emoji: &'static str, no_emoji: bool) -> &'static str {
    if no_emoji {
        ""
    } else {
        emoji
    }
}
