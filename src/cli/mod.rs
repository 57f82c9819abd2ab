//! CLI command definitions and handlers

mod calculate;
mod form;
mod init;
mod share;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{load_project_config, ProjectConfig};
use crate::impact::ImpactError;

/// Exit code used when the input fails validation
pub const EXIT_INVALID_INPUT: i32 = 2;

/// sign-impact - Digital Approval Impact Calculator
///
/// Estimates the carbon, trees, water, energy and cost saved by signing
/// documents digitally instead of on paper.
#[derive(Parser, Debug)]
#[command(name = "sign-impact")]
#[command(
    version,
    about = "Estimate the environmental and cost savings of digital signatures",
    long_about = "sign-impact converts a count of digitally signed documents into estimated \
savings compared with paper: CO2, trees, water, energy and printing/postage cost.\n\n\
Run without a subcommand to open the interactive form.",
    after_help = "\
Examples:
  sign-impact                                          Interactive form
  sign-impact calculate --total 5000 --signed 1000     Print the impact summary
  sign-impact calculate --total 5000 --signed 1000 -f markdown -o report.md
  sign-impact share --total 5000 --signed 1000 --target linkedin
  sign-impact init                                     Write sign-impact.toml"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ./sign-impact.toml, then ./.sign-impactrc.json, then user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Page linked from LinkedIn and Facebook shares
    #[arg(long, global = true, env = "SIGN_IMPACT_APP_URL")]
    pub app_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate savings and print the impact report
    #[command(after_help = "\
Examples:
  sign-impact calculate --total 5000 --signed 1000                  Terminal summary
  sign-impact calculate --total 5000 --signed 1000 --format json    JSON for scripting
  sign-impact calculate --total 5000 --signed 1000 --download       Also save sustainability_report.md
  sign-impact calculate --total 5000 --signed 1000 -f html -o impact.html")]
    Calculate {
        #[command(flatten)]
        counts: CountArgs,

        /// Output format: text, markdown (or md), json, html
        #[arg(long, short = 'f', value_parser = ["text", "markdown", "md", "json", "html"])]
        format: Option<String>,

        /// Write the report to this file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Also save the markdown report as sustainability_report.md
        #[arg(long)]
        download: bool,

        /// Disable emoji and colors in output
        #[arg(long)]
        no_emoji: bool,

        /// Leave the share links out of text and html output
        #[arg(long)]
        no_share: bool,
    },

    /// Print social share links for the calculated savings
    Share {
        #[command(flatten)]
        counts: CountArgs,

        /// Only print the link for this network
        #[arg(long, value_parser = ["twitter", "linkedin", "facebook"])]
        target: Option<String>,
    },

    /// Open the interactive calculator form
    Form,

    /// Write an example sign-impact.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Write to the user config directory instead
        #[arg(long)]
        user: bool,
    },

    /// Show which config file is in effect and the resolved settings
    Config,
}

/// The two form fields
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct CountArgs {
    /// Total documents produced annually
    #[arg(long, default_value = "0")]
    pub total: u64,

    /// Documents needing signature and seal
    #[arg(long, default_value = "0")]
    pub signed: u64,
}

impl From<CountArgs> for crate::models::DocumentCounts {
    fn from(args: CountArgs) -> Self {
        Self::new(args.total, args.signed)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(&cwd, cli.config.as_deref(), cli.app_url.as_deref());

    match cli.command {
        Some(Commands::Calculate {
            counts,
            format,
            output,
            download,
            no_emoji,
            no_share,
        }) => {
            let format = format
                .or_else(|| config.defaults.format.clone())
                .unwrap_or_else(|| "text".to_string());
            let no_emoji = no_emoji || config.defaults.no_emoji.unwrap_or(false);
            calculate::run(
                counts.into(),
                &config,
                calculate::CalculateOptions {
                    format,
                    output,
                    download,
                    no_emoji,
                    share: !no_share,
                },
            )
        }

        Some(Commands::Share { counts, target }) => {
            share::run(counts.into(), &config, target.as_deref())
        }

        Some(Commands::Init { force, user }) => init::run(&cwd, force, user),

        Some(Commands::Config) => show_config(&cwd, cli.config.as_deref(), &config),

        Some(Commands::Form) | None => form::run(config),
    }
}

/// Load config and apply the `--app-url` override
fn resolve_config(dir: &Path, explicit: Option<&Path>, app_url: Option<&str>) -> ProjectConfig {
    let mut config = load_project_config(dir, explicit);
    if let Some(url) = app_url {
        debug!("Overriding app URL with {}", url);
        config.share.app_url = url.to_string();
    }
    config
}

/// Print the validation warning and exit with `EXIT_INVALID_INPUT`
fn exit_with_warning(err: ImpactError) -> ! {
    eprintln!("{} {}", style("⚠").yellow().bold(), style(err).yellow());
    std::process::exit(EXIT_INVALID_INPUT);
}

fn show_config(dir: &Path, explicit: Option<&Path>, config: &ProjectConfig) -> Result<()> {
    println!("📁 Config paths:");
    let mut paths: Vec<PathBuf> = Vec::new();
    if let Some(p) = explicit {
        paths.push(p.to_path_buf());
    }
    paths.extend(crate::config::CONFIG_FILE_NAMES.iter().map(|n| dir.join(n)));
    if let Some(p) = crate::config::user_config_path() {
        paths.push(p);
    }
    for path in paths {
        let status = if path.exists() {
            style("✓").green().to_string()
        } else {
            style("(not found)").dim().to_string()
        };
        println!("  {} {}", path.display(), status);
    }
    println!();
    println!("📢 Share settings:");
    println!("  app_url: {}", config.share.app_url);
    println!("  brand:   {}", config.share.brand);
    println!("  hashtag: #{}", config.share.hashtag());
    println!("  title:   {}", config.share.title);
    println!();
    println!("⚙️  Defaults:");
    println!(
        "  format:   {}",
        config.defaults.format.as_deref().unwrap_or("text")
    );
    println!(
        "  no_emoji: {}",
        config.defaults.no_emoji.unwrap_or(false)
    );
    Ok(())
}
