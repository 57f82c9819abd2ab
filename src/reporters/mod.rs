//! Output reporters for impact results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors and emoji
//! - `markdown` - The downloadable sustainability report
//! - `json` - Machine-readable JSON
//! - `html` - Standalone HTML page with metric cards and share links

mod html;
mod json;
mod markdown;
mod text;

use crate::models::{DisplayMetrics, ImpactReport};
use crate::share::ShareLink;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// File name used when the report is downloaded without an explicit path
pub const DOWNLOAD_FILE_NAME: &str = "sustainability_report.md";

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, html, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Extra inputs a reporter may use besides the numbers themselves
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Share links to append (text and html only)
    pub share_links: Vec<ShareLink>,
    /// Plain output without emoji or ANSI colors
    pub no_emoji: bool,
}

/// One on-screen metric
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub label: &'static str,
    pub emoji: &'static str,
    pub value: String,
}

/// The five metrics in display order, with their screen labels
pub fn metric_rows(metrics: &DisplayMetrics) -> [MetricRow; 5] {
    [
        MetricRow {
            label: "Carbon Saved (kg)",
            emoji: "💨",
            value: metrics.carbon_kg.clone(),
        },
        MetricRow {
            label: "Trees Saved",
            emoji: "🌳",
            value: metrics.trees.clone(),
        },
        MetricRow {
            label: "Water Saved (L)",
            emoji: "💧",
            value: metrics.water_liters.clone(),
        },
        MetricRow {
            label: "Energy Saved (kWh)",
            emoji: "⚡",
            value: metrics.energy_kwh.clone(),
        },
        MetricRow {
            label: "Cost Savings (USD)",
            emoji: "💰",
            value: format!("${}", metrics.cost_usd),
        },
    ]
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(
    report: &ImpactReport,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, options),
        OutputFormat::Json => json::render(report),
        OutputFormat::Html => html::render(report, options),
        OutputFormat::Markdown => markdown::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::ShareConfig;
    use crate::impact::savings_for;
    use crate::share::share_links;

    /// Report for 1000 signed documents
    pub(crate) fn test_report() -> ImpactReport {
        savings_for(1000)
    }

    pub(crate) fn test_options() -> RenderOptions {
        RenderOptions {
            share_links: share_links(&test_report(), &ShareConfig::default()),
            no_emoji: false,
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_metric_rows_order_and_cost_prefix() {
        let rows = metric_rows(&test_report().display());
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            [
                "Carbon Saved (kg)",
                "Trees Saved",
                "Water Saved (L)",
                "Energy Saved (kWh)",
                "Cost Savings (USD)"
            ]
        );
        assert_eq!(rows[4].value, "$550.00");
    }

    #[test]
    fn test_every_format_shows_same_rounded_values() {
        let report = test_report();
        let options = test_options();
        for fmt in [OutputFormat::Text, OutputFormat::Markdown, OutputFormat::Html] {
            let out = report_with_format(&report, fmt, &options).unwrap();
            for value in ["4.71", "0.12", "10000", "500.00", "550.00"] {
                assert!(out.contains(value), "{fmt} output is missing {value}");
            }
        }
    }
}
