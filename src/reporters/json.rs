//! JSON reporter
//!
//! Outputs the raw ImpactReport as pretty-printed JSON for piping to jq or
//! other tooling. Values are not rounded.

use crate::models::ImpactReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ImpactReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
