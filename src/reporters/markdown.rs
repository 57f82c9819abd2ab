//! Markdown reporter
//!
//! Produces the downloadable `sustainability_report.md`: the five metrics
//! followed by the SDG contributions they map onto.

use crate::models::{ImpactReport, Sdg};
use anyhow::Result;

/// Render report as Markdown
pub fn render(report: &ImpactReport) -> Result<String> {
    let m = report.display();
    let mut md = String::new();

    md.push_str("## Our Contribution to Sustainability\n\n");
    md.push_str(&format!("- **Carbon Saved:** {} kg of CO₂\n", m.carbon_kg));
    md.push_str(&format!("- **Trees Saved:** {}\n", m.trees));
    md.push_str(&format!("- **Water Saved:** {} liters\n", m.water_liters));
    md.push_str(&format!("- **Energy Saved:** {} kWh\n", m.energy_kwh));
    md.push_str(&format!("- **Cost Savings:** ${}\n", m.cost_usd));
    md.push('\n');

    md.push_str("### SDG Contributions\n\n");
    for sdg in Sdg::ALL {
        md.push_str(&format!(
            "- **{}:** {}\n",
            sdg.heading(),
            sdg.contribution(&m)
        ));
    }

    Ok(md)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_has_headings() {
        let md = render(&test_report()).unwrap();
        assert!(md.starts_with("## Our Contribution to Sustainability"));
        assert!(md.contains("### SDG Contributions"));
    }

    #[test]
    fn test_markdown_metrics() {
        let md = render(&test_report()).unwrap();
        assert!(md.contains("- **Carbon Saved:** 4.71 kg of CO₂"));
        assert!(md.contains("- **Trees Saved:** 0.12"));
        assert!(md.contains("- **Water Saved:** 10000 liters"));
        assert!(md.contains("- **Energy Saved:** 500.00 kWh"));
        assert!(md.contains("- **Cost Savings:** $550.00"));
    }

    #[test]
    fn test_markdown_sdg_lines_in_order() {
        let md = render(&test_report()).unwrap();
        let water = md.find("**SDG 6 (Clean Water):** Conserved 10000 liters of water.");
        let energy = md.find("**SDG 7 (Affordable and Clean Energy):** Saved 500.00 kWh of energy.");
        let climate = md.find("**SDG 13 (Climate Action):** Avoided 4.71 kg of CO₂ emissions.");
        let land = md.find("**SDG 15 (Life on Land):** Preserved 0.12 trees.");
        assert!(water < energy && energy < climate && climate < land);
        assert!(water.is_some());
    }
}
