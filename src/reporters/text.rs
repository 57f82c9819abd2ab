//! Text (terminal) reporter with colors and formatting

use super::{metric_rows, RenderOptions};
use crate::models::{ImpactReport, Sdg};
use anyhow::Result;
use console::{style, StyledObject};

/// Styled text; plain mode never emits escape codes
fn paint<D>(value: D, plain: bool) -> StyledObject<D> {
    let styled = style(value);
    if plain {
        styled.force_styling(false)
    } else {
        styled
    }
}

/// Render report as formatted terminal output
pub fn render(report: &ImpactReport, options: &RenderOptions) -> Result<String> {
    let plain = options.no_emoji;
    let icon = |emoji: &str| {
        if plain {
            String::new()
        } else {
            format!("{} ", emoji)
        }
    };
    let m = report.display();
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}{}\n",
        icon("🌱"),
        paint("Our Contribution to Sustainability", plain).bold()
    ));
    out.push_str(&format!(
        "{}\n",
        paint("──────────────────────────────────────", plain).dim()
    ));
    out.push_str(&format!(
        "{}\n\n",
        paint(format!("Signed documents: {}", report.signed_documents), plain).dim()
    ));

    for row in metric_rows(&m) {
        let label = format!("{}{}", icon(row.emoji), row.label);
        out.push_str(&format!(
            "  {:<24} {}\n",
            label,
            paint(&row.value, plain).green().bold()
        ));
    }
    out.push('\n');

    // SDG contributions
    out.push_str(&format!(
        "{}{}\n",
        icon("📈"),
        paint("SDG Contributions", plain).bold()
    ));
    for sdg in Sdg::ALL {
        out.push_str(&format!(
            "  - {} {}\n",
            paint(format!("{}:", sdg.heading()), plain).bold(),
            sdg.contribution(&m)
        ));
    }

    // Share links
    if !options.share_links.is_empty() {
        out.push('\n');
        out.push_str(&format!(
            "{}{}\n",
            icon("📢"),
            paint("Share Your Impact", plain).bold()
        ));
        for link in &options.share_links {
            let suffix = if plain {
                String::new()
            } else {
                format!(" {}", link.target.emoji())
            };
            out.push_str(&format!(
                "  Share on {}{}\n    {}\n",
                link.target.name(),
                suffix,
                paint(&link.url, plain).cyan()
            ));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_options, test_report};

    #[test]
    fn test_text_render_has_metrics() {
        let out = render(&test_report(), &test_options()).unwrap();
        assert!(out.contains("Our Contribution to Sustainability"));
        assert!(out.contains("Carbon Saved (kg)"));
        assert!(out.contains("$550.00"));
        assert!(out.contains("SDG 15 (Life on Land)"));
    }

    #[test]
    fn test_text_render_lists_share_links() {
        let out = render(&test_report(), &test_options()).unwrap();
        assert!(out.contains("Share on Twitter"));
        assert!(out.contains("https://www.linkedin.com/shareArticle?"));
        assert!(out.contains("https://www.facebook.com/sharer/sharer.php?"));
    }

    #[test]
    fn test_text_render_without_share_links() {
        let options = RenderOptions::default();
        let out = render(&test_report(), &options).unwrap();
        assert!(!out.contains("Share Your Impact"));
    }

    #[test]
    fn test_plain_mode_has_no_escape_codes_or_emoji() {
        let options = RenderOptions {
            no_emoji: true,
            ..test_options()
        };
        let out = render(&test_report(), &options).unwrap();
        assert!(!out.contains('\x1b'));
        assert!(out.chars().all(|c| (c as u32) < 0x1F000));
        assert!(out.contains("Water Saved (L)"));
    }
}
