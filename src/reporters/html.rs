//! HTML reporter with embedded styles
//!
//! Generates a standalone page that can be opened in any browser or hosted
//! next to the calculator. Includes:
//! - One card per saved resource
//! - SDG contribution list
//! - Share buttons for Twitter, LinkedIn and Facebook

use super::{metric_rows, RenderOptions};
use crate::models::{ImpactReport, Sdg};
use anyhow::Result;
use chrono::Local;

/// Render report as standalone HTML
pub fn render(report: &ImpactReport, options: &RenderOptions) -> Result<String> {
    let mut html = String::new();

    html.push_str(HEAD);
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&render_header(report));
    html.push_str("<div class=\"content\">\n");
    html.push_str(&render_metrics(report, options));
    html.push_str(&render_sdgs(report));
    html.push_str(&render_share(options));
    html.push_str("</div>\n"); // content
    html.push_str(FOOTER);
    html.push_str("</div>\n</body>\n</html>");

    Ok(html)
}

fn render_header(report: &ImpactReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<div class="header">
    <h1>🌍 Digital Approval Impact Report</h1>
    <p class="subtitle">{} documents signed digitally</p>
    <p class="timestamp">Generated {}</p>
</div>
"#,
        report.signed_documents, timestamp
    )
}

fn render_metrics(report: &ImpactReport, options: &RenderOptions) -> String {
    let mut html = String::from(
        r#"<div class="section">
    <h2 class="section-title">🌱 Our Contribution to Sustainability</h2>
    <div class="metrics-grid">
"#,
    );
    for row in metric_rows(&report.display()) {
        let icon = if options.no_emoji { "" } else { row.emoji };
        html.push_str(&format!(
            r#"        <div class="metric-card">
            <div class="metric-icon">{}</div>
            <div class="metric-value">{}</div>
            <h3>{}</h3>
        </div>
"#,
            icon,
            html_escape(&row.value),
            row.label
        ));
    }
    html.push_str("    </div>\n</div>\n");
    html
}

fn render_sdgs(report: &ImpactReport) -> String {
    let m = report.display();
    let items: Vec<String> = Sdg::ALL
        .iter()
        .map(|sdg| {
            format!(
                "        <li><strong>{}:</strong> {}</li>",
                sdg.heading(),
                html_escape(&sdg.contribution(&m))
            )
        })
        .collect();
    format!(
        r#"<div class="section">
    <h2 class="section-title">📈 SDG Contributions</h2>
    <ul class="sdg-list">
{}
    </ul>
</div>
"#,
        items.join("\n")
    )
}

fn render_share(options: &RenderOptions) -> String {
    if options.share_links.is_empty() {
        return String::new();
    }
    let buttons: Vec<String> = options
        .share_links
        .iter()
        .map(|link| {
            format!(
                r#"        <a class="share-button share-{}" href="{}" target="_blank" rel="noopener">Share on {}</a>"#,
                link.target,
                html_escape(&link.url),
                link.target.name()
            )
        })
        .collect();
    format!(
        r#"<div class="section">
    <h2 class="section-title">📢 Share Your Impact</h2>
    <div class="share-buttons">
{}
    </div>
</div>
"#,
        buttons.join("\n")
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Digital Approval Impact Report</title>
    <style>
:root {
    --primary-color: #2ecc71;
    --background-color: #f8fafc;
    --text-color: #1e293b;
    --card-background: white;
    --border-color: #e2e8f0;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: var(--text-color);
    background: var(--background-color);
    padding: 2rem;
}
.container {
    max-width: 960px;
    margin: 0 auto;
    background: var(--card-background);
    border-radius: 12px;
    box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);
    overflow: hidden;
}
.header {
    background: linear-gradient(135deg, #2ecc71 0%, #3498db 100%);
    color: white;
    padding: 3rem 2rem;
    text-align: center;
}
.header h1 { font-size: 2.25rem; margin-bottom: 0.5rem; }
.header .subtitle { font-size: 1.1rem; }
.header .timestamp { opacity: 0.9; font-size: 0.95rem; }
.content { padding: 2rem; }
.section { margin-bottom: 2rem; }
.section-title {
    font-size: 1.5rem;
    margin-bottom: 1rem;
    padding-bottom: 0.5rem;
    border-bottom: 2px solid var(--border-color);
}
.metrics-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
    gap: 1rem;
}
.metric-card {
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 1.5rem;
    text-align: center;
}
.metric-icon { font-size: 2rem; }
.metric-value { font-size: 1.75rem; font-weight: bold; }
.metric-card h3 {
    font-size: 0.8rem;
    color: #64748b;
    text-transform: uppercase;
}
.sdg-list { list-style: none; }
.sdg-list li { padding: 0.5rem 0; border-bottom: 1px solid var(--border-color); }
.share-buttons { display: flex; flex-wrap: wrap; gap: 1rem; }
.share-button {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 8px;
    color: white;
    text-decoration: none;
    font-weight: bold;
}
.share-twitter { background: #1da1f2; }
.share-linkedin { background: #0a66c2; }
.share-facebook { background: #1877f2; }
.footer {
    text-align: center;
    padding: 1.5rem;
    color: #64748b;
    border-top: 1px solid var(--border-color);
}
    </style>
</head>
"#;

const FOOTER: &str = r#"<div class="footer">
    <p>Generated by sign-impact - Digital Approval Impact Calculator</p>
</div>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_options, test_report};

    #[test]
    fn test_html_is_standalone_document() {
        let html = render(&test_report(), &test_options()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn test_html_escapes_share_urls() {
        let html = render(&test_report(), &test_options()).unwrap();
        // Query separators must be entity-encoded inside href attributes
        assert!(html.contains("shareArticle?mini=true&amp;title="));
        assert!(html.contains("class=\"share-button share-facebook\""));
    }

    #[test]
    fn test_html_without_share_section() {
        let html = render(&test_report(), &RenderOptions::default()).unwrap();
        assert!(!html.contains("Share Your Impact"));
        assert!(html.contains("SDG 7 (Affordable and Clean Energy)"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
    }
}
