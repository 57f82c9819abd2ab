//! Social share links
//!
//! Builds Twitter, LinkedIn and Facebook "share" URLs carrying a sentence
//! that quotes the computed savings. Query values are form-encoded: the
//! unreserved set `A-Z a-z 0-9 - _ . ~` is kept, space becomes `+`, and
//! everything else is percent-encoded over its UTF-8 bytes.

use crate::config::ShareConfig;
use crate::models::ImpactReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

const TWITTER_ENDPOINT: &str = "https://twitter.com/intent/tweet";
const LINKEDIN_ENDPOINT: &str = "https://www.linkedin.com/shareArticle";
const FACEBOOK_ENDPOINT: &str = "https://www.facebook.com/sharer/sharer.php";

/// Supported share targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    LinkedIn,
    Facebook,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 3] = [
        ShareTarget::Twitter,
        ShareTarget::LinkedIn,
        ShareTarget::Facebook,
    ];

    /// Display name, e.g. "LinkedIn"
    pub fn name(&self) -> &'static str {
        match self {
            ShareTarget::Twitter => "Twitter",
            ShareTarget::LinkedIn => "LinkedIn",
            ShareTarget::Facebook => "Facebook",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ShareTarget::Twitter => "💓",
            ShareTarget::LinkedIn => "🔗",
            ShareTarget::Facebook => "👍",
        }
    }
}

impl FromStr for ShareTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitter" => Ok(ShareTarget::Twitter),
            "linkedin" => Ok(ShareTarget::LinkedIn),
            "facebook" => Ok(ShareTarget::Facebook),
            _ => Err(anyhow!(
                "Unknown share target '{}'. Valid targets: twitter, linkedin, facebook",
                s
            )),
        }
    }
}

impl std::fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShareTarget::Twitter => write!(f, "twitter"),
            ShareTarget::LinkedIn => write!(f, "linkedin"),
            ShareTarget::Facebook => write!(f, "facebook"),
        }
    }
}

/// A rendered share link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub target: ShareTarget,
    pub url: String,
}

/// The sentence posted to every network
pub fn share_text(report: &ImpactReport, config: &ShareConfig) -> String {
    let m = report.display();
    format!(
        "By using digital signatures with {} documents, I just saved {} kg of CO2, \
         preserved {} trees, conserved {} liters of water, and saved {} kWh of energy. \
         Join the movement for sustainability! Calculated by {} #{}",
        report.signed_documents,
        m.carbon_kg,
        m.trees,
        m.water_liters,
        m.energy_kwh,
        config.brand,
        config.hashtag()
    )
}

/// Build the share URL for one target
pub fn build_url(target: ShareTarget, text: &str, config: &ShareConfig) -> String {
    match target {
        ShareTarget::Twitter => with_query(TWITTER_ENDPOINT, &[("text", text)]),
        ShareTarget::LinkedIn => with_query(
            LINKEDIN_ENDPOINT,
            &[
                ("mini", "true"),
                ("title", &config.title),
                ("summary", text),
                ("source", &config.app_url),
            ],
        ),
        ShareTarget::Facebook => with_query(
            FACEBOOK_ENDPOINT,
            &[("u", &config.app_url), ("quote", text)],
        ),
    }
}

/// Build links for every target, in display order
pub fn share_links(report: &ImpactReport, config: &ShareConfig) -> Vec<ShareLink> {
    let text = share_text(report, config);
    ShareTarget::ALL
        .iter()
        .map(|&target| ShareLink {
            target,
            url: build_url(target, &text, config),
        })
        .collect()
}

fn with_query(endpoint: &str, pairs: &[(&str, &str)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect();
    format!("{}?{}", endpoint, query.join("&"))
}

/// Percent-encode with `+` for spaces
pub fn form_encode(value: &str) -> String {
    // urlencoding leaves only the unreserved set bare, so a literal "%20"
    // in the output can only have come from a space
    urlencoding::encode(value).replace("%20", "+")
}
