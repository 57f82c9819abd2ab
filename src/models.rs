//! Core data models for sign-impact
//!
//! The calculator takes a pair of document counts and produces a single
//! `ImpactReport` that every reporter and the share-link builder read from.

use serde::{Deserialize, Serialize};

/// Document volumes entered by the user.
///
/// `total_documents` is only used to validate the input; the savings are
/// derived from `signed_documents` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentCounts {
    pub total_documents: u64,
    pub signed_documents: u64,
}

impl DocumentCounts {
    pub fn new(total_documents: u64, signed_documents: u64) -> Self {
        Self {
            total_documents,
            signed_documents,
        }
    }

    /// Both fields must be non-zero before anything is computed
    pub fn is_complete(&self) -> bool {
        self.total_documents > 0 && self.signed_documents > 0
    }
}

/// Estimated savings from moving signed documents off paper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub signed_documents: u64,
    pub carbon_kg: f64,
    pub trees: f64,
    pub water_liters: f64,
    pub energy_kwh: f64,
    pub cost_usd: f64,
}

impl ImpactReport {
    /// Metrics rounded the way they are shown on screen and in reports
    pub fn display(&self) -> DisplayMetrics {
        DisplayMetrics {
            carbon_kg: format!("{:.2}", self.carbon_kg),
            trees: format!("{:.2}", self.trees),
            water_liters: format!("{:.0}", self.water_liters),
            energy_kwh: format!("{:.2}", self.energy_kwh),
            cost_usd: format!("{:.2}", self.cost_usd),
        }
    }
}

/// Pre-rounded metric strings.
///
/// Every output format goes through this so the screen, the downloaded
/// report and the share text always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMetrics {
    pub carbon_kg: String,
    pub trees: String,
    pub water_liters: String,
    pub energy_kwh: String,
    pub cost_usd: String,
}

/// Sustainable Development Goals the savings are mapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sdg {
    CleanWater,
    CleanEnergy,
    ClimateAction,
    LifeOnLand,
}

impl Sdg {
    pub const ALL: [Sdg; 4] = [
        Sdg::CleanWater,
        Sdg::CleanEnergy,
        Sdg::ClimateAction,
        Sdg::LifeOnLand,
    ];

    pub fn number(&self) -> u8 {
        match self {
            Sdg::CleanWater => 6,
            Sdg::CleanEnergy => 7,
            Sdg::ClimateAction => 13,
            Sdg::LifeOnLand => 15,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sdg::CleanWater => "Clean Water",
            Sdg::CleanEnergy => "Affordable and Clean Energy",
            Sdg::ClimateAction => "Climate Action",
            Sdg::LifeOnLand => "Life on Land",
        }
    }

    /// Contribution sentence, e.g. "Conserved 10000 liters of water."
    pub fn contribution(&self, metrics: &DisplayMetrics) -> String {
        match self {
            Sdg::CleanWater => format!("Conserved {} liters of water.", metrics.water_liters),
            Sdg::CleanEnergy => format!("Saved {} kWh of energy.", metrics.energy_kwh),
            Sdg::ClimateAction => {
                format!("Avoided {} kg of CO₂ emissions.", metrics.carbon_kg)
            }
            Sdg::LifeOnLand => format!("Preserved {} trees.", metrics.trees),
        }
    }

    /// Heading text, e.g. "SDG 6 (Clean Water)"
    pub fn heading(&self) -> String {
        format!("SDG {} ({})", self.number(), self.label())
    }
}
