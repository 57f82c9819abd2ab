//! Paper-to-digital impact calculator
//!
//! Every metric is a linear function of the signed document count N:
//!
//! ```text
//! carbon (kg)   = N × 0.00471
//! trees         = N ÷ 8333
//! water (L)     = N × 10
//! energy (kWh)  = N × 0.5
//! cost (USD)    = N × 0.05 + N × 0.50   (paper + postage)
//! ```
//!
//! One signed document counts as one sheet. Nothing is computed unless both
//! the total and the signed counts are non-zero.

pub mod factors;

use crate::models::{DocumentCounts, ImpactReport};
use thiserror::Error;
use tracing::debug;

pub use factors::{
    CO2_PER_SHEET, ENERGY_PER_SHEET, MAIL_COST_PER_DOC, PAPER_COST_PER_SHEET, SHEETS_PER_TREE,
    WATER_PER_SHEET,
};

/// Input validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactError {
    #[error("Please enter valid values for both fields.")]
    MissingInput,
}

pub type ImpactResult<T> = Result<T, ImpactError>;

/// Compute the savings for the given document counts
pub fn calculate(counts: &DocumentCounts) -> ImpactResult<ImpactReport> {
    if !counts.is_complete() {
        debug!(
            total = counts.total_documents,
            signed = counts.signed_documents,
            "Rejecting incomplete input"
        );
        return Err(ImpactError::MissingInput);
    }

    let report = savings_for(counts.signed_documents);
    debug!(
        signed = report.signed_documents,
        carbon_kg = report.carbon_kg,
        cost_usd = report.cost_usd,
        "Computed impact"
    );
    Ok(report)
}

/// Raw conversion without validation; zero documents yields all-zero savings
pub fn savings_for(signed_documents: u64) -> ImpactReport {
    let sheets = signed_documents as f64;
    ImpactReport {
        signed_documents,
        carbon_kg: sheets * CO2_PER_SHEET,
        trees: sheets / SHEETS_PER_TREE,
        water_liters: sheets * WATER_PER_SHEET,
        energy_kwh: sheets * ENERGY_PER_SHEET,
        cost_usd: sheets * PAPER_COST_PER_SHEET + sheets * MAIL_COST_PER_DOC,
    }
}
