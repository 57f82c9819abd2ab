//! Per-sheet conversion factors for paper-based signing

/// kg of CO2 emitted per printed sheet
pub const CO2_PER_SHEET: f64 = 0.00471;

/// Sheets of paper produced from one tree
pub const SHEETS_PER_TREE: f64 = 8333.0;

/// Liters of water used to make one sheet
pub const WATER_PER_SHEET: f64 = 10.0;

/// USD paper cost per sheet
pub const PAPER_COST_PER_SHEET: f64 = 0.05;

/// USD postage per mailed document
pub const MAIL_COST_PER_DOC: f64 = 0.50;

/// kWh of energy saved per sheet
pub const ENERGY_PER_SHEET: f64 = 0.5;
