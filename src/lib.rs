//! sign-impact - Digital Approval Impact Calculator
//!
//! Converts a count of digitally signed documents into estimated savings
//! compared with paper (carbon, trees, water, energy, cost), renders them
//! as text, markdown, json or html, and builds social share links.

pub mod cli;
pub mod config;
pub mod impact;
pub mod models;
pub mod reporters;
pub mod share;
