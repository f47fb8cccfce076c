//! Levyscope invoice levy decomposition library
//!
//! Reverses VAT, PPDA, sector levies and withholding tax out of a
//! tax-inclusive invoice total under six scenarios, and serves the
//! calculators over HTTP.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, CalculationError, NumericInput, Precision, ScenarioCalculator};
pub use modules::scenarios;
