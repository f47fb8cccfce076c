use serde::Serialize;

use crate::core::error::CalculationError;

/// A scenario configuration that knows how to decompose its own invoice.
///
/// Implemented by every `*Config` type so HTTP handlers and other generic
/// callers can dispatch without knowing the scenario's formula.
pub trait ScenarioCalculator {
    /// Result record produced by a successful calculation
    type Output: Serialize;

    /// Name used in logs
    const NAME: &'static str;

    /// Validate the configuration and compute the decomposition
    fn calculate(&self) -> Result<Self::Output, CalculationError>;
}
