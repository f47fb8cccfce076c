use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::traits::RoundComponents;
use crate::core::Precision;

/// Outcome of one scenario calculation.
///
/// The rounded components are flattened into the top level of the record,
/// the unrounded ones are kept under `raw` with the same field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult<C> {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub invoice: Decimal,
    #[serde(flatten)]
    pub amounts: C,
    pub raw: C,
}

impl<C: RoundComponents> ScenarioResult<C> {
    pub fn new(invoice: Decimal, raw: C, precision: Precision) -> Self {
        Self {
            invoice: precision.round(invoice),
            amounts: raw.rounded(precision),
            raw,
        }
    }
}
