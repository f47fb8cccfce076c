use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::defaults;
use super::result::ScenarioResult;
use crate::core::traits::RoundComponents;
use crate::core::{NumericInput, Precision};

/// Scenario 5 input: invoice already net of levies, only WHT applies
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithholdingConfig {
    pub invoice: NumericInput,
    #[serde(default = "defaults::standard_wht_rate_input")]
    pub wht_rate: NumericInput,
    #[serde(default)]
    pub rounding: Precision,
}

impl WithholdingConfig {
    pub fn new(invoice: impl Into<NumericInput>) -> Self {
        Self {
            invoice: invoice.into(),
            wht_rate: defaults::standard_wht_rate_input(),
            rounding: Precision::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithholdingComponents {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub taxable_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub wht_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub pay_supplier: Decimal,
}

impl RoundComponents for WithholdingComponents {
    fn rounded(&self, precision: Precision) -> Self {
        Self {
            taxable_amount: precision.round(self.taxable_amount),
            wht_amount: precision.round(self.wht_amount),
            pay_supplier: precision.round(self.pay_supplier),
        }
    }
}

pub type WithholdingResult = ScenarioResult<WithholdingComponents>;
