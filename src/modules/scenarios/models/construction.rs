use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::defaults;
use super::result::ScenarioResult;
use crate::core::traits::RoundComponents;
use crate::core::{NumericInput, Precision};

/// Scenario 3 input: contractor invoice embedding VAT, retention, PPDA and NCIC
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionConfig {
    pub invoice: NumericInput,
    #[serde(default = "defaults::vat_rate_input")]
    pub vat_rate: NumericInput,
    #[serde(default = "defaults::retention_rate_input")]
    pub retention_rate: NumericInput,
    #[serde(default = "defaults::ppda_rate_input")]
    pub ppda_rate: NumericInput,
    #[serde(default = "defaults::ncic_rate_input")]
    pub ncic_rate: NumericInput,
    #[serde(default = "defaults::construction_wht_rate_input")]
    pub wht_rate: NumericInput,
    #[serde(default)]
    pub rounding: Precision,
}

impl ConstructionConfig {
    pub fn new(invoice: impl Into<NumericInput>) -> Self {
        Self {
            invoice: invoice.into(),
            vat_rate: defaults::vat_rate_input(),
            retention_rate: defaults::retention_rate_input(),
            ppda_rate: defaults::ppda_rate_input(),
            ncic_rate: defaults::ncic_rate_input(),
            wht_rate: defaults::construction_wht_rate_input(),
            rounding: Precision::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructionComponents {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub taxable_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub vat_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub retention_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub ppda_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub ncic_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub wht_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub pay_contractor: Decimal,
}

impl RoundComponents for ConstructionComponents {
    fn rounded(&self, precision: Precision) -> Self {
        Self {
            taxable_amount: precision.round(self.taxable_amount),
            vat_amount: precision.round(self.vat_amount),
            retention_amount: precision.round(self.retention_amount),
            ppda_amount: precision.round(self.ppda_amount),
            ncic_amount: precision.round(self.ncic_amount),
            wht_amount: precision.round(self.wht_amount),
            pay_contractor: precision.round(self.pay_contractor),
        }
    }
}

pub type ConstructionResult = ScenarioResult<ConstructionComponents>;
