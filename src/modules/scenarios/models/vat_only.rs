use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::defaults;
use super::result::ScenarioResult;
use crate::core::traits::RoundComponents;
use crate::core::{NumericInput, Precision};

/// Scenario 6 input: invoice embedding VAT only
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatOnlyConfig {
    pub invoice: NumericInput,
    #[serde(default = "defaults::vat_rate_input")]
    pub vat_rate: NumericInput,
    #[serde(default = "defaults::standard_wht_rate_input")]
    pub wht_rate: NumericInput,
    #[serde(default)]
    pub rounding: Precision,
}

impl VatOnlyConfig {
    pub fn new(invoice: impl Into<NumericInput>) -> Self {
        Self {
            invoice: invoice.into(),
            vat_rate: defaults::vat_rate_input(),
            wht_rate: defaults::standard_wht_rate_input(),
            rounding: Precision::default(),
        }
    }
}

/// VAT is reported but, unlike WHT, not deducted from `pay_supplier`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VatOnlyComponents {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub taxable_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub vat_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub wht_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub pay_supplier: Decimal,
}

impl RoundComponents for VatOnlyComponents {
    fn rounded(&self, precision: Precision) -> Self {
        Self {
            taxable_amount: precision.round(self.taxable_amount),
            vat_amount: precision.round(self.vat_amount),
            wht_amount: precision.round(self.wht_amount),
            pay_supplier: precision.round(self.pay_supplier),
        }
    }
}

pub type VatOnlyResult = ScenarioResult<VatOnlyComponents>;
