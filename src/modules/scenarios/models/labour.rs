use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::defaults;
use super::result::ScenarioResult;
use crate::core::traits::RoundComponents;
use crate::core::{NumericInput, Precision};

/// Scenario 4 input: invoice that may contain a labour charge.
///
/// Only the non-labour remainder carries VAT and PPDA. Labour above
/// `labour_threshold` is withheld at `labour_wht_rate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourConfig {
    pub invoice: NumericInput,
    #[serde(default = "defaults::vat_rate_input")]
    pub vat_rate: NumericInput,
    #[serde(default = "defaults::ppda_rate_input")]
    pub ppda_rate: NumericInput,
    #[serde(default = "defaults::standard_wht_rate_input", alias = "whtRate")]
    pub standard_wht_rate: NumericInput,
    #[serde(default)]
    pub labour_included: bool,
    #[serde(default = "defaults::zero_amount_input")]
    pub labour_amount: NumericInput,
    #[serde(default = "defaults::labour_threshold_input")]
    pub labour_threshold: NumericInput,
    #[serde(default = "defaults::labour_wht_rate_input")]
    pub labour_wht_rate: NumericInput,
    #[serde(default)]
    pub rounding: Precision,
}

impl LabourConfig {
    pub fn new(invoice: impl Into<NumericInput>) -> Self {
        Self {
            invoice: invoice.into(),
            vat_rate: defaults::vat_rate_input(),
            ppda_rate: defaults::ppda_rate_input(),
            standard_wht_rate: defaults::standard_wht_rate_input(),
            labour_included: false,
            labour_amount: defaults::zero_amount_input(),
            labour_threshold: defaults::labour_threshold_input(),
            labour_wht_rate: defaults::labour_wht_rate_input(),
            rounding: Precision::default(),
        }
    }

    /// Same configuration with a labour charge switched on
    pub fn with_labour(mut self, amount: impl Into<NumericInput>) -> Self {
        self.labour_included = true;
        self.labour_amount = amount.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourComponents {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub taxable_remainder: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub vat_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub ppda_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub taxable_labour: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub wht_remainder: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub wht_labour: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_wht: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub pay_customer: Decimal,
}

impl RoundComponents for LabourComponents {
    fn rounded(&self, precision: Precision) -> Self {
        Self {
            taxable_remainder: precision.round(self.taxable_remainder),
            vat_amount: precision.round(self.vat_amount),
            ppda_amount: precision.round(self.ppda_amount),
            taxable_labour: precision.round(self.taxable_labour),
            wht_remainder: precision.round(self.wht_remainder),
            wht_labour: precision.round(self.wht_labour),
            total_wht: precision.round(self.total_wht),
            pay_customer: precision.round(self.pay_customer),
        }
    }
}

pub type LabourResult = ScenarioResult<LabourComponents>;
