use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::defaults;
use super::result::ScenarioResult;
use crate::core::traits::RoundComponents;
use crate::core::{NumericInput, Precision};

/// Scenario 2 input: hospitality invoice with tourism levy and optional hall hire
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalityConfig {
    pub invoice: NumericInput,
    #[serde(default = "defaults::vat_rate_input")]
    pub vat_rate: NumericInput,
    #[serde(default = "defaults::ppda_rate_input")]
    pub ppda_rate: NumericInput,
    #[serde(default = "defaults::tourism_rate_input")]
    pub tourism_rate: NumericInput,
    /// WHT on everything that is not hall hire
    #[serde(default = "defaults::standard_wht_rate_input", alias = "whtRate")]
    pub remaining_wht_rate: NumericInput,
    #[serde(default = "defaults::hall_hire_wht_rate_input")]
    pub hall_hire_wht_rate: NumericInput,
    #[serde(default)]
    pub hall_hire_included: bool,
    /// Tax-inclusive share of the invoice that is hall hire; ignored unless included
    #[serde(default = "defaults::zero_amount_input")]
    pub hall_hire_amount: NumericInput,
    #[serde(default)]
    pub rounding: Precision,
}

impl HospitalityConfig {
    pub fn new(invoice: impl Into<NumericInput>) -> Self {
        Self {
            invoice: invoice.into(),
            vat_rate: defaults::vat_rate_input(),
            ppda_rate: defaults::ppda_rate_input(),
            tourism_rate: defaults::tourism_rate_input(),
            remaining_wht_rate: defaults::standard_wht_rate_input(),
            hall_hire_wht_rate: defaults::hall_hire_wht_rate_input(),
            hall_hire_included: false,
            hall_hire_amount: defaults::zero_amount_input(),
            rounding: Precision::default(),
        }
    }

    /// Same configuration with a hall hire portion switched on
    pub fn with_hall_hire(mut self, amount: impl Into<NumericInput>) -> Self {
        self.hall_hire_included = true;
        self.hall_hire_amount = amount.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalityComponents {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub taxable_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub vat_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub ppda_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub tourism_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub wht_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub wht_hall: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub wht_remaining: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub pay_supplier: Decimal,
}

impl RoundComponents for HospitalityComponents {
    fn rounded(&self, precision: Precision) -> Self {
        Self {
            taxable_amount: precision.round(self.taxable_amount),
            vat_amount: precision.round(self.vat_amount),
            ppda_amount: precision.round(self.ppda_amount),
            tourism_amount: precision.round(self.tourism_amount),
            wht_amount: precision.round(self.wht_amount),
            wht_hall: precision.round(self.wht_hall),
            wht_remaining: precision.round(self.wht_remaining),
            pay_supplier: precision.round(self.pay_supplier),
        }
    }
}

pub type HospitalityResult = ScenarioResult<HospitalityComponents>;
