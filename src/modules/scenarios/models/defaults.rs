//! Static table of default rates and amounts.
//!
//! | Field               | Scenarios     | Default |
//! |---------------------|---------------|---------|
//! | `vatRate`           | 1, 2, 3, 4, 6 | 17.5    |
//! | `ppdaRate`          | 1, 2, 3, 4    | 1.0     |
//! | `whtRate`           | 1, 5, 6       | 3.0     |
//! | `whtRate`           | 3             | 10.0    |
//! | `standardWhtRate`   | 4             | 3.0     |
//! | `remainingWhtRate`  | 2             | 3.0     |
//! | `tourismRate`       | 2             | 1.0     |
//! | `hallHireWhtRate`   | 2             | 20.0    |
//! | `hallHireAmount`    | 2             | 0       |
//! | `retentionRate`     | 3             | 5.0     |
//! | `ncicRate`          | 3             | 1.0     |
//! | `labourAmount`      | 4             | 0       |
//! | `labourThreshold`   | 4             | 35000   |
//! | `labourWhtRate`     | 4             | 20.0    |
//! | `rounding`          | all           | 2       |
//!
//! `hallHireIncluded` and `labourIncluded` default to `false`.
//!
//! Config types apply these through serde field defaults and their `new`
//! constructors; [`table`] exposes the same values per scenario.

use rust_decimal::Decimal;
use serde::Serialize;

use super::scenario::Scenario;
use crate::core::{NumericInput, Precision};

pub fn vat_rate() -> Decimal {
    Decimal::new(175, 1)
}

pub fn ppda_rate() -> Decimal {
    Decimal::new(10, 1)
}

/// Standard WHT for general, hospitality, labour, WHT-only and VAT-only
pub fn standard_wht_rate() -> Decimal {
    Decimal::new(30, 1)
}

/// WHT for contractors in the construction scenario
pub fn construction_wht_rate() -> Decimal {
    Decimal::new(100, 1)
}

pub fn tourism_rate() -> Decimal {
    Decimal::new(10, 1)
}

pub fn hall_hire_wht_rate() -> Decimal {
    Decimal::new(200, 1)
}

pub fn retention_rate() -> Decimal {
    Decimal::new(50, 1)
}

pub fn ncic_rate() -> Decimal {
    Decimal::new(10, 1)
}

pub fn labour_threshold() -> Decimal {
    Decimal::new(35000, 0)
}

pub fn labour_wht_rate() -> Decimal {
    Decimal::new(200, 1)
}

// Serde default hooks

pub(crate) fn vat_rate_input() -> NumericInput {
    vat_rate().into()
}

pub(crate) fn ppda_rate_input() -> NumericInput {
    ppda_rate().into()
}

pub(crate) fn standard_wht_rate_input() -> NumericInput {
    standard_wht_rate().into()
}

pub(crate) fn construction_wht_rate_input() -> NumericInput {
    construction_wht_rate().into()
}

pub(crate) fn tourism_rate_input() -> NumericInput {
    tourism_rate().into()
}

pub(crate) fn hall_hire_wht_rate_input() -> NumericInput {
    hall_hire_wht_rate().into()
}

pub(crate) fn retention_rate_input() -> NumericInput {
    retention_rate().into()
}

pub(crate) fn ncic_rate_input() -> NumericInput {
    ncic_rate().into()
}

pub(crate) fn labour_threshold_input() -> NumericInput {
    labour_threshold().into()
}

pub(crate) fn labour_wht_rate_input() -> NumericInput {
    labour_wht_rate().into()
}

pub(crate) fn zero_amount_input() -> NumericInput {
    Decimal::ZERO.into()
}

/// One defaulted field as exposed by `GET /scenarios/defaults`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultValue {
    pub field: &'static str,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
}

impl DefaultValue {
    fn new(field: &'static str, value: Decimal) -> Self {
        Self { field, value }
    }
}

/// All defaults that apply to one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioDefaults {
    pub scenario: Scenario,
    pub fields: Vec<DefaultValue>,
    pub rounding: Precision,
}

impl ScenarioDefaults {
    /// Look up the default for a field by its external name
    pub fn get(&self, field: &str) -> Option<Decimal> {
        self.fields
            .iter()
            .find(|default| default.field == field)
            .map(|default| default.value)
    }
}

/// Defaults for a single scenario
pub fn for_scenario(scenario: Scenario) -> ScenarioDefaults {
    let fields = match scenario {
        Scenario::General => vec![
            DefaultValue::new("vatRate", vat_rate()),
            DefaultValue::new("ppdaRate", ppda_rate()),
            DefaultValue::new("whtRate", standard_wht_rate()),
        ],
        Scenario::Hospitality => vec![
            DefaultValue::new("vatRate", vat_rate()),
            DefaultValue::new("ppdaRate", ppda_rate()),
            DefaultValue::new("tourismRate", tourism_rate()),
            DefaultValue::new("remainingWhtRate", standard_wht_rate()),
            DefaultValue::new("hallHireWhtRate", hall_hire_wht_rate()),
            DefaultValue::new("hallHireAmount", Decimal::ZERO),
        ],
        Scenario::Construction => vec![
            DefaultValue::new("vatRate", vat_rate()),
            DefaultValue::new("retentionRate", retention_rate()),
            DefaultValue::new("ppdaRate", ppda_rate()),
            DefaultValue::new("ncicRate", ncic_rate()),
            DefaultValue::new("whtRate", construction_wht_rate()),
        ],
        Scenario::Labour => vec![
            DefaultValue::new("vatRate", vat_rate()),
            DefaultValue::new("ppdaRate", ppda_rate()),
            DefaultValue::new("standardWhtRate", standard_wht_rate()),
            DefaultValue::new("labourAmount", Decimal::ZERO),
            DefaultValue::new("labourThreshold", labour_threshold()),
            DefaultValue::new("labourWhtRate", labour_wht_rate()),
        ],
        Scenario::WithholdingOnly => vec![DefaultValue::new("whtRate", standard_wht_rate())],
        Scenario::VatOnly => vec![
            DefaultValue::new("vatRate", vat_rate()),
            DefaultValue::new("whtRate", standard_wht_rate()),
        ],
    };

    ScenarioDefaults {
        scenario,
        fields,
        rounding: Precision::default(),
    }
}

/// The whole defaults table, in scenario order
pub fn table() -> Vec<ScenarioDefaults> {
    Scenario::ALL.iter().copied().map(for_scenario).collect()
}
