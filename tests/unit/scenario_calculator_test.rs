// Fixed-example decompositions for the six scenarios
//
// Figures are worked by hand from the default rate table:
// VAT 17.5%, PPDA 1%, tourism levy 1%, retention 5%, NCIC 1%,
// WHT 3% (10% construction, 20% hall hire and labour above 35,000)

use levyscope::scenarios::{
    compute_construction, compute_general, compute_hospitality, compute_labour, compute_vat_only,
    compute_withholding_only, ConstructionConfig, GeneralConfig, HospitalityConfig, LabourConfig,
    VatOnlyConfig, WithholdingConfig,
};
use levyscope::{CalculationError, Precision, ScenarioCalculator};
use rust_decimal_macros::dec;

#[test]
fn test_general_reference_invoice() {
    let result = compute_general(&GeneralConfig::new(dec!(1185))).expect("valid configuration");

    assert_eq!(result.invoice, dec!(1185.00));
    assert_eq!(result.amounts.taxable_amount, dec!(1000.00));
    assert_eq!(result.amounts.vat_amount, dec!(175.00));
    assert_eq!(result.amounts.ppda_amount, dec!(10.00));
    assert_eq!(result.amounts.wht_amount, dec!(30.00));
    assert_eq!(result.amounts.pay_supplier, dec!(1145.00));
}

#[test]
fn test_general_round_thousand() {
    let result = compute_general(&GeneralConfig::new(dec!(1000))).expect("valid configuration");

    assert_eq!(result.amounts.taxable_amount, dec!(843.88));
    assert_eq!(result.amounts.vat_amount, dec!(147.68));
    assert_eq!(result.amounts.ppda_amount, dec!(8.44));
    assert_eq!(result.amounts.wht_amount, dec!(25.32));
    assert_eq!(result.amounts.pay_supplier, dec!(966.24));

    // Raw values keep full precision
    assert!(result.raw.taxable_amount.scale() > 2);
}

#[test]
fn test_general_precision_controls_rounding_only() {
    let config = GeneralConfig {
        rounding: Precision::new(0),
        ..GeneralConfig::new(dec!(1000))
    };
    let whole = compute_general(&config).expect("valid configuration");
    assert_eq!(whole.amounts.taxable_amount, dec!(844));
    assert_eq!(whole.amounts.wht_amount, dec!(25));
    assert_eq!(whole.amounts.pay_supplier, dec!(966));

    let config = GeneralConfig {
        rounding: Precision::new(4),
        ..GeneralConfig::new(dec!(1000))
    };
    let fine = compute_general(&config).expect("valid configuration");
    assert_eq!(fine.amounts.taxable_amount, dec!(843.8819));
    assert_eq!(fine.raw, whole.raw);
}

#[test]
fn test_hospitality_without_hall_hire() {
    let result = compute_hospitality(&HospitalityConfig::new(dec!(1195))).expect("valid configuration");

    assert_eq!(result.amounts.taxable_amount, dec!(1000.00));
    assert_eq!(result.amounts.vat_amount, dec!(175.00));
    assert_eq!(result.amounts.ppda_amount, dec!(10.00));
    assert_eq!(result.amounts.tourism_amount, dec!(10.00));
    assert_eq!(result.amounts.wht_hall, dec!(0));
    assert_eq!(result.amounts.wht_remaining, dec!(30.00));
    assert_eq!(result.amounts.wht_amount, dec!(30.00));
    assert_eq!(result.amounts.pay_supplier, dec!(1155.00));
}

#[test]
fn test_hospitality_with_hall_hire() {
    let config = HospitalityConfig::new(dec!(1195)).with_hall_hire(dec!(239));
    let result = compute_hospitality(&config).expect("valid configuration");

    assert_eq!(result.amounts.wht_hall, dec!(40.00));
    assert_eq!(result.amounts.wht_remaining, dec!(24.00));
    assert_eq!(result.amounts.wht_amount, dec!(64.00));
    assert_eq!(result.amounts.pay_supplier, dec!(1121.00));

    let config = HospitalityConfig::new(dec!(1195)).with_hall_hire(dec!(595));
    let result = compute_hospitality(&config).expect("valid configuration");

    assert_eq!(result.amounts.wht_hall, dec!(99.58));
    assert_eq!(result.amounts.wht_remaining, dec!(15.06));
    assert_eq!(result.amounts.wht_amount, dec!(114.64));
    assert_eq!(result.amounts.pay_supplier, dec!(1070.36));
}

#[test]
fn test_hall_hire_amount_ignored_when_not_included() {
    let config = HospitalityConfig {
        hall_hire_amount: "not a number".into(),
        ..HospitalityConfig::new(dec!(1195))
    };
    let result = compute_hospitality(&config).expect("hall hire flag is off");
    assert_eq!(result.amounts.wht_hall, dec!(0));
}

#[test]
fn test_construction_reference_invoice() {
    let result = compute_construction(&ConstructionConfig::new(dec!(1245))).expect("valid configuration");

    assert_eq!(result.amounts.taxable_amount, dec!(1000.00));
    assert_eq!(result.amounts.vat_amount, dec!(175.00));
    assert_eq!(result.amounts.retention_amount, dec!(50.00));
    assert_eq!(result.amounts.ppda_amount, dec!(10.00));
    assert_eq!(result.amounts.ncic_amount, dec!(10.00));
    assert_eq!(result.amounts.wht_amount, dec!(100.00));
    assert_eq!(result.amounts.pay_contractor, dec!(1075.00));
}

#[test]
fn test_labour_above_threshold() {
    let config = LabourConfig::new(dec!(40000)).with_labour(dec!(38000));
    let result = compute_labour(&config).expect("valid configuration");

    assert_eq!(result.amounts.taxable_labour, dec!(3000.00));
    assert_eq!(result.amounts.wht_labour, dec!(600.00));
    assert_eq!(result.amounts.taxable_remainder, dec!(1687.76));
    assert_eq!(result.amounts.vat_amount, dec!(295.36));
    assert_eq!(result.amounts.ppda_amount, dec!(16.88));
    assert_eq!(result.amounts.wht_remainder, dec!(50.63));
    assert_eq!(result.amounts.total_wht, dec!(650.63));
    assert_eq!(result.amounts.pay_customer, dec!(39332.49));
}

#[test]
fn test_labour_at_threshold_is_not_withheld() {
    let config = LabourConfig::new(dec!(35000)).with_labour(dec!(35000));
    let result = compute_labour(&config).expect("valid configuration");

    assert_eq!(result.amounts.taxable_remainder, dec!(0));
    assert_eq!(result.amounts.taxable_labour, dec!(0));
    assert_eq!(result.amounts.wht_labour, dec!(0));
    assert_eq!(result.amounts.pay_customer, dec!(35000.00));
}

#[test]
fn test_withholding_only() {
    let result = compute_withholding_only(&WithholdingConfig::new(dec!(1000))).expect("valid configuration");

    assert_eq!(result.amounts.taxable_amount, dec!(1000.00));
    assert_eq!(result.amounts.wht_amount, dec!(30.00));
    assert_eq!(result.amounts.pay_supplier, dec!(970.00));
}

#[test]
fn test_vat_only_keeps_vat_in_payment() {
    let result = compute_vat_only(&VatOnlyConfig::new(dec!(1175))).expect("valid configuration");

    assert_eq!(result.amounts.taxable_amount, dec!(1000.00));
    assert_eq!(result.amounts.vat_amount, dec!(175.00));
    assert_eq!(result.amounts.wht_amount, dec!(30.00));
    assert_eq!(result.amounts.pay_supplier, dec!(1145.00));
}

#[test]
fn test_negative_invoice_rejected_by_every_scenario() {
    let expected = CalculationError::negative("invoice");

    assert_eq!(GeneralConfig::new(dec!(-1)).calculate().unwrap_err(), expected);
    assert_eq!(HospitalityConfig::new(dec!(-1)).calculate().unwrap_err(), expected);
    assert_eq!(ConstructionConfig::new(dec!(-1)).calculate().unwrap_err(), expected);
    assert_eq!(LabourConfig::new(dec!(-1)).calculate().unwrap_err(), expected);
    assert_eq!(WithholdingConfig::new(dec!(-1)).calculate().unwrap_err(), expected);
    assert_eq!(VatOnlyConfig::new(dec!(-1)).calculate().unwrap_err(), expected);
}

#[test]
fn test_hall_hire_above_invoice_rejected() {
    let config = HospitalityConfig::new(dec!(1000)).with_hall_hire(dec!(1000.01));
    let err = compute_hospitality(&config).unwrap_err();

    assert_eq!(err.code(), "EXCEEDS_INVOICE_TOTAL");
    assert_eq!(err.field(), "hallHireAmount");
}

#[test]
fn test_invoice_is_validated_before_rates() {
    let config = GeneralConfig {
        vat_rate: "abc".into(),
        ..GeneralConfig::new("-5")
    };
    let err = compute_general(&config).unwrap_err();
    assert_eq!(err.field(), "invoice");
}

#[test]
fn test_rates_are_validated_before_divisor() {
    let config = GeneralConfig {
        vat_rate: dec!(-200).into(),
        wht_rate: "3%".into(),
        ..GeneralConfig::new(dec!(1185))
    };
    let err = compute_general(&config).unwrap_err();
    assert_eq!(err, CalculationError::invalid_input("whtRate", "3%"));
}

#[test]
fn test_non_positive_divisor_rejected() {
    let config = GeneralConfig {
        vat_rate: dec!(-99).into(),
        ppda_rate: dec!(-1).into(),
        ..GeneralConfig::new(dec!(1185))
    };
    let err = compute_general(&config).unwrap_err();
    assert_eq!(err.code(), "INVALID_CONFIGURATION");
    assert_eq!(err.field(), "rates");
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: LabourConfig = serde_json::from_value(serde_json::json!({
        "invoice": "40,000",
        "labourIncluded": true,
        "labourAmount": 38000,
        "whtRate": 3
    }))
    .expect("valid body");

    assert_eq!(config, LabourConfig::new("40,000").with_labour(dec!(38000)));
}
