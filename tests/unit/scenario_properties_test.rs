// Property-based checks across all scenario calculators
//
// Raw (unrounded) components are compared with a tight tolerance: they
// only differ from exact arithmetic by the 28-digit decimal precision.

use levyscope::scenarios::{
    compute_construction, compute_general, compute_hospitality, compute_labour, compute_vat_only,
    compute_withholding_only, ConstructionConfig, GeneralConfig, HospitalityConfig, LabourConfig,
    VatOnlyConfig, WithholdingConfig,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn raw_tolerance() -> Decimal {
    Decimal::new(1, 12)
}

fn invoice_from_cents(cents: u64) -> Decimal {
    Decimal::new(cents as i64, 2)
}

fn percent(value: u32) -> Decimal {
    Decimal::from(value)
}

fn close(left: Decimal, right: Decimal) -> bool {
    (left - right).abs() <= raw_tolerance()
}

proptest! {
    #[test]
    fn test_round_trip_reconstructs_invoice(
        cents in 0u64..100_000_000_000u64,
        vat in 0u32..=30u32,
        ppda in 0u32..=5u32,
        levy in 0u32..=5u32,
    ) {
        let invoice = invoice_from_cents(cents);
        let hundred = Decimal::ONE_HUNDRED;

        let general = compute_general(&GeneralConfig {
            vat_rate: percent(vat).into(),
            ppda_rate: percent(ppda).into(),
            ..GeneralConfig::new(invoice)
        }).unwrap();
        let divisor = Decimal::ONE + percent(vat + ppda) / hundred;
        prop_assert!(close(general.raw.taxable_amount * divisor, invoice));

        let hospitality = compute_hospitality(&HospitalityConfig {
            vat_rate: percent(vat).into(),
            ppda_rate: percent(ppda).into(),
            tourism_rate: percent(levy).into(),
            ..HospitalityConfig::new(invoice)
        }).unwrap();
        let divisor = Decimal::ONE + percent(vat + ppda + levy) / hundred;
        prop_assert!(close(hospitality.raw.taxable_amount * divisor, invoice));

        let construction = compute_construction(&ConstructionConfig {
            vat_rate: percent(vat).into(),
            ppda_rate: percent(ppda).into(),
            ncic_rate: percent(levy).into(),
            ..ConstructionConfig::new(invoice)
        }).unwrap();
        // retention stays at its 5% default
        let divisor = Decimal::ONE + percent(vat + ppda + levy + 5) / hundred;
        prop_assert!(close(construction.raw.taxable_amount * divisor, invoice));

        let vat_only = compute_vat_only(&VatOnlyConfig {
            vat_rate: percent(vat).into(),
            ..VatOnlyConfig::new(invoice)
        }).unwrap();
        let divisor = Decimal::ONE + percent(vat) / hundred;
        prop_assert!(close(vat_only.raw.taxable_amount * divisor, invoice));

        let withholding = compute_withholding_only(&WithholdingConfig::new(invoice)).unwrap();
        prop_assert_eq!(withholding.raw.taxable_amount, invoice);
    }

    #[test]
    fn test_labour_round_trip_adds_back_labour(
        cents in 0u64..100_000_000u64,
        labour_share in 0u32..=100u32,
    ) {
        let invoice = invoice_from_cents(cents);
        let labour = (invoice * Decimal::from(labour_share) / Decimal::ONE_HUNDRED).round_dp(2);

        let result = compute_labour(&LabourConfig::new(invoice).with_labour(labour)).unwrap();
        let divisor = Decimal::new(1185, 3);

        prop_assert!(close(result.raw.taxable_remainder * divisor + labour, invoice));
    }

    #[test]
    fn test_components_conserve_invoice(
        cents in 0u64..100_000_000_000u64,
        wht in 0u32..=30u32,
        hall_share in 0u32..=100u32,
    ) {
        let invoice = invoice_from_cents(cents);

        let general = compute_general(&GeneralConfig {
            wht_rate: percent(wht).into(),
            ..GeneralConfig::new(invoice)
        }).unwrap().raw;
        prop_assert!(close(general.ppda_amount + general.wht_amount + general.pay_supplier, invoice));

        let hall = (invoice * Decimal::from(hall_share) / Decimal::ONE_HUNDRED).round_dp(2);
        let hospitality = compute_hospitality(
            &HospitalityConfig::new(invoice).with_hall_hire(hall),
        ).unwrap().raw;
        prop_assert!(close(hospitality.wht_hall + hospitality.wht_remaining, hospitality.wht_amount));
        prop_assert!(close(hospitality.ppda_amount + hospitality.wht_amount + hospitality.pay_supplier, invoice));

        let construction = compute_construction(&ConstructionConfig::new(invoice)).unwrap().raw;
        let deducted = construction.retention_amount
            + construction.ppda_amount
            + construction.ncic_amount
            + construction.wht_amount;
        prop_assert!(close(deducted + construction.pay_contractor, invoice));

        let labour = compute_labour(&LabourConfig::new(invoice).with_labour(hall)).unwrap().raw;
        prop_assert!(close(labour.wht_remainder + labour.wht_labour, labour.total_wht));
        prop_assert!(close(labour.ppda_amount + labour.total_wht + labour.pay_customer, invoice));

        let withholding = compute_withholding_only(&WithholdingConfig::new(invoice)).unwrap().raw;
        prop_assert!(close(withholding.wht_amount + withholding.pay_supplier, invoice));

        let vat_only = compute_vat_only(&VatOnlyConfig::new(invoice)).unwrap().raw;
        prop_assert!(close(vat_only.wht_amount + vat_only.pay_supplier, invoice));
    }

    #[test]
    fn test_zero_invoice_yields_zero_components(
        vat in 0u32..=30u32,
        ppda in 0u32..=5u32,
        wht in 0u32..=30u32,
        threshold in 0u32..100_000u32,
    ) {
        let zero = Decimal::ZERO;

        let general = compute_general(&GeneralConfig {
            vat_rate: percent(vat).into(),
            ppda_rate: percent(ppda).into(),
            wht_rate: percent(wht).into(),
            ..GeneralConfig::new(zero)
        }).unwrap().amounts;
        prop_assert!(general.taxable_amount.is_zero() && general.vat_amount.is_zero());
        prop_assert!(general.ppda_amount.is_zero() && general.wht_amount.is_zero());
        prop_assert!(general.pay_supplier.is_zero());

        let hospitality = compute_hospitality(
            &HospitalityConfig::new(zero).with_hall_hire(zero),
        ).unwrap().amounts;
        prop_assert!(hospitality.wht_hall.is_zero() && hospitality.wht_remaining.is_zero());
        prop_assert!(hospitality.tourism_amount.is_zero() && hospitality.pay_supplier.is_zero());

        let construction = compute_construction(&ConstructionConfig {
            wht_rate: percent(wht).into(),
            ..ConstructionConfig::new(zero)
        }).unwrap().amounts;
        prop_assert!(construction.retention_amount.is_zero() && construction.ncic_amount.is_zero());
        prop_assert!(construction.pay_contractor.is_zero());

        let labour = compute_labour(&LabourConfig {
            labour_threshold: percent(threshold).into(),
            ..LabourConfig::new(zero).with_labour(zero)
        }).unwrap().amounts;
        prop_assert!(labour.taxable_labour.is_zero() && labour.total_wht.is_zero());
        prop_assert!(labour.pay_customer.is_zero());

        let withholding = compute_withholding_only(&WithholdingConfig::new(zero)).unwrap().amounts;
        prop_assert!(withholding.wht_amount.is_zero() && withholding.pay_supplier.is_zero());

        let vat_only = compute_vat_only(&VatOnlyConfig::new(zero)).unwrap().amounts;
        prop_assert!(vat_only.vat_amount.is_zero() && vat_only.pay_supplier.is_zero());
    }

    #[test]
    fn test_labour_at_threshold_is_never_withheld(
        threshold in 0u64..10_000_000u64,
        extra in 0u64..10_000_000u64,
    ) {
        let labour = Decimal::from(threshold);
        let invoice = labour + Decimal::from(extra);

        let result = compute_labour(&LabourConfig {
            labour_threshold: labour.into(),
            ..LabourConfig::new(invoice).with_labour(labour)
        }).unwrap();

        prop_assert!(result.raw.taxable_labour.is_zero());
        prop_assert!(result.raw.wht_labour.is_zero());
    }

    #[test]
    fn test_higher_wht_rate_pays_less(
        cents in 1u64..100_000_000_000u64,
        low in 0u32..50u32,
        step in 1u32..50u32,
    ) {
        let invoice = invoice_from_cents(cents);
        let high = low + step;

        let general = |rate: u32| compute_general(&GeneralConfig {
            wht_rate: percent(rate).into(),
            ..GeneralConfig::new(invoice)
        }).unwrap().raw.pay_supplier;
        prop_assert!(general(high) < general(low));

        let construction = |rate: u32| compute_construction(&ConstructionConfig {
            wht_rate: percent(rate).into(),
            ..ConstructionConfig::new(invoice)
        }).unwrap().raw.pay_contractor;
        prop_assert!(construction(high) < construction(low));

        let withholding = |rate: u32| compute_withholding_only(&WithholdingConfig {
            wht_rate: percent(rate).into(),
            ..WithholdingConfig::new(invoice)
        }).unwrap().raw.pay_supplier;
        prop_assert!(withholding(high) < withholding(low));

        let vat_only = |rate: u32| compute_vat_only(&VatOnlyConfig {
            wht_rate: percent(rate).into(),
            ..VatOnlyConfig::new(invoice)
        }).unwrap().raw.pay_supplier;
        prop_assert!(vat_only(high) < vat_only(low));

        let hospitality = |rate: u32| compute_hospitality(&HospitalityConfig {
            remaining_wht_rate: percent(rate).into(),
            ..HospitalityConfig::new(invoice)
        }).unwrap().raw.pay_supplier;
        prop_assert!(hospitality(high) < hospitality(low));

        let hall_hire = invoice / Decimal::TWO;
        let hall = |rate: u32| compute_hospitality(&HospitalityConfig {
            hall_hire_wht_rate: percent(rate).into(),
            ..HospitalityConfig::new(invoice).with_hall_hire(hall_hire)
        }).unwrap().raw.pay_supplier;
        prop_assert!(hall(high) < hall(low));

        let labour = |rate: u32| compute_labour(&LabourConfig {
            standard_wht_rate: percent(rate).into(),
            ..LabourConfig::new(invoice)
        }).unwrap().raw.pay_customer;
        prop_assert!(labour(high) < labour(low));
    }

    #[test]
    fn test_higher_labour_rate_pays_less_above_threshold(
        excess in 1u64..10_000_000u64,
        low in 0u32..50u32,
        step in 1u32..50u32,
    ) {
        let labour = Decimal::from(35_000u64 + excess);
        let invoice = labour + Decimal::from(1_000u64);

        let pay = |rate: u32| compute_labour(&LabourConfig {
            labour_wht_rate: percent(rate).into(),
            ..LabourConfig::new(invoice).with_labour(labour)
        }).unwrap().raw.pay_customer;

        prop_assert!(pay(low + step) < pay(low));
    }
}
