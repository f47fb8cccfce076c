use rust_decimal::Decimal;
use tracing::debug;

use super::{apply_rate, deduct, invert, sum};
use crate::core::validation::{ensure_non_negative, ensure_within_invoice, inversion_divisor};
use crate::core::{CalculationError, ScenarioCalculator};
use crate::modules::scenarios::models::{
    HospitalityComponents, HospitalityConfig, HospitalityResult, ScenarioResult,
};

/// Scenario 2: reverse VAT, PPDA and tourism levy out of the invoice.
///
/// When hall hire is included the taxable base is split in proportion to
/// the hall hire share of the invoice. The hall hire part is withheld at
/// `hallHireWhtRate`, the rest at `remainingWhtRate`.
pub fn compute_hospitality(
    config: &HospitalityConfig,
) -> Result<HospitalityResult, CalculationError> {
    let invoice = ensure_non_negative(config.invoice.parse("invoice")?, "invoice")?;
    let vat = config.vat_rate.parse_rate("vatRate")?;
    let ppda = config.ppda_rate.parse_rate("ppdaRate")?;
    let tourism = config.tourism_rate.parse_rate("tourismRate")?;
    let remaining_wht = config.remaining_wht_rate.parse_rate("remainingWhtRate")?;
    let hall_wht = config.hall_hire_wht_rate.parse_rate("hallHireWhtRate")?;
    let divisor = inversion_divisor(&[vat, ppda, tourism], "rates")?;

    let hall_hire = if config.hall_hire_included {
        let amount = config.hall_hire_amount.parse("hallHireAmount")?;
        ensure_within_invoice(amount, invoice, "hallHireAmount")?
    } else {
        Decimal::ZERO
    };

    let taxable_amount = invert(invoice, divisor, "taxableAmount")?;
    let vat_amount = apply_rate(taxable_amount, vat, "vatAmount")?;
    let ppda_amount = apply_rate(taxable_amount, ppda, "ppdaAmount")?;
    let tourism_amount = apply_rate(taxable_amount, tourism, "tourismAmount")?;

    // hall_hire <= invoice, so a zero invoice means a zero share
    let hall_share = if invoice.is_zero() {
        Decimal::ZERO
    } else {
        hall_hire / invoice
    };
    let taxable_hall = apply_rate(taxable_amount, hall_share, "whtHall")?;
    let taxable_remaining = deduct(taxable_amount, &[taxable_hall], "whtRemaining")?;

    let wht_hall = apply_rate(taxable_hall, hall_wht, "whtHall")?;
    let wht_remaining = apply_rate(taxable_remaining, remaining_wht, "whtRemaining")?;
    let wht_amount = sum(&[wht_hall, wht_remaining], "whtAmount")?;
    let pay_supplier = deduct(invoice, &[ppda_amount, wht_amount], "paySupplier")?;

    debug!(
        scenario = HospitalityConfig::NAME,
        %invoice,
        %hall_hire,
        %taxable_amount,
        "Decomposed invoice"
    );

    Ok(ScenarioResult::new(
        invoice,
        HospitalityComponents {
            taxable_amount,
            vat_amount,
            ppda_amount,
            tourism_amount,
            wht_amount,
            wht_hall,
            wht_remaining,
            pay_supplier,
        },
        config.rounding,
    ))
}

impl ScenarioCalculator for HospitalityConfig {
    type Output = HospitalityResult;

    const NAME: &'static str = "hospitality";

    fn calculate(&self) -> Result<Self::Output, CalculationError> {
        compute_hospitality(self)
    }
}
