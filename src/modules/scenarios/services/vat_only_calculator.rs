use tracing::debug;

use super::{apply_rate, deduct, invert};
use crate::core::validation::{ensure_non_negative, inversion_divisor};
use crate::core::{CalculationError, ScenarioCalculator};
use crate::modules::scenarios::models::{ScenarioResult, VatOnlyComponents, VatOnlyConfig, VatOnlyResult};

/// Scenario 6: reverse VAT out of the invoice and withhold WHT on the base.
///
/// VAT is reported but stays in the amount paid; only WHT is deducted.
pub fn compute_vat_only(config: &VatOnlyConfig) -> Result<VatOnlyResult, CalculationError> {
    let invoice = ensure_non_negative(config.invoice.parse("invoice")?, "invoice")?;
    let vat = config.vat_rate.parse_rate("vatRate")?;
    let wht = config.wht_rate.parse_rate("whtRate")?;
    let divisor = inversion_divisor(&[vat], "rates")?;

    let taxable_amount = invert(invoice, divisor, "taxableAmount")?;
    let vat_amount = apply_rate(taxable_amount, vat, "vatAmount")?;
    let wht_amount = apply_rate(taxable_amount, wht, "whtAmount")?;
    let pay_supplier = deduct(invoice, &[wht_amount], "paySupplier")?;

    debug!(
        scenario = VatOnlyConfig::NAME,
        %invoice,
        %taxable_amount,
        "Decomposed invoice"
    );

    Ok(ScenarioResult::new(
        invoice,
        VatOnlyComponents {
            taxable_amount,
            vat_amount,
            wht_amount,
            pay_supplier,
        },
        config.rounding,
    ))
}

impl ScenarioCalculator for VatOnlyConfig {
    type Output = VatOnlyResult;

    const NAME: &'static str = "vat-only";

    fn calculate(&self) -> Result<Self::Output, CalculationError> {
        compute_vat_only(self)
    }
}
