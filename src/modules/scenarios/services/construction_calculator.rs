use tracing::debug;

use super::{apply_rate, deduct, invert};
use crate::core::validation::{ensure_non_negative, inversion_divisor};
use crate::core::{CalculationError, ScenarioCalculator};
use crate::modules::scenarios::models::{
    ConstructionComponents, ConstructionConfig, ConstructionResult, ScenarioResult,
};

/// Scenario 3: reverse VAT, retention, PPDA and NCIC out of a contractor invoice.
///
/// Retention, PPDA, NCIC and WHT are all deducted from what the contractor
/// is paid; VAT is not.
pub fn compute_construction(
    config: &ConstructionConfig,
) -> Result<ConstructionResult, CalculationError> {
    let invoice = ensure_non_negative(config.invoice.parse("invoice")?, "invoice")?;
    let vat = config.vat_rate.parse_rate("vatRate")?;
    let retention = config.retention_rate.parse_rate("retentionRate")?;
    let ppda = config.ppda_rate.parse_rate("ppdaRate")?;
    let ncic = config.ncic_rate.parse_rate("ncicRate")?;
    let wht = config.wht_rate.parse_rate("whtRate")?;
    let divisor = inversion_divisor(&[vat, retention, ppda, ncic], "rates")?;

    let taxable_amount = invert(invoice, divisor, "taxableAmount")?;
    let vat_amount = apply_rate(taxable_amount, vat, "vatAmount")?;
    let retention_amount = apply_rate(taxable_amount, retention, "retentionAmount")?;
    let ppda_amount = apply_rate(taxable_amount, ppda, "ppdaAmount")?;
    let ncic_amount = apply_rate(taxable_amount, ncic, "ncicAmount")?;
    let wht_amount = apply_rate(taxable_amount, wht, "whtAmount")?;
    let pay_contractor = deduct(
        invoice,
        &[retention_amount, ppda_amount, ncic_amount, wht_amount],
        "payContractor",
    )?;

    debug!(
        scenario = ConstructionConfig::NAME,
        %invoice,
        %divisor,
        %taxable_amount,
        "Decomposed invoice"
    );

    Ok(ScenarioResult::new(
        invoice,
        ConstructionComponents {
            taxable_amount,
            vat_amount,
            retention_amount,
            ppda_amount,
            ncic_amount,
            wht_amount,
            pay_contractor,
        },
        config.rounding,
    ))
}

impl ScenarioCalculator for ConstructionConfig {
    type Output = ConstructionResult;

    const NAME: &'static str = "construction";

    fn calculate(&self) -> Result<Self::Output, CalculationError> {
        compute_construction(self)
    }
}
