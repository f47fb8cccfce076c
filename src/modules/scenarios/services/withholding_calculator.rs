use tracing::debug;

use super::{apply_rate, deduct};
use crate::core::validation::ensure_non_negative;
use crate::core::{CalculationError, ScenarioCalculator};
use crate::modules::scenarios::models::{
    ScenarioResult, WithholdingComponents, WithholdingConfig, WithholdingResult,
};

/// Scenario 5: the invoice is already the taxable base, only WHT is deducted
pub fn compute_withholding_only(
    config: &WithholdingConfig,
) -> Result<WithholdingResult, CalculationError> {
    let invoice = ensure_non_negative(config.invoice.parse("invoice")?, "invoice")?;
    let wht = config.wht_rate.parse_rate("whtRate")?;

    let taxable_amount = invoice;
    let wht_amount = apply_rate(taxable_amount, wht, "whtAmount")?;
    let pay_supplier = deduct(invoice, &[wht_amount], "paySupplier")?;

    debug!(scenario = WithholdingConfig::NAME, %invoice, %wht_amount, "Decomposed invoice");

    Ok(ScenarioResult::new(
        invoice,
        WithholdingComponents {
            taxable_amount,
            wht_amount,
            pay_supplier,
        },
        config.rounding,
    ))
}

impl ScenarioCalculator for WithholdingConfig {
    type Output = WithholdingResult;

    const NAME: &'static str = "withholding-only";

    fn calculate(&self) -> Result<Self::Output, CalculationError> {
        compute_withholding_only(self)
    }
}
