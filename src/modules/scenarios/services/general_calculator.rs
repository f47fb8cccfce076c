use tracing::debug;

use super::{apply_rate, deduct, invert};
use crate::core::validation::{ensure_non_negative, inversion_divisor};
use crate::core::{CalculationError, ScenarioCalculator};
use crate::modules::scenarios::models::{GeneralComponents, GeneralConfig, GeneralResult, ScenarioResult};

/// Scenario 1: reverse VAT and PPDA out of the invoice.
///
/// `taxable = invoice / (1 + vat + ppda)`; WHT is taken from the taxable
/// base but plays no part in the inversion. The supplier receives the
/// invoice less PPDA and WHT.
pub fn compute_general(config: &GeneralConfig) -> Result<GeneralResult, CalculationError> {
    let invoice = ensure_non_negative(config.invoice.parse("invoice")?, "invoice")?;
    let vat = config.vat_rate.parse_rate("vatRate")?;
    let ppda = config.ppda_rate.parse_rate("ppdaRate")?;
    let wht = config.wht_rate.parse_rate("whtRate")?;
    let divisor = inversion_divisor(&[vat, ppda], "rates")?;

    let taxable_amount = invert(invoice, divisor, "taxableAmount")?;
    let vat_amount = apply_rate(taxable_amount, vat, "vatAmount")?;
    let ppda_amount = apply_rate(taxable_amount, ppda, "ppdaAmount")?;
    let wht_amount = apply_rate(taxable_amount, wht, "whtAmount")?;
    let pay_supplier = deduct(invoice, &[ppda_amount, wht_amount], "paySupplier")?;

    debug!(
        scenario = GeneralConfig::NAME,
        %invoice,
        %divisor,
        %taxable_amount,
        "Decomposed invoice"
    );

    Ok(ScenarioResult::new(
        invoice,
        GeneralComponents {
            taxable_amount,
            vat_amount,
            ppda_amount,
            wht_amount,
            pay_supplier,
        },
        config.rounding,
    ))
}

impl ScenarioCalculator for GeneralConfig {
    type Output = GeneralResult;

    const NAME: &'static str = "general";

    fn calculate(&self) -> Result<Self::Output, CalculationError> {
        compute_general(self)
    }
}
