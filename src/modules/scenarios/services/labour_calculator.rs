use rust_decimal::Decimal;
use tracing::debug;

use super::{apply_rate, deduct, invert, sum};
use crate::core::validation::{
    ensure_non_negative, ensure_threshold, ensure_within_invoice, inversion_divisor,
};
use crate::core::{CalculationError, ScenarioCalculator};
use crate::modules::scenarios::models::{LabourComponents, LabourConfig, LabourResult, ScenarioResult};

/// Scenario 4: invoice with an optional labour charge.
///
/// The labour amount is carved out of the invoice first and only the
/// remainder is reversed through VAT and PPDA. The remainder's base is
/// withheld at the standard rate; labour is withheld at the labour rate on
/// the excess over the threshold only. Labour equal to the threshold is
/// not withheld.
pub fn compute_labour(config: &LabourConfig) -> Result<LabourResult, CalculationError> {
    let invoice = ensure_non_negative(config.invoice.parse("invoice")?, "invoice")?;
    let vat = config.vat_rate.parse_rate("vatRate")?;
    let ppda = config.ppda_rate.parse_rate("ppdaRate")?;
    let standard_wht = config.standard_wht_rate.parse_rate("standardWhtRate")?;
    let labour_wht = config.labour_wht_rate.parse_rate("labourWhtRate")?;
    let threshold = ensure_threshold(
        config.labour_threshold.parse("labourThreshold")?,
        "labourThreshold",
    )?;
    let divisor = inversion_divisor(&[vat, ppda], "rates")?;

    let labour = if config.labour_included {
        let amount = config.labour_amount.parse("labourAmount")?;
        ensure_within_invoice(amount, invoice, "labourAmount")?
    } else {
        Decimal::ZERO
    };

    let remainder = deduct(invoice, &[labour], "taxableRemainder")?;
    let taxable_remainder = invert(remainder, divisor, "taxableRemainder")?;
    let vat_amount = apply_rate(taxable_remainder, vat, "vatAmount")?;
    let ppda_amount = apply_rate(taxable_remainder, ppda, "ppdaAmount")?;
    let wht_remainder = apply_rate(taxable_remainder, standard_wht, "whtRemainder")?;

    let taxable_labour = if labour > threshold {
        deduct(labour, &[threshold], "taxableLabour")?
    } else {
        Decimal::ZERO
    };
    let wht_labour = apply_rate(taxable_labour, labour_wht, "whtLabour")?;

    let total_wht = sum(&[wht_remainder, wht_labour], "totalWht")?;
    let pay_customer = deduct(invoice, &[ppda_amount, total_wht], "payCustomer")?;

    debug!(
        scenario = LabourConfig::NAME,
        %invoice,
        %labour,
        %threshold,
        %taxable_remainder,
        %taxable_labour,
        "Decomposed invoice"
    );

    Ok(ScenarioResult::new(
        invoice,
        LabourComponents {
            taxable_remainder,
            vat_amount,
            ppda_amount,
            taxable_labour,
            wht_remainder,
            wht_labour,
            total_wht,
            pay_customer,
        },
        config.rounding,
    ))
}

impl ScenarioCalculator for LabourConfig {
    type Output = LabourResult;

    const NAME: &'static str = "labour";

    fn calculate(&self) -> Result<Self::Output, CalculationError> {
        compute_labour(self)
    }
}
