//! Input constraints shared by the scenario calculators.
//!
//! Each check returns the value it accepted so calls can be chained with `?`
//! while the inputs are being resolved.

use rust_decimal::Decimal;

use super::error::CalculationError;

/// Amount must be zero or positive
pub fn ensure_non_negative(value: Decimal, field: &'static str) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO {
        return Err(CalculationError::negative(field));
    }
    Ok(value)
}

/// Sub-amount must be non-negative and no larger than the invoice
pub fn ensure_within_invoice(
    value: Decimal,
    invoice: Decimal,
    field: &'static str,
) -> Result<Decimal, CalculationError> {
    ensure_non_negative(value, field)?;
    if value > invoice {
        return Err(CalculationError::exceeds_invoice(field));
    }
    Ok(value)
}

/// Thresholds are configuration, so a negative one is a configuration fault
pub fn ensure_threshold(value: Decimal, field: &'static str) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO {
        return Err(CalculationError::configuration(
            field,
            "threshold must be non-negative",
        ));
    }
    Ok(value)
}

/// Build `1 + Σ fractions` and require it to be strictly positive
pub fn inversion_divisor(
    fractions: &[Decimal],
    field: &'static str,
) -> Result<Decimal, CalculationError> {
    let divisor = fractions
        .iter()
        .try_fold(Decimal::ONE, |acc, fraction| acc.checked_add(*fraction))
        .ok_or_else(|| CalculationError::configuration(field, "rates are out of range"))?;

    if divisor <= Decimal::ZERO {
        return Err(CalculationError::configuration(
            field,
            "compounding divisor must be positive",
        ));
    }

    Ok(divisor)
}
