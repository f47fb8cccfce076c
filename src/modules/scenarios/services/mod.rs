//! Scenario calculators.
//!
//! Each calculator resolves and validates every input first, then inverts
//! the compounding formula and derives its components from the taxable
//! base. Arithmetic goes through the checked helpers below so a
//! pathological rate set fails with a classified error instead of
//! overflowing.

pub mod construction_calculator;
pub mod general_calculator;
pub mod hospitality_calculator;
pub mod labour_calculator;
pub mod vat_only_calculator;
pub mod withholding_calculator;

pub use construction_calculator::compute_construction;
pub use general_calculator::compute_general;
pub use hospitality_calculator::compute_hospitality;
pub use labour_calculator::compute_labour;
pub use vat_only_calculator::compute_vat_only;
pub use withholding_calculator::compute_withholding_only;

use rust_decimal::Decimal;

use crate::core::CalculationError;

const OUT_OF_RANGE: &str = "component is out of range for the supplied rates";

/// Divide a tax-inclusive amount by its compounding divisor
pub(crate) fn invert(
    amount: Decimal,
    divisor: Decimal,
    field: &'static str,
) -> Result<Decimal, CalculationError> {
    amount
        .checked_div(divisor)
        .ok_or_else(|| CalculationError::configuration(field, OUT_OF_RANGE))
}

/// `base × fraction`
pub(crate) fn apply_rate(
    base: Decimal,
    fraction: Decimal,
    field: &'static str,
) -> Result<Decimal, CalculationError> {
    base.checked_mul(fraction)
        .ok_or_else(|| CalculationError::configuration(field, OUT_OF_RANGE))
}

/// `total − Σ deductions`
pub(crate) fn deduct(
    total: Decimal,
    deductions: &[Decimal],
    field: &'static str,
) -> Result<Decimal, CalculationError> {
    deductions
        .iter()
        .try_fold(total, |acc, deduction| acc.checked_sub(*deduction))
        .ok_or_else(|| CalculationError::configuration(field, OUT_OF_RANGE))
}

/// `Σ parts`
pub(crate) fn sum(parts: &[Decimal], field: &'static str) -> Result<Decimal, CalculationError> {
    parts
        .iter()
        .try_fold(Decimal::ZERO, |acc, part| acc.checked_add(*part))
        .ok_or_else(|| CalculationError::configuration(field, OUT_OF_RANGE))
}
