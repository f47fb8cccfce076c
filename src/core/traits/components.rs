use crate::core::numeric::Precision;

/// A set of computed amounts that can be quantized field by field.
///
/// The rounded copy has the same field names as the raw one, which is what
/// lets a result carry both side by side.
pub trait RoundComponents: Sized {
    fn rounded(&self, precision: Precision) -> Self;
}
