pub mod error;
pub mod numeric;
pub mod traits;
pub mod validation;

pub use error::{AppError, CalculationError, Result};
pub use numeric::{NumericInput, Precision};
pub use traits::ScenarioCalculator;
