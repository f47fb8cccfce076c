pub mod construction;
pub mod defaults;
pub mod general;
pub mod hospitality;
pub mod labour;
pub mod result;
pub mod scenario;
pub mod vat_only;
pub mod withholding;

pub use construction::{ConstructionComponents, ConstructionConfig, ConstructionResult};
pub use defaults::{DefaultValue, ScenarioDefaults};
pub use general::{GeneralComponents, GeneralConfig, GeneralResult};
pub use hospitality::{HospitalityComponents, HospitalityConfig, HospitalityResult};
pub use labour::{LabourComponents, LabourConfig, LabourResult};
pub use result::ScenarioResult;
pub use scenario::{Scenario, ScenarioSummary};
pub use vat_only::{VatOnlyComponents, VatOnlyConfig, VatOnlyResult};
pub use withholding::{WithholdingComponents, WithholdingConfig, WithholdingResult};
