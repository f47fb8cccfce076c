// Scenarios module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    ConstructionConfig, GeneralConfig, HospitalityConfig, LabourConfig, Scenario, ScenarioResult,
    VatOnlyConfig, WithholdingConfig,
};
pub use services::{
    compute_construction, compute_general, compute_hospitality, compute_labour, compute_vat_only,
    compute_withholding_only,
};
