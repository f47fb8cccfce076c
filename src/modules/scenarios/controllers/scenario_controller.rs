//! HTTP endpoints for the scenario calculators.
//!
//! Each calculator is served at `POST /scenarios/{slug}` and takes its
//! configuration as the JSON body. Calculations are synchronous and cheap,
//! so handlers call them inline.

use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::core::{AppError, ScenarioCalculator};
use crate::middleware::log_error;
use crate::modules::scenarios::models::{
    defaults, ConstructionConfig, GeneralConfig, HospitalityConfig, LabourConfig, Scenario,
    ScenarioSummary, VatOnlyConfig, WithholdingConfig,
};

/// Run one scenario calculation
/// POST /scenarios/{slug}
pub async fn calculate<C>(request: web::Json<C>) -> Result<HttpResponse, AppError>
where
    C: ScenarioCalculator + DeserializeOwned,
{
    let config = request.into_inner();

    match config.calculate() {
        Ok(result) => {
            info!(scenario = C::NAME, "Scenario calculated");
            Ok(HttpResponse::Ok().json(result))
        }
        Err(err) => {
            let err = AppError::from(err);
            log_error(&err);
            Err(err)
        }
    }
}

/// List the available scenarios
/// GET /scenarios
pub async fn list_scenarios() -> HttpResponse {
    let scenarios: Vec<ScenarioSummary> = Scenario::ALL.iter().map(Scenario::summary).collect();
    HttpResponse::Ok().json(scenarios)
}

/// Default rates for every scenario
/// GET /scenarios/defaults
pub async fn list_defaults() -> HttpResponse {
    HttpResponse::Ok().json(defaults::table())
}

/// Default rates for one scenario
/// GET /scenarios/{slug}/defaults
pub async fn get_scenario_defaults(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let scenario: Scenario = path.parse().map_err(AppError::not_found)?;
    Ok(HttpResponse::Ok().json(defaults::for_scenario(scenario)))
}

/// Fallback for calculation requests naming no known scenario
pub async fn unknown_scenario(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(format!("Unknown scenario: {}", path.into_inner())))
}

fn scenario_path(scenario: Scenario) -> String {
    format!("/{}", scenario.slug())
}

/// Configure scenario routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/scenarios")
            .route("", web::get().to(list_scenarios))
            .route("/defaults", web::get().to(list_defaults))
            .route(
                &scenario_path(Scenario::General),
                web::post().to(calculate::<GeneralConfig>),
            )
            .route(
                &scenario_path(Scenario::Hospitality),
                web::post().to(calculate::<HospitalityConfig>),
            )
            .route(
                &scenario_path(Scenario::Construction),
                web::post().to(calculate::<ConstructionConfig>),
            )
            .route(
                &scenario_path(Scenario::Labour),
                web::post().to(calculate::<LabourConfig>),
            )
            .route(
                &scenario_path(Scenario::WithholdingOnly),
                web::post().to(calculate::<WithholdingConfig>),
            )
            .route(
                &scenario_path(Scenario::VatOnly),
                web::post().to(calculate::<VatOnlyConfig>),
            )
            .route("/{slug}/defaults", web::get().to(get_scenario_defaults))
            .route("/{slug}", web::post().to(unknown_scenario)),
    );
}
