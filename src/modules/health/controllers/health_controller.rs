use actix_web::{web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::scenarios::{compute_general, GeneralConfig};

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub application: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub application: bool,
    pub calculators: bool,
}

/// GET /health - Liveness probe
/// Returns 200 if the application is alive (can respond to requests)
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// Run the general scenario on its reference invoice (1185 → pays 1145)
fn calculators_ready() -> bool {
    match compute_general(&GeneralConfig::new(Decimal::new(1185, 0))) {
        Ok(result) => result.amounts.pay_supplier == Decimal::new(1145, 0),
        Err(e) => {
            tracing::error!("Calculator readiness check failed: {}", e);
            false
        }
    }
}

/// GET /ready - Readiness probe
/// Returns 200 once the calculators reproduce the reference decomposition
pub async fn readiness_check() -> impl Responder {
    let checks = ReadinessChecks {
        application: true,
        calculators: calculators_ready(),
    };
    let ready = checks.application && checks.calculators;

    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
