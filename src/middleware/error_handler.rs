use actix_web::{
    error::{InternalError, JsonPayloadError},
    web, HttpRequest, ResponseError,
};

use crate::core::AppError;

/// Largest JSON body accepted by the calculation endpoints
const JSON_LIMIT_BYTES: usize = 16 * 1024;

/// Log an error at a level matching its status class
pub fn log_error(err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(code = err.code(), status = status.as_u16(), "Request failed: {}", err);
    } else {
        tracing::warn!(code = err.code(), status = status.as_u16(), "Request rejected: {}", err);
    }
}

/// Turn JSON extractor failures into the standard error body
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let app_error = AppError::validation(format!("Invalid request body: {}", err));
    tracing::warn!(path = %req.path(), "Malformed JSON payload: {}", err);

    let response = app_error.error_response();
    InternalError::from_response(err, response).into()
}

/// JSON extractor configuration shared by the server and tests
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(json_error_handler)
}
