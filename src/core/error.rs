use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Classified failure of a scenario calculation.
///
/// Every variant names the offending input field using its external
/// (camelCase) name so callers can point at the exact form field.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// Field could not be parsed into a finite decimal
    #[error("Invalid numeric input for {field}: {input:?}")]
    InvalidNumericInput { field: &'static str, input: String },

    /// Invoice or sub-amount below zero
    #[error("{field} must be non-negative")]
    NegativeAmount { field: &'static str },

    /// Sub-amount greater than the invoice it belongs to
    #[error("{field} cannot exceed the total invoice amount")]
    ExceedsInvoiceTotal { field: &'static str },

    /// Rate set or threshold that makes the computation undefined
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: &'static str,
    },
}

impl CalculationError {
    pub fn invalid_input(field: &'static str, input: impl Into<String>) -> Self {
        CalculationError::InvalidNumericInput {
            field,
            input: input.into(),
        }
    }

    pub fn negative(field: &'static str) -> Self {
        CalculationError::NegativeAmount { field }
    }

    pub fn exceeds_invoice(field: &'static str) -> Self {
        CalculationError::ExceedsInvoiceTotal { field }
    }

    pub fn configuration(field: &'static str, reason: &'static str) -> Self {
        CalculationError::InvalidConfiguration { field, reason }
    }

    /// Stable machine-readable classification
    pub fn code(&self) -> &'static str {
        match self {
            CalculationError::InvalidNumericInput { .. } => "INVALID_NUMERIC_INPUT",
            CalculationError::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            CalculationError::ExceedsInvoiceTotal { .. } => "EXCEEDS_INVOICE_TOTAL",
            CalculationError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    /// External name of the field that violated the constraint
    pub fn field(&self) -> &'static str {
        match self {
            CalculationError::InvalidNumericInput { field, .. }
            | CalculationError::NegativeAmount { field }
            | CalculationError::ExceedsInvoiceTotal { field }
            | CalculationError::InvalidConfiguration { field, .. } => field,
        }
    }
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Scenario calculation rejected its inputs
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// Validation errors for request shape
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Machine-readable error code used in response bodies
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Calculation(err) => err.code(),
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::RateLimitExceeded(_) => "RATE_LIMIT_EXCEEDED",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let field = match self {
            AppError::Calculation(err) => Some(err.field()),
            _ => None,
        };

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "code": self.code(),
                "field": field,
                "message": self.to_string(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Calculation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }
}
