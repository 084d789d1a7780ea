//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::extraction::ExtractionError;
use crate::service::scoring::ScoringError;

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The oracle returned a response that violates its contract (502)
    #[error("Malformed analysis: {0}")]
    MalformedAnalysis(String),

    /// The oracle call failed (502)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    #[allow(dead_code)] // Reserved for non-oracle failures
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedAnalysis(_) | ApiError::ExternalService(_) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::MalformedAnalysis(_) => "malformed_analysis",
            ApiError::ExternalService(_) => "external_service_error",
            ApiError::Internal(_) => "internal_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::MalformedAnalysis(msg) => ApiError::MalformedAnalysis(msg),
            ExtractionError::ExtractionFailed(msg) => ApiError::ExternalService(msg),
        }
    }
}

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        match err {
            // A weight outside [0,100] is a caller bug; fail fast with a 400
            ScoringError::OutOfRangeWeight(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}
