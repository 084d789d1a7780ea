//! REST API endpoint for weight recombination
//!
//! Lets a caller (the UI weight slider) re-blend already-computed relevancy
//! and credibility scores without re-invoking the extraction oracle.

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::scores::ConfidenceTier;
use crate::service::scoring;

/// Query parameters for score recombination
#[derive(Debug, Deserialize, IntoParams)]
pub struct RecombineParams {
    /// Relevancy score in [0,100]; out-of-range values are clamped
    pub relevancy: i64,
    /// Credibility score in [0,100]; out-of-range values are clamped
    pub credibility: i64,
    /// Relevancy share of the blend in [0,100] (default: 50).
    /// Out-of-range values are rejected, not clamped.
    pub weight: Option<i64>,
}

/// Recombined overall score
#[derive(Debug, Serialize, ToSchema)]
pub struct RecombineResponse {
    pub overall_score: u8,
    pub tier: ConfidenceTier,
}

/// Recompute the overall score under a caller-chosen relevancy weight
#[utoipa::path(
    get,
    path = "/v1/scores/recombine",
    params(RecombineParams),
    responses(
        (status = 200, description = "Recombined score", body = RecombineResponse),
        (status = 400, description = "Weight outside [0,100]", body = ErrorResponse)
    ),
    tag = "scores"
)]
#[get("/v1/scores/recombine")]
pub async fn recombine_scores(
    query: web::Query<RecombineParams>,
) -> Result<HttpResponse, ApiError> {
    let weight = query.weight.unwrap_or(50);

    let overall_score = scoring::recombine(query.relevancy, query.credibility, weight)?;

    Ok(HttpResponse::Ok().json(RecombineResponse {
        overall_score,
        tier: scoring::bucket(overall_score),
    }))
}

/// Configure score routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(recombine_scores);
}
