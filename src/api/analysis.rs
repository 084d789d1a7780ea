//! REST API endpoints for resume analysis

use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::bundle::{AnalysisRequest, ClaimsBundle};
use crate::model::scores::{ConfidenceTier, ScoreSet};
use crate::service::AnalysisService;
use crate::service::scoring;

/// Response for a completed analysis
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub bundle: ClaimsBundle,
    pub scores: ScoreSet,
    /// Display tier for the overall score
    pub overall_tier: ConfidenceTier,
    pub request_id: String,
}

/// Analyze a resume against an optional job description
///
/// Invokes the extraction oracle once, validates the response, and returns
/// the claims bundle together with the four derived scores.
#[utoipa::path(
    post,
    path = "/v1/analyses",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalysisResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Oracle failed or returned a malformed analysis", body = ErrorResponse)
    ),
    tag = "analyses"
)]
#[post("/v1/analyses")]
pub async fn create_analysis(
    service: web::Data<AnalysisService>,
    request: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();

    if request.resume_text.trim().is_empty() {
        return Err(ApiError::BadRequest("resume_text must not be empty".to_string()));
    }

    let outcome = service.analyze(&request).await?;
    let overall_tier = scoring::bucket(outcome.scores.overall_score);

    Ok(HttpResponse::Ok().json(AnalysisResponse {
        bundle: outcome.bundle,
        scores: outcome.scores,
        overall_tier,
        request_id: Uuid::new_v4().to_string(),
    }))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_analysis);
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VerifyHire Scoring API",
        description = "Evidence-weighted trust scoring for resume analysis"
    ),
    paths(
        crate::api::analysis::create_analysis,
        crate::api::scores::recombine_scores,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        AnalysisRequest,
        AnalysisResponse,
        ClaimsBundle,
        ScoreSet,
        ConfidenceTier,
        ErrorResponse,
        crate::model::bundle::SkillClaim,
        crate::model::bundle::SkillCategory,
        crate::model::bundle::SkillConfidence,
        crate::model::bundle::TimelineConsistency,
        crate::model::bundle::AtsBreakdown,
        crate::model::bundle::CredibilityBreakdown,
        crate::model::bundle::RelevancyClaims,
        crate::model::bundle::ExperienceItem,
        crate::model::bundle::Certification,
        crate::model::bundle::EducationItem,
        crate::model::bundle::ResumeLink,
        crate::api::scores::RecombineResponse,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth,
    )),
    tags(
        (name = "analyses", description = "Resume analysis"),
        (name = "scores", description = "Score recombination"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;
