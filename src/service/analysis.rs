//! Resume analysis orchestration
//!
//! Runs one analysis end to end: invoke the extraction oracle, validate the
//! response against the oracle contract, convert it into an immutable
//! `ClaimsBundle`, and aggregate the four displayed scores.

use std::sync::Arc;

use crate::model::bundle::{AnalysisRequest, ClaimsBundle};
use crate::model::config::ScoringConfig;
use crate::model::scores::ScoreSet;
use crate::service::extraction::{EvidenceExtractor, ExtractionError, convert, validation};
use crate::service::scoring;

/// One completed analysis: the bundle and the scores derived from it
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub bundle: ClaimsBundle,
    pub scores: ScoreSet,
}

/// Service for analyzing resumes against optional job descriptions
pub struct AnalysisService {
    extractor: Arc<dyn EvidenceExtractor>,
    scoring_config: ScoringConfig,
}

impl AnalysisService {
    pub fn new(extractor: Arc<dyn EvidenceExtractor>, scoring_config: ScoringConfig) -> Self {
        tracing::info!(
            relevancy_weight = scoring_config.default_relevancy_weight,
            "Analysis service initialized"
        );
        Self {
            extractor,
            scoring_config,
        }
    }

    pub fn scoring_config(&self) -> &ScoringConfig {
        &self.scoring_config
    }

    /// Run a full analysis for one (resume, optional job description) pair
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisOutcome, ExtractionError> {
        let job_description_supplied = request.has_job_description();
        let start_time = std::time::Instant::now();

        let extracted = self.extractor.extract(request).await?;

        let validation_result =
            validation::validate_extracted_analysis(&extracted, job_description_supplied);

        if !validation_result.warnings.is_empty() {
            tracing::warn!(
                warnings = ?validation_result.warnings,
                "Oracle analysis produced quality warnings"
            );
        }

        if !validation_result.is_valid {
            tracing::error!(
                errors = ?validation_result.errors,
                "Oracle analysis violates the extraction contract"
            );
            return Err(ExtractionError::MalformedAnalysis(
                validation_result.errors.join("; "),
            ));
        }

        let bundle = convert::to_claims_bundle(extracted, job_description_supplied);
        let scores = scoring::aggregate(&bundle, &self.scoring_config);

        tracing::info!(
            candidate = %bundle.candidate_name,
            elapsed_ms = start_time.elapsed().as_millis(),
            skills = bundle.skills.len(),
            risk_flags = bundle.risk_flags.len(),
            job_description_supplied = job_description_supplied,
            overall_score = scores.overall_score,
            "Resume analysis complete"
        );

        Ok(AnalysisOutcome { bundle, scores })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extracted::{
        ExtractedAnalysis, ExtractedAtsBreakdown, ExtractedCredibilityBreakdown, ExtractedSkill,
    };
    use async_trait::async_trait;

    struct StubExtractor {
        response: ExtractedAnalysis,
    }

    #[async_trait]
    impl EvidenceExtractor for StubExtractor {
        async fn extract(
            &self,
            _request: &AnalysisRequest,
        ) -> Result<ExtractedAnalysis, ExtractionError> {
            Ok(self.response.clone())
        }
    }

    struct FailingExtractor;

    #[async_trait]
    impl EvidenceExtractor for FailingExtractor {
        async fn extract(
            &self,
            _request: &AnalysisRequest,
        ) -> Result<ExtractedAnalysis, ExtractionError> {
            Err(ExtractionError::ExtractionFailed(
                "gateway timeout".to_string(),
            ))
        }
    }

    fn oracle_response() -> ExtractedAnalysis {
        ExtractedAnalysis {
            candidate_name: Some("Priya Sharma".to_string()),
            candidate_role: Some("Senior Full-Stack Engineer".to_string()),
            overall_score: Some(89),
            skills: Some(vec![ExtractedSkill {
                skill_name: Some("React".to_string()),
                category: Some("framework".to_string()),
                score: Some(92),
                confidence: Some("verified".to_string()),
                evidence: Some("GitHub repos with 3 production React apps".to_string()),
            }]),
            risk_flags: Some(vec![
                "PostgreSQL expertise claimed with limited public evidence".to_string(),
            ]),
            experience_items: Some(vec![]),
            certifications: Some(vec![]),
            education: None,
            links: None,
            ats_breakdown: Some(ExtractedAtsBreakdown {
                formatting_score: Some(82),
                keyword_score: Some(74),
                structure_score: Some(90),
                contact_info_present: Some(true),
                sections_detected: Some(vec!["experience".to_string(), "skills".to_string()]),
                missing_sections: Some(vec!["summary".to_string()]),
            }),
            credibility_breakdown: Some(ExtractedCredibilityBreakdown {
                evidence_score: Some(91),
                github_linked: Some(true),
                certifications_verified: Some(1),
                certifications_unverified: Some(0),
                projects_with_links: Some(3),
                projects_without_links: Some(0),
            }),
            timeline_consistency: Some("consistent".to_string()),
            relevancy_score: Some(88),
            matched_skills: Some(vec!["React".to_string(), "TypeScript".to_string()]),
            missing_skills: Some(vec!["GraphQL".to_string()]),
            matched_keywords: Some(vec!["full-stack".to_string()]),
            improvement_suggestions: None,
            strength_summary: None,
            missing_evidence: None,
        }
    }

    fn request(job_description: Option<&str>) -> AnalysisRequest {
        AnalysisRequest {
            resume_text: "Priya Sharma\nSenior Full-Stack Engineer\n...".to_string(),
            job_description: job_description.map(String::from),
            role_title: None,
            experience_range: None,
        }
    }

    fn service(response: ExtractedAnalysis) -> AnalysisService {
        AnalysisService::new(
            Arc::new(StubExtractor { response }),
            ScoringConfig::default(),
        )
    }

    #[tokio::test]
    async fn analysis_with_job_description_blends_overall() {
        let outcome = service(oracle_response())
            .analyze(&request(Some("Senior full-stack role, React/TypeScript")))
            .await
            .unwrap();

        assert_eq!(outcome.scores.relevancy_score, 88);
        assert_eq!(outcome.scores.credibility_score, 91);
        // round((88 + 91) / 2) at the default 50/50 blend
        assert_eq!(outcome.scores.overall_score, 90);
        assert_eq!(outcome.scores.ats_score, 82);
    }

    #[tokio::test]
    async fn analysis_without_job_description_uses_oracle_overall() {
        let mut response = oracle_response();
        response.relevancy_score = None;
        response.matched_skills = None;
        response.missing_skills = None;
        response.matched_keywords = None;

        let outcome = service(response).analyze(&request(None)).await.unwrap();

        assert!(outcome.bundle.relevancy.is_none());
        assert_eq!(outcome.scores.relevancy_score, 0);
        assert_eq!(outcome.scores.overall_score, 89);
    }

    #[tokio::test]
    async fn missing_candidate_name_fails_as_malformed() {
        let mut response = oracle_response();
        response.candidate_name = None;

        let err = service(response).analyze(&request(None)).await.unwrap_err();

        match err {
            ExtractionError::MalformedAnalysis(msg) => {
                assert!(msg.contains("candidate_name"));
            }
            other => panic!("expected MalformedAnalysis, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn oracle_failure_is_surfaced_without_retry() {
        let service = AnalysisService::new(Arc::new(FailingExtractor), ScoringConfig::default());

        let err = service.analyze(&request(None)).await.unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn degraded_skill_confidence_does_not_fail_the_analysis() {
        let mut response = oracle_response();
        response.skills = Some(vec![ExtractedSkill {
            skill_name: Some("Kubernetes".to_string()),
            category: Some("devops".to_string()),
            score: Some(50),
            confidence: Some("maybe".to_string()),
            evidence: Some("mentioned once in a job bullet".to_string()),
        }]);

        let outcome = service(response).analyze(&request(None)).await.unwrap();

        assert_eq!(
            outcome.bundle.skills[0].confidence,
            crate::model::bundle::SkillConfidence::Unverified
        );
    }
}
