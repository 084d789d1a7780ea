//! Resume evidence extraction using LLM
//!
//! Extracts a structured analysis from resume text using rig-core. The oracle
//! sits behind the narrow `EvidenceExtractor` trait so it can be swapped for
//! a deterministic stub in tests.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::providers::openai;

use crate::model::bundle::AnalysisRequest;
use crate::model::extracted::ExtractedAnalysis;
use crate::service::extraction::prompts::{ANALYSIS_SYSTEM_PROMPT, build_analysis_prompt};
use crate::service::llm::LlmClient;

pub mod convert;
pub mod error;
pub mod prompts;
pub mod validation;

pub use error::ExtractionError;

/// Environment variable for the analysis model (defaults to gpt-4o if not set)
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";

/// Default model for resume analysis (gpt-4o for long-context evidence grounding)
const DEFAULT_MODEL: &str = openai::GPT_4O;

/// Resumes beyond this are truncated to stay under token limits
const MAX_RESUME_CHARS: usize = 15000;

/// The extraction oracle: one request in, one complete structured analysis out
///
/// Single-shot and potentially slow. No partial or streaming results, and no
/// internal retry; retries, timeouts, and at-most-one outstanding request per
/// analysis target belong to the caller.
#[async_trait]
pub trait EvidenceExtractor: Send + Sync {
    async fn extract(&self, request: &AnalysisRequest)
    -> Result<ExtractedAnalysis, ExtractionError>;
}

/// Production extractor backed by an OpenAI-compatible gateway through rig
pub struct RigEvidenceExtractor {
    llm_client: LlmClient,
    model: String,
}

impl RigEvidenceExtractor {
    /// Create a new extractor
    /// Uses a shared LLM client passed from startup.
    /// Optionally uses ANALYSIS_MODEL env var (defaults to gpt-4o).
    pub fn new(llm_client: LlmClient) -> Self {
        let model =
            std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        tracing::info!(
            model = %model,
            "Resume evidence extractor initialized"
        );
        Self { llm_client, model }
    }
}

#[async_trait]
impl EvidenceExtractor for RigEvidenceExtractor {
    async fn extract(
        &self,
        request: &AnalysisRequest,
    ) -> Result<ExtractedAnalysis, ExtractionError> {
        // Truncate very long resumes to avoid token limits
        let truncated = if request.resume_text.len() > MAX_RESUME_CHARS {
            let mut cut = MAX_RESUME_CHARS;
            while !request.resume_text.is_char_boundary(cut) {
                cut -= 1;
            }
            AnalysisRequest {
                resume_text: request.resume_text[..cut].to_string(),
                ..request.clone()
            }
        } else {
            request.clone()
        };

        let prompt = build_analysis_prompt(&truncated);
        let prompt_length = prompt.len();

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt_length,
            has_job_description = request.has_job_description(),
            "Initiating OpenAI API call for resume analysis"
        );

        let start_time = std::time::Instant::now();

        // Use temperature=0.0 and seed for deterministic, reproducible outputs
        let extractor = self
            .llm_client
            .openai_client()
            .extractor::<ExtractedAnalysis>(&self.model)
            .preamble(ANALYSIS_SYSTEM_PROMPT)
            .additional_params(serde_json::json!({
                "temperature": 0.0,
                "seed": 42
            }))
            .build();

        match extractor.extract(&prompt).await {
            Ok(result) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    skills_extracted = result.skills.as_ref().map(Vec::len).unwrap_or(0),
                    prompt_length = prompt_length,
                    "OpenAI API call for resume analysis completed successfully"
                );
                Ok(result)
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "OpenAI API call for resume analysis failed"
                );
                Err(ExtractionError::ExtractionFailed(e.to_string()))
            }
        }
    }
}
