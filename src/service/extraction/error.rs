//! Error types for evidence extraction

use thiserror::Error;

/// Error type for evidence extraction
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractionError {
    /// The oracle call itself failed. Retries belong to the caller that
    /// triggered the analysis, never to this service.
    #[error("LLM extraction failed: {0}")]
    ExtractionFailed(String),

    /// A required identity or structural field is absent from the oracle
    /// response. An absent candidate name is meaningfully different from a
    /// zero-confidence skill, so this surfaces as a failure instead of a
    /// silent default.
    #[error("malformed analysis from oracle: {0}")]
    MalformedAnalysis(String),
}
