use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The four displayed scores, each an integer in [0,100]
///
/// A `ScoreSet` is a pure projection of a `ClaimsBundle` plus the configured
/// relevancy weight. It is recomputed on demand and never persisted
/// independently of the bundle that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreSet {
    pub ats_score: u8,
    pub credibility_score: u8,
    pub relevancy_score: u8,
    pub overall_score: u8,
}

/// Display bucket derived from a numeric score via fixed thresholds (70, 40)
///
/// Used uniformly for skills, candidates, and composite scores. The tier is
/// for display only and never feeds back into scoring math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        };
        write!(f, "{}", s)
    }
}
