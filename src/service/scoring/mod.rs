//! Evidence-weighted trust scoring
//!
//! Pure, synchronous projections from a validated `ClaimsBundle` to the four
//! displayed scores, plus the weight recombination used by the UI slider.
//! Nothing here performs I/O or touches shared state; callers may invoke
//! these functions concurrently without coordination.

use crate::model::bundle::{AtsBreakdown, ClaimsBundle};
use crate::model::config::{AtsWeights, ScoringConfig};
use crate::model::scores::{ConfidenceTier, ScoreSet};

pub mod error;

pub use error::ScoringError;

/// Tier breakpoints shared by every component that buckets a score
const HIGH_TIER_FLOOR: u8 = 70;
const MEDIUM_TIER_FLOOR: u8 = 40;

/// Clamp a raw oracle score into [0,100]
///
/// Oracle scores are soft signals, not protocol-critical, so out-of-range
/// values are corrected silently rather than rejected.
pub fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Blend relevancy and credibility under an already-validated weight
///
/// `weight` is the relevancy share in [0,100]; credibility takes the
/// remainder. Rounding is half-up, which matches half-away-from-zero since
/// inputs are non-negative.
fn blend(relevancy: u8, credibility: u8, weight: u8) -> u8 {
    let r = u32::from(relevancy);
    let c = u32::from(credibility);
    let w = u32::from(weight);

    let numerator = r * w + c * (100 - w);
    ((numerator + 50) / 100) as u8
}

/// Recompute Overall from already-computed Relevancy/Credibility
///
/// Lets a caller vary the blend interactively without re-invoking the
/// extraction oracle. Out-of-range scores are clamped; an out-of-range
/// weight is a caller error and fails fast.
pub fn recombine(relevancy: i64, credibility: i64, weight: i64) -> Result<u8, ScoringError> {
    if !(0..=100).contains(&weight) {
        return Err(ScoringError::OutOfRangeWeight(weight));
    }

    Ok(blend(
        clamp_score(relevancy),
        clamp_score(credibility),
        weight as u8,
    ))
}

/// Weighted mean of the three ATS breakdown components, rounded half-up
///
/// Breakdown components are already clamped to [0,100] at bundle
/// construction. Weight sanity (non-zero total) is enforced at config load.
pub fn ats_score(breakdown: &AtsBreakdown, weights: &AtsWeights) -> u8 {
    let numerator = u64::from(breakdown.formatting_score) * u64::from(weights.formatting)
        + u64::from(breakdown.keyword_score) * u64::from(weights.keyword)
        + u64::from(breakdown.structure_score) * u64::from(weights.structure);
    let denominator = u64::from(weights.total());

    ((2 * numerator + denominator) / (2 * denominator)) as u8
}

/// Project a `ClaimsBundle` into the four displayed scores
///
/// Overall is computed two different ways on purpose: with a job description
/// it is the relevancy/credibility blend under the configured weight; without
/// one there is no second input to blend against credibility alone, so the
/// oracle's own declared overall is used as-is.
pub fn aggregate(bundle: &ClaimsBundle, config: &ScoringConfig) -> ScoreSet {
    let ats = ats_score(&bundle.ats_breakdown, &config.ats_weights);
    let credibility = bundle.credibility_breakdown.evidence_score;

    let (relevancy, overall) = match &bundle.relevancy {
        Some(rel) => (
            rel.score,
            blend(rel.score, credibility, config.default_relevancy_weight),
        ),
        None => (0, bundle.oracle_overall_score),
    };

    ScoreSet {
        ats_score: ats,
        credibility_score: credibility,
        relevancy_score: relevancy,
        overall_score: overall,
    }
}

/// Classify a score into its display tier
///
/// `>= 70` is high, `>= 40` is medium, anything below is low. These two
/// breakpoints are the only ones used anywhere in the system.
pub fn bucket(score: u8) -> ConfidenceTier {
    if score >= HIGH_TIER_FLOOR {
        ConfidenceTier::High
    } else if score >= MEDIUM_TIER_FLOOR {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}
