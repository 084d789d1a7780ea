//! Error types for score computation

use thiserror::Error;

/// Error type for the scoring core
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    /// The caller passed a relevancy weight outside [0,100]. This is a
    /// caller bug, not a data-quality issue, so it fails fast instead of
    /// being clamped.
    #[error("relevancy weight {0} is outside [0,100]")]
    OutOfRangeWeight(i64),
}
