pub mod bundle;
pub mod config;
pub mod extracted;
pub mod scores;

pub use bundle::*;
pub use config::{AtsWeights, Config, ScoringConfig};
pub use scores::{ConfidenceTier, ScoreSet};
