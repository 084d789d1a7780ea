pub mod analysis;
pub mod extraction;
pub mod llm;
pub mod scoring;

pub use analysis::AnalysisService;
pub use extraction::{EvidenceExtractor, RigEvidenceExtractor};
pub use llm::LlmClient;
