use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

/// Request for a single analysis run
///
/// A new job description produces a new bundle; an existing bundle is never
/// mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: Option<String>,
    pub role_title: Option<String>,
    pub experience_range: Option<String>,
}

impl AnalysisRequest {
    /// Relevancy scoring only applies when a job description was supplied
    pub fn has_job_description(&self) -> bool {
        self.job_description
            .as_deref()
            .is_some_and(|jd| !jd.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Framework,
    Database,
    Cloud,
    Devops,
    SoftSkill,
    Design,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillConfidence {
    Verified,
    PartiallyVerified,
    Unverified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimelineConsistency {
    Consistent,
    MinorGaps,
    Inconsistent,
}

// A single skill claim from the resume
// - score: authenticity score based on evidence strength
// - confidence: how well the claim is backed by evidence
// - evidence: why the oracle believes the claim
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillClaim {
    pub name: String,
    pub category: SkillCategory,
    pub score: u8,
    pub confidence: SkillConfidence,
    pub evidence: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResumeLink {
    #[serde(rename = "type")]
    pub link_type: String,
    pub url: Url,
}

/// Component scores behind the ATS score. Each component is clamped to [0,100].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AtsBreakdown {
    pub formatting_score: u8,
    pub keyword_score: u8,
    pub structure_score: u8,
    pub contact_info_present: bool,
    pub sections_detected: Vec<String>,
    pub missing_sections: Vec<String>,
}

/// Supporting evidence counts behind the credibility score
///
/// The counts are presented as supporting evidence; the credibility score
/// mirrors `evidence_score` and is not re-aggregated from them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CredibilityBreakdown {
    pub evidence_score: u8,
    pub github_linked: bool,
    pub certifications_verified: u32,
    pub certifications_unverified: u32,
    pub projects_with_links: u32,
    pub projects_without_links: u32,
}

/// Relevancy claims against the supplied job description
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RelevancyClaims {
    pub score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_keywords: Vec<String>,
}

// The full structured output of one resume analysis run
// - skills: oracle emission order, duplicates tolerated (never deduplicated)
// - risk_flags: oracle emission order
// - relevancy: present only when a job description was supplied
// - oracle_overall_score: the oracle's own declared overall, used as-is on the
//   no-job-description path
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClaimsBundle {
    pub candidate_name: String,
    pub candidate_role: String,
    pub skills: Vec<SkillClaim>,
    pub risk_flags: Vec<String>,
    pub experience_items: Vec<ExperienceItem>,
    pub certifications: Vec<Certification>,
    pub education: Vec<EducationItem>,
    pub links: Vec<ResumeLink>,
    pub ats_breakdown: AtsBreakdown,
    pub credibility_breakdown: CredibilityBreakdown,
    pub timeline_consistency: TimelineConsistency,
    pub relevancy: Option<RelevancyClaims>,
    pub oracle_overall_score: u8,
    pub improvement_suggestions: Vec<String>,
    pub strength_summary: Option<String>,
    pub missing_evidence: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
