use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Complete resume analysis as returned by the extraction oracle
///
/// Fields the oracle contract requires are still modeled as `Option` so that
/// an absent field is detected by our own validation (`MalformedAnalysis`)
/// instead of failing deserialization of the whole payload. Enum-valued
/// fields arrive as free strings and are coerced to the conservative variant
/// when unrecognized.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedAnalysis {
    #[schemars(description = "Full name of the candidate")]
    pub candidate_name: Option<String>,

    #[schemars(description = "Primary job title/role")]
    pub candidate_role: Option<String>,

    #[schemars(description = "Overall trust score 0-100")]
    pub overall_score: Option<i64>,

    pub skills: Option<Vec<ExtractedSkill>>,

    #[schemars(description = "Risk flags or inconsistencies found, in emission order")]
    pub risk_flags: Option<Vec<String>>,

    pub experience_items: Option<Vec<ExtractedExperienceItem>>,

    pub certifications: Option<Vec<ExtractedCertification>>,

    pub education: Option<Vec<ExtractedEducationItem>>,

    pub links: Option<Vec<ExtractedLink>>,

    pub ats_breakdown: Option<ExtractedAtsBreakdown>,

    pub credibility_breakdown: Option<ExtractedCredibilityBreakdown>,

    #[schemars(description = "One of: consistent | minor_gaps | inconsistent")]
    pub timeline_consistency: Option<String>,

    #[schemars(
        description = "Relevancy against the job description, 0-100. Only when a job description was supplied"
    )]
    pub relevancy_score: Option<i64>,

    pub matched_skills: Option<Vec<String>>,

    pub missing_skills: Option<Vec<String>>,

    pub matched_keywords: Option<Vec<String>>,

    pub improvement_suggestions: Option<Vec<String>>,

    #[schemars(description = "Short summary of the candidate's strongest verified evidence")]
    pub strength_summary: Option<String>,

    #[schemars(description = "Evidence the resume claims but does not substantiate")]
    pub missing_evidence: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedSkill {
    pub skill_name: Option<String>,

    #[schemars(
        description = "One of: programming | framework | database | cloud | devops | soft_skill | design | general"
    )]
    pub category: Option<String>,

    #[schemars(description = "Authenticity score 0-100 based on evidence strength")]
    pub score: Option<i64>,

    #[schemars(description = "One of: verified | partially_verified | unverified")]
    pub confidence: Option<String>,

    #[schemars(description = "Brief evidence explanation")]
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedExperienceItem {
    pub company: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedCertification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedEducationItem {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedLink {
    #[serde(rename = "type")]
    #[schemars(description = "Link kind, e.g. github | linkedin | portfolio")]
    pub link_type: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedAtsBreakdown {
    #[schemars(description = "Formatting score 0-100")]
    pub formatting_score: Option<i64>,
    #[schemars(description = "Keyword score 0-100")]
    pub keyword_score: Option<i64>,
    #[schemars(description = "Structure score 0-100")]
    pub structure_score: Option<i64>,
    pub contact_info_present: Option<bool>,
    pub sections_detected: Option<Vec<String>>,
    pub missing_sections: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedCredibilityBreakdown {
    #[schemars(description = "Evidence strength score 0-100")]
    pub evidence_score: Option<i64>,
    pub github_linked: Option<bool>,
    pub certifications_verified: Option<i64>,
    pub certifications_unverified: Option<i64>,
    pub projects_with_links: Option<i64>,
    pub projects_without_links: Option<i64>,
}
