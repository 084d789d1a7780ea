//! Validation logic for oracle-extracted analyses
//!
//! Defends the aggregator against a malformed or adversarial oracle response
//! before any score reaches a caller. Structural/identity absence fails
//! loudly; numeric out-of-range values and unrecognized enum strings are
//! handled downstream by clamping and conservative coercion.

use crate::model::extracted::ExtractedAnalysis;

/// Result of analysis validation
#[derive(Debug)]
pub struct AnalysisValidationResult {
    /// Whether the analysis satisfies the oracle contract
    pub is_valid: bool,
    /// Missing required fields that invalidate the analysis
    pub errors: Vec<String>,
    /// Quality issues that do not invalidate the analysis
    pub warnings: Vec<String>,
}

impl AnalysisValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate an extracted analysis against the oracle contract
///
/// Checks:
/// 1. Identity fields are present and non-empty (candidate name, role)
/// 2. Structural fields are present (skills, risk flags, experience items,
///    certifications, ATS and credibility breakdowns, timeline consistency,
///    overall score)
/// 3. A relevancy score is present when a job description was supplied
/// 4. Per-item quality issues are reported as warnings
pub fn validate_extracted_analysis(
    extracted: &ExtractedAnalysis,
    job_description_supplied: bool,
) -> AnalysisValidationResult {
    let mut result = AnalysisValidationResult::valid();

    check_identity(&mut result, "candidate_name", &extracted.candidate_name);
    check_identity(&mut result, "candidate_role", &extracted.candidate_role);

    if extracted.overall_score.is_none() {
        result.add_error("missing required field overall_score".to_string());
    }

    check_present(&mut result, "skills", extracted.skills.is_some());
    check_present(&mut result, "risk_flags", extracted.risk_flags.is_some());
    check_present(
        &mut result,
        "experience_items",
        extracted.experience_items.is_some(),
    );
    check_present(
        &mut result,
        "certifications",
        extracted.certifications.is_some(),
    );
    check_present(
        &mut result,
        "ats_breakdown",
        extracted.ats_breakdown.is_some(),
    );
    check_present(
        &mut result,
        "credibility_breakdown",
        extracted.credibility_breakdown.is_some(),
    );
    check_present(
        &mut result,
        "timeline_consistency",
        extracted.timeline_consistency.is_some(),
    );

    if job_description_supplied && extracted.relevancy_score.is_none() {
        result.add_error(
            "missing required field relevancy_score (job description was supplied)".to_string(),
        );
    }

    if !job_description_supplied && extracted.relevancy_score.is_some() {
        result.add_warning(
            "oracle returned a relevancy score without a job description; it will be ignored"
                .to_string(),
        );
    }

    if let Some(skills) = &extracted.skills {
        for (i, skill) in skills.iter().enumerate() {
            if skill
                .skill_name
                .as_deref()
                .is_none_or(|n| n.trim().is_empty())
            {
                result.add_warning(format!("skill {} has no name", i + 1));
            }
            if skill.evidence.as_deref().is_none_or(|e| e.trim().is_empty()) {
                result.add_warning(format!("skill {} has no evidence text", i + 1));
            }
        }
    }

    result
}

fn check_identity(result: &mut AnalysisValidationResult, field: &str, value: &Option<String>) {
    match value.as_deref() {
        None => result.add_error(format!("missing required field {}", field)),
        Some(v) if v.trim().is_empty() => {
            result.add_error(format!("required field {} is empty", field))
        }
        Some(_) => {}
    }
}

fn check_present(result: &mut AnalysisValidationResult, field: &str, present: bool) {
    if !present {
        result.add_error(format!("missing required field {}", field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extracted::{
        ExtractedAtsBreakdown, ExtractedCredibilityBreakdown, ExtractedSkill,
    };

    fn complete_analysis() -> ExtractedAnalysis {
        ExtractedAnalysis {
            candidate_name: Some("Priya Sharma".to_string()),
            candidate_role: Some("Senior Full-Stack Engineer".to_string()),
            overall_score: Some(88),
            skills: Some(vec![ExtractedSkill {
                skill_name: Some("React".to_string()),
                category: Some("framework".to_string()),
                score: Some(92),
                confidence: Some("verified".to_string()),
                evidence: Some("GitHub repos with 3 production React apps".to_string()),
            }]),
            risk_flags: Some(vec![]),
            experience_items: Some(vec![]),
            certifications: Some(vec![]),
            education: None,
            links: None,
            ats_breakdown: Some(ExtractedAtsBreakdown {
                formatting_score: Some(80),
                keyword_score: Some(70),
                structure_score: Some(90),
                contact_info_present: Some(true),
                sections_detected: Some(vec!["experience".to_string()]),
                missing_sections: Some(vec![]),
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
            relevancy_score: None,
            matched_skills: None,
            missing_skills: None,
            matched_keywords: None,
            improvement_suggestions: None,
            strength_summary: None,
            missing_evidence: None,
        }
    }

    #[test]
    fn complete_analysis_is_valid() {
        let result = validate_extracted_analysis(&complete_analysis(), false);
        assert!(result.is_valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn missing_candidate_name_is_an_error() {
        let mut analysis = complete_analysis();
        analysis.candidate_name = None;

        let result = validate_extracted_analysis(&analysis, false);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("candidate_name")));
    }

    #[test]
    fn empty_candidate_name_is_an_error() {
        let mut analysis = complete_analysis();
        analysis.candidate_name = Some("   ".to_string());

        let result = validate_extracted_analysis(&analysis, false);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("candidate_name")));
    }

    #[test]
    fn missing_relevancy_is_an_error_only_with_job_description() {
        let analysis = complete_analysis();

        let without_jd = validate_extracted_analysis(&analysis, false);
        assert!(without_jd.is_valid);

        let with_jd = validate_extracted_analysis(&analysis, true);
        assert!(!with_jd.is_valid);
        assert!(
            with_jd
                .errors
                .iter()
                .any(|e| e.contains("relevancy_score"))
        );
    }

    #[test]
    fn unsolicited_relevancy_is_only_a_warning() {
        let mut analysis = complete_analysis();
        analysis.relevancy_score = Some(75);

        let result = validate_extracted_analysis(&analysis, false);
        assert!(result.is_valid);
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn missing_breakdowns_are_errors() {
        let mut analysis = complete_analysis();
        analysis.ats_breakdown = None;
        analysis.credibility_breakdown = None;

        let result = validate_extracted_analysis(&analysis, false);
        assert!(!result.is_valid);
        assert_eq!(
            result
                .errors
                .iter()
                .filter(|e| e.contains("breakdown"))
                .count(),
            2
        );
    }

    #[test]
    fn nameless_skill_is_only_a_warning() {
        let mut analysis = complete_analysis();
        analysis.skills = Some(vec![ExtractedSkill {
            skill_name: None,
            category: Some("general".to_string()),
            score: Some(50),
            confidence: Some("unverified".to_string()),
            evidence: Some("listed without context".to_string()),
        }]);

        let result = validate_extracted_analysis(&analysis, false);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("no name")));
    }
}
