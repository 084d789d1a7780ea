//! Conversion from oracle wire types to the domain claims bundle
//!
//! Numeric scores are clamped, unrecognized enum strings degrade to the most
//! conservative variant for their field, and skills keep oracle emission
//! order with duplicates intact. Required-field presence is checked by
//! validation before conversion runs.

use chrono::Utc;
use url::Url;

use crate::model::bundle::{
    AtsBreakdown, Certification, ClaimsBundle, CredibilityBreakdown, EducationItem,
    ExperienceItem, RelevancyClaims, ResumeLink, SkillCategory, SkillClaim, SkillConfidence,
    TimelineConsistency,
};
use crate::model::extracted::{
    ExtractedAnalysis, ExtractedAtsBreakdown, ExtractedCredibilityBreakdown, ExtractedSkill,
};
use crate::service::scoring::clamp_score;

/// Build a `ClaimsBundle` from a validated extracted analysis
pub fn to_claims_bundle(extracted: ExtractedAnalysis, job_description_supplied: bool) -> ClaimsBundle {
    let relevancy = if job_description_supplied {
        extracted.relevancy_score.map(|score| RelevancyClaims {
            score: clamp_score(score),
            matched_skills: extracted.matched_skills.clone().unwrap_or_default(),
            missing_skills: extracted.missing_skills.clone().unwrap_or_default(),
            matched_keywords: extracted.matched_keywords.clone().unwrap_or_default(),
        })
    } else {
        // Any unsolicited relevancy data is dropped on the no-JD path
        None
    };

    ClaimsBundle {
        candidate_name: extracted.candidate_name.unwrap_or_default(),
        candidate_role: extracted.candidate_role.unwrap_or_default(),
        skills: extracted
            .skills
            .unwrap_or_default()
            .into_iter()
            .map(convert_skill)
            .collect(),
        risk_flags: extracted.risk_flags.unwrap_or_default(),
        experience_items: extracted
            .experience_items
            .unwrap_or_default()
            .into_iter()
            .map(|item| ExperienceItem {
                company: item.company.unwrap_or_default(),
                role: item.role.unwrap_or_default(),
                duration: item.duration.unwrap_or_default(),
                verified: item.verified.unwrap_or(false),
            })
            .collect(),
        certifications: extracted
            .certifications
            .unwrap_or_default()
            .into_iter()
            .map(|cert| Certification {
                name: cert.name.unwrap_or_default(),
                issuer: cert.issuer.unwrap_or_default(),
                verified: cert.verified.unwrap_or(false),
            })
            .collect(),
        education: extracted
            .education
            .unwrap_or_default()
            .into_iter()
            .map(|edu| EducationItem {
                institution: edu.institution.unwrap_or_default(),
                degree: edu.degree.unwrap_or_default(),
                year: edu.year.unwrap_or_default(),
            })
            .collect(),
        links: extracted
            .links
            .unwrap_or_default()
            .into_iter()
            .filter_map(convert_link)
            .collect(),
        ats_breakdown: convert_ats_breakdown(extracted.ats_breakdown.unwrap_or_else(|| {
            ExtractedAtsBreakdown {
                formatting_score: None,
                keyword_score: None,
                structure_score: None,
                contact_info_present: None,
                sections_detected: None,
                missing_sections: None,
            }
        })),
        credibility_breakdown: convert_credibility_breakdown(
            extracted
                .credibility_breakdown
                .unwrap_or_else(|| ExtractedCredibilityBreakdown {
                    evidence_score: None,
                    github_linked: None,
                    certifications_verified: None,
                    certifications_unverified: None,
                    projects_with_links: None,
                    projects_without_links: None,
                }),
        ),
        timeline_consistency: convert_timeline_consistency(
            extracted.timeline_consistency.as_deref(),
        ),
        relevancy,
        oracle_overall_score: clamp_score(extracted.overall_score.unwrap_or(0)),
        improvement_suggestions: extracted.improvement_suggestions.unwrap_or_default(),
        strength_summary: extracted.strength_summary,
        missing_evidence: extracted.missing_evidence.unwrap_or_default(),
        generated_at: Utc::now(),
    }
}

fn convert_skill(skill: ExtractedSkill) -> SkillClaim {
    SkillClaim {
        name: skill.skill_name.unwrap_or_default(),
        category: convert_category(skill.category.as_deref()),
        score: clamp_score(skill.score.unwrap_or(0)),
        confidence: convert_confidence(skill.confidence.as_deref()),
        evidence: skill.evidence.unwrap_or_default(),
    }
}

/// Unrecognized confidence degrades to unverified, the lowest tier
fn convert_confidence(confidence: Option<&str>) -> SkillConfidence {
    match confidence {
        Some("verified") => SkillConfidence::Verified,
        Some("partially_verified") => SkillConfidence::PartiallyVerified,
        Some("unverified") => SkillConfidence::Unverified,
        other => {
            if let Some(value) = other {
                tracing::warn!(
                    value = %value,
                    "Unrecognized skill confidence, degrading to unverified"
                );
            }
            SkillConfidence::Unverified
        }
    }
}

/// Unrecognized category degrades to general
fn convert_category(category: Option<&str>) -> SkillCategory {
    match category {
        Some("programming") => SkillCategory::Programming,
        Some("framework") => SkillCategory::Framework,
        Some("database") => SkillCategory::Database,
        Some("cloud") => SkillCategory::Cloud,
        Some("devops") => SkillCategory::Devops,
        Some("soft_skill") => SkillCategory::SoftSkill,
        Some("design") => SkillCategory::Design,
        Some("general") => SkillCategory::General,
        other => {
            if let Some(value) = other {
                tracing::warn!(
                    value = %value,
                    "Unrecognized skill category, degrading to general"
                );
            }
            SkillCategory::General
        }
    }
}

/// Unrecognized timeline consistency degrades to inconsistent
fn convert_timeline_consistency(value: Option<&str>) -> TimelineConsistency {
    match value {
        Some("consistent") => TimelineConsistency::Consistent,
        Some("minor_gaps") => TimelineConsistency::MinorGaps,
        Some("inconsistent") => TimelineConsistency::Inconsistent,
        other => {
            if let Some(value) = other {
                tracing::warn!(
                    value = %value,
                    "Unrecognized timeline consistency, degrading to inconsistent"
                );
            }
            TimelineConsistency::Inconsistent
        }
    }
}

fn convert_ats_breakdown(breakdown: ExtractedAtsBreakdown) -> AtsBreakdown {
    AtsBreakdown {
        formatting_score: clamp_score(breakdown.formatting_score.unwrap_or(0)),
        keyword_score: clamp_score(breakdown.keyword_score.unwrap_or(0)),
        structure_score: clamp_score(breakdown.structure_score.unwrap_or(0)),
        contact_info_present: breakdown.contact_info_present.unwrap_or(false),
        sections_detected: breakdown.sections_detected.unwrap_or_default(),
        missing_sections: breakdown.missing_sections.unwrap_or_default(),
    }
}

fn convert_credibility_breakdown(breakdown: ExtractedCredibilityBreakdown) -> CredibilityBreakdown {
    CredibilityBreakdown {
        evidence_score: clamp_score(breakdown.evidence_score.unwrap_or(0)),
        github_linked: breakdown.github_linked.unwrap_or(false),
        certifications_verified: clamp_count(breakdown.certifications_verified),
        certifications_unverified: clamp_count(breakdown.certifications_unverified),
        projects_with_links: clamp_count(breakdown.projects_with_links),
        projects_without_links: clamp_count(breakdown.projects_without_links),
    }
}

/// Counts are non-negative; a negative count from the oracle is treated as zero
fn clamp_count(raw: Option<i64>) -> u32 {
    raw.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32
}

fn convert_link(link: crate::model::extracted::ExtractedLink) -> Option<ResumeLink> {
    let url = link.url?;
    match Url::parse(&url) {
        Ok(parsed) => Some(ResumeLink {
            link_type: link.link_type.unwrap_or_else(|| "other".to_string()),
            url: parsed,
        }),
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "Dropping unparseable resume link");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extracted::ExtractedLink;

    fn minimal_analysis() -> ExtractedAnalysis {
        ExtractedAnalysis {
            candidate_name: Some("James Wilson".to_string()),
            candidate_role: Some("Data Scientist".to_string()),
            overall_score: Some(70),
            skills: Some(vec![]),
            risk_flags: Some(vec![]),
            experience_items: Some(vec![]),
            certifications: Some(vec![]),
            education: None,
            links: None,
            ats_breakdown: Some(ExtractedAtsBreakdown {
                formatting_score: Some(60),
                keyword_score: Some(60),
                structure_score: Some(60),
                contact_info_present: Some(true),
                sections_detected: None,
                missing_sections: None,
            }),
            credibility_breakdown: Some(ExtractedCredibilityBreakdown {
                evidence_score: Some(65),
                github_linked: Some(true),
                certifications_verified: Some(0),
                certifications_unverified: Some(1),
                projects_with_links: Some(2),
                projects_without_links: Some(3),
            }),
            timeline_consistency: Some("minor_gaps".to_string()),
            relevancy_score: Some(72),
            matched_skills: Some(vec!["Python".to_string()]),
            missing_skills: Some(vec!["MLOps".to_string()]),
            matched_keywords: Some(vec!["model training".to_string()]),
            improvement_suggestions: None,
            strength_summary: None,
            missing_evidence: None,
        }
    }

    fn skill(name: &str, score: i64, confidence: &str, category: &str) -> ExtractedSkill {
        ExtractedSkill {
            skill_name: Some(name.to_string()),
            category: Some(category.to_string()),
            score: Some(score),
            confidence: Some(confidence.to_string()),
            evidence: Some("some evidence".to_string()),
        }
    }

    #[test]
    fn unrecognized_confidence_degrades_to_unverified() {
        let mut analysis = minimal_analysis();
        analysis.skills = Some(vec![skill("TensorFlow", 55, "maybe", "framework")]);

        let bundle = to_claims_bundle(analysis, true);

        assert_eq!(bundle.skills.len(), 1);
        assert_eq!(bundle.skills[0].confidence, SkillConfidence::Unverified);
        assert_eq!(bundle.skills[0].category, SkillCategory::Framework);
    }

    #[test]
    fn unrecognized_category_degrades_to_general() {
        let mut analysis = minimal_analysis();
        analysis.skills = Some(vec![skill("Blockchain", 40, "unverified", "web3")]);

        let bundle = to_claims_bundle(analysis, true);
        assert_eq!(bundle.skills[0].category, SkillCategory::General);
    }

    #[test]
    fn unrecognized_timeline_degrades_to_inconsistent() {
        let mut analysis = minimal_analysis();
        analysis.timeline_consistency = Some("mostly_fine".to_string());

        let bundle = to_claims_bundle(analysis, true);
        assert_eq!(
            bundle.timeline_consistency,
            TimelineConsistency::Inconsistent
        );
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let mut analysis = minimal_analysis();
        analysis.skills = Some(vec![
            skill("Python", 150, "verified", "programming"),
            skill("Excel", -20, "unverified", "general"),
        ]);
        analysis.ats_breakdown = Some(ExtractedAtsBreakdown {
            formatting_score: Some(150),
            keyword_score: Some(-20),
            structure_score: Some(50),
            contact_info_present: Some(true),
            sections_detected: None,
            missing_sections: None,
        });
        analysis.overall_score = Some(240);
        analysis.relevancy_score = Some(-5);

        let bundle = to_claims_bundle(analysis, true);

        assert_eq!(bundle.skills[0].score, 100);
        assert_eq!(bundle.skills[1].score, 0);
        assert_eq!(bundle.ats_breakdown.formatting_score, 100);
        assert_eq!(bundle.ats_breakdown.keyword_score, 0);
        assert_eq!(bundle.oracle_overall_score, 100);
        assert_eq!(bundle.relevancy.unwrap().score, 0);
    }

    #[test]
    fn duplicate_skills_are_preserved_in_order() {
        let mut analysis = minimal_analysis();
        analysis.skills = Some(vec![
            skill("SQL", 80, "verified", "database"),
            skill("Python", 85, "verified", "programming"),
            skill("SQL", 40, "unverified", "database"),
        ]);

        let bundle = to_claims_bundle(analysis, true);

        let names: Vec<&str> = bundle.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["SQL", "Python", "SQL"]);
    }

    #[test]
    fn relevancy_is_dropped_without_job_description() {
        let bundle = to_claims_bundle(minimal_analysis(), false);
        assert!(bundle.relevancy.is_none());
    }

    #[test]
    fn relevancy_carries_match_lists_with_job_description() {
        let bundle = to_claims_bundle(minimal_analysis(), true);

        let relevancy = bundle.relevancy.unwrap();
        assert_eq!(relevancy.score, 72);
        assert_eq!(relevancy.matched_skills, vec!["Python"]);
        assert_eq!(relevancy.missing_skills, vec!["MLOps"]);
    }

    #[test]
    fn negative_counts_are_treated_as_zero() {
        let mut analysis = minimal_analysis();
        analysis.credibility_breakdown = Some(ExtractedCredibilityBreakdown {
            evidence_score: Some(50),
            github_linked: Some(false),
            certifications_verified: Some(-3),
            certifications_unverified: None,
            projects_with_links: Some(2),
            projects_without_links: Some(-1),
        });

        let bundle = to_claims_bundle(analysis, false);
        assert_eq!(bundle.credibility_breakdown.certifications_verified, 0);
        assert_eq!(bundle.credibility_breakdown.projects_without_links, 0);
        assert_eq!(bundle.credibility_breakdown.projects_with_links, 2);
    }

    #[test]
    fn unparseable_links_are_dropped() {
        let mut analysis = minimal_analysis();
        analysis.links = Some(vec![
            ExtractedLink {
                link_type: Some("github".to_string()),
                url: Some("https://github.com/priya".to_string()),
            },
            ExtractedLink {
                link_type: Some("portfolio".to_string()),
                url: Some("not a url".to_string()),
            },
            ExtractedLink {
                link_type: None,
                url: None,
            },
        ]);

        let bundle = to_claims_bundle(analysis, false);
        assert_eq!(bundle.links.len(), 1);
        assert_eq!(bundle.links[0].link_type, "github");
    }
}
