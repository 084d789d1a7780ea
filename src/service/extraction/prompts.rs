//! Prompts for resume evidence extraction

use crate::model::bundle::AnalysisRequest;

/// System prompt for resume evidence extraction
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert resume analyzer for an HR platform called VerifyHire. Your task is to extract and verify skill claims from resume text, producing evidence-weighted trust data.

## Critical Rules

1. **Every skill claim must be tied to evidence.**
   - Assess authenticity from supporting evidence in the resume (projects, experience, certifications, links).
   - Assign a score 0-100 based on evidence strength, never on how impressive the skill sounds.
   - A skill listed with no supporting project, role, or certification is "unverified".

2. **Confidence levels**
   - "verified": strong, concrete evidence (named projects, certifications, linked repositories)
   - "partially_verified": some evidence, but incomplete or indirect
   - "unverified": claimed with no supporting evidence

3. **Flag inconsistencies, do not invent them.**
   - Risk flags are for contradictions actually present in the text: skills claimed without project evidence, timeline gaps, role/seniority mismatches.
   - Report experience timeline consistency as: consistent | minor_gaps | inconsistent.

4. **ATS breakdown**
   - Score formatting, keyword usage, and section structure each 0-100.
   - List the sections detected and the standard sections missing (e.g. summary, experience, education, skills, contact).

5. **Credibility breakdown**
   - evidence_score 0-100 reflects overall evidence strength across the resume.
   - Count certifications and projects by whether they carry verifiable references.

6. **Job description match (only when a job description is provided)**
   - relevancy_score 0-100 for fit against the job description.
   - List matched skills, missing skills, and matched keywords.
   - Omit all relevancy fields when no job description is provided.

## Output Requirements

- Extract the candidate's full name and primary role verbatim from the resume.
- Provide an overall trust score 0-100.
- Be thorough but fair. Prefer fewer, well-evidenced skill claims over exhaustive weak ones.
"#;

/// Build the analysis prompt from a request
pub fn build_analysis_prompt(request: &AnalysisRequest) -> String {
    let mut prompt = format!(
        r#"Analyze this resume text and extract structured verification data.

## Resume Text

{}
"#,
        request.resume_text
    );

    if let Some(jd) = request
        .job_description
        .as_deref()
        .filter(|jd| !jd.trim().is_empty())
    {
        prompt.push_str(&format!(
            r#"
## Job Description

{}
"#,
            jd
        ));

        if let Some(role) = request.role_title.as_deref() {
            prompt.push_str(&format!("\nTarget role: {}\n", role));
        }
        if let Some(range) = request.experience_range.as_deref() {
            prompt.push_str(&format!("Expected experience range: {}\n", range));
        }

        prompt.push_str(
            "\nInclude relevancy_score, matched_skills, missing_skills, and matched_keywords against this job description.\n",
        );
    } else {
        prompt.push_str(
            "\nNo job description was provided. Omit relevancy_score, matched_skills, missing_skills, and matched_keywords.\n",
        );
    }

    prompt
}
