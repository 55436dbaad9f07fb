// The resume-analysis prompt. The evaluator depends on the exact 5-key reply
// shape below; downstream verdict branching parses the `recommendation` text.

/// Analysis prompt template. Replace `{resume_text}`, `{job_description}`,
/// and `{candidate_email}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"You are an expert HR assistant. Analyze the resume against the job description and provide:
1. An ATS match score as a percentage
2. List of key qualifications matching the job requirements
3. List of missing qualifications
4. Final recommendation (qualified / not qualified) with reasoning

Resume Text:
{resume_text}

Job Description:
{job_description}

Candidate Email: {candidate_email}

Format your response as a valid JSON with the following structure:
{
    "ats_score": number,
    "matching_qualifications": [string],
    "missing_qualifications": [string],
    "recommendation": string,
    "reasoning": string
}

Ensure the entire response is ONLY a valid parseable JSON format.
"#;
