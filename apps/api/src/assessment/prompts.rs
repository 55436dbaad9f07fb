//! Prompt template for screening-test generation.
//!
//! Placeholder is literal `{job_description}`, substituted with a plain
//! string replace. The JSON schema braces below are template text the model
//! echoes back, not placeholders.

pub const MCQ_PROMPT_TEMPLATE: &str = r#"You are an expert HR test creator. Based on the job description below, create 5 multiple-choice questions to assess candidates.
Each question should have 4 options with one correct answer marked.

Job Description:
{job_description}

Format your response as a valid JSON with the following structure:
{
    "questions": [
        {
            "question": "Question text",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct_answer_index": 0,
            "explanation": "Explanation of why this is the correct answer"
        }
    ]
}

Make sure to include an explanation field for each question that explains why the answer is correct.
Ensure the entire response is ONLY a valid parseable JSON format.
"#;
