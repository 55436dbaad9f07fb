//! Screening-test generation — multiple-choice questions derived from the
//! job description alone, produced only for qualified candidates.
//!
//! Failures are soft: an unreachable model or a mangled reply yields an empty
//! assessment, and the pipeline carries on with the evaluation it already has.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assessment::prompts::MCQ_PROMPT_TEMPLATE;
use crate::llm::LlmClient;

pub mod prompts;

/// Higher temperature than scoring: question variety matters more than
/// run-to-run stability here.
const TEMPERATURE: f32 = 0.4;

/// A generated screening test. `questions` may be empty — generation
/// failures degrade to an assessment with no questions rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default)]
    pub questions: Vec<AssessmentQuestion>,
}

impl Assessment {
    pub fn empty() -> Self {
        Assessment {
            questions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One multiple-choice question. All fields defaulted: a reply that drops
/// `explanation` (or anything else) still yields a usable question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer_index: usize,
    #[serde(default)]
    pub explanation: String,
}

/// Generates a screening test from the job description.
///
/// One-shot call, no retry. Returns an empty assessment on any failure —
/// callers treat that the same as "model produced zero questions".
pub async fn generate(llm: &LlmClient, job_description: &str) -> Assessment {
    let prompt = MCQ_PROMPT_TEMPLATE.replace("{job_description}", job_description);

    match llm.call_json::<Assessment>(&prompt, TEMPERATURE).await {
        Ok(assessment) => {
            info!(
                "Screening test generated: {} questions",
                assessment.questions.len()
            );
            assessment
        }
        Err(e) => {
            warn!("Screening test generation failed: {e}");
            Assessment::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::decode;

    #[test]
    fn test_parses_full_reply() {
        let raw = r#"{
            "questions": [
                {
                    "question": "Which AWS service runs containers?",
                    "options": ["ECS", "S3", "SQS", "IAM"],
                    "correct_answer_index": 0,
                    "explanation": "ECS is the container orchestration service."
                },
                {
                    "question": "What does GIL stand for?",
                    "options": ["Global Interpreter Lock", "General IO Layer", "Graph Index List", "Guarded Inner Loop"],
                    "correct_answer_index": 0,
                    "explanation": "CPython serializes bytecode execution with the GIL."
                }
            ]
        }"#;
        let assessment: Assessment = serde_json::from_str(raw).unwrap();
        assert_eq!(assessment.questions.len(), 2);
        assert_eq!(assessment.questions[0].options.len(), 4);
        assert_eq!(assessment.questions[1].correct_answer_index, 0);
        assert!(!assessment.is_empty());
    }

    /// Fewer than five questions is not an error; whatever the model
    /// produced is kept as-is.
    #[test]
    fn test_accepts_short_question_list() {
        let raw = r#"{"questions": [{"question": "Q1", "options": ["A", "B"], "correct_answer_index": 1, "explanation": "B is right"}]}"#;
        let assessment: Assessment = serde_json::from_str(raw).unwrap();
        assert_eq!(assessment.questions.len(), 1);
        assert_eq!(assessment.questions[0].correct_answer_index, 1);
    }

    #[test]
    fn test_missing_fields_default() {
        let raw = r#"{"questions": [{"question": "Q1", "options": ["A", "B", "C", "D"]}]}"#;
        let assessment: Assessment = serde_json::from_str(raw).unwrap();
        let q = &assessment.questions[0];
        assert_eq!(q.correct_answer_index, 0);
        assert!(q.explanation.is_empty());
    }

    #[test]
    fn test_missing_questions_key_is_empty_assessment() {
        let assessment: Assessment = serde_json::from_str("{}").unwrap();
        assert!(assessment.is_empty());
    }

    #[test]
    fn test_recovers_from_prose_wrapped_reply() {
        let wrapped = r#"Sure! Here are the questions:
{"questions": [{"question": "Q1", "options": ["A", "B", "C", "D"], "correct_answer_index": 2, "explanation": "C"}]}
Let me know if you need more."#;
        let assessment: Assessment = decode::json_object(wrapped).unwrap();
        assert_eq!(assessment.questions.len(), 1);
        assert_eq!(assessment.questions[0].correct_answer_index, 2);
    }

    #[test]
    fn test_prompt_fills_job_description() {
        let prompt = MCQ_PROMPT_TEMPLATE.replace("{job_description}", "Senior Rust Engineer");
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(!prompt.contains("{job_description}"));
        assert!(prompt.contains("correct_answer_index"));
    }
}
