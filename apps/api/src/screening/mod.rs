//! Resume Screening — scores a resume against a job description via the LLM
//! and normalizes the model's free-text recommendation into a closed verdict.
//!
//! Flow: build prompt → single model call (temperature 0.1) → two-stage JSON
//! decode → verdict normalization. Every failure path degrades into an
//! Error-verdict result; this module never propagates an error to callers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assessment::{self, Assessment};
use crate::llm::LlmClient;
use crate::screening::prompts::ANALYZE_PROMPT_TEMPLATE;

pub mod handlers;
pub mod prompts;

/// Near-deterministic generation for scoring: the same resume/JD pair should
/// produce a stable verdict.
const TEMPERATURE: f32 = 0.1;

/// Placeholder inserted into `missing_qualifications` on a degraded result.
const ERROR_MISSING_MARKER: &str = "Error processing resume";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One submission's analysis inputs. Transient — built per submission,
/// never persisted.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub resume_text: String,
    pub job_description: String,
    pub candidate_email: String,
}

/// The model-facing reply shape. Every field is defaulted: models drop keys
/// under pressure, and a partial reply is still worth rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReply {
    #[serde(default)]
    pub ats_score: f64,
    #[serde(default)]
    pub matching_qualifications: Vec<String>,
    #[serde(default)]
    pub missing_qualifications: Vec<String>,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub reasoning: String,
}

/// Normalized hiring verdict. Derived from the model's free-text
/// recommendation; downstream branching (assessment generation, email
/// template choice) depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Qualified,
    NotQualified,
    Error,
}

impl Verdict {
    /// The exact normalization rule: the recommendation classifies as
    /// Qualified iff it case-insensitively contains "qualified" and does not
    /// contain "not". Brittle by construction — the rule is contractual, and
    /// tests pin the substring behavior rather than "fixing" it.
    pub fn from_recommendation(recommendation: &str) -> Verdict {
        let lowered = recommendation.to_lowercase();
        if lowered.contains("qualified") && !lowered.contains("not") {
            Verdict::Qualified
        } else {
            Verdict::NotQualified
        }
    }

    pub fn is_qualified(self) -> bool {
        self == Verdict::Qualified
    }
}

/// Validated analysis outcome held in the session and shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// ATS match percentage, clamped to 0–100.
    pub match_score: u8,
    pub matching_qualifications: Vec<String>,
    pub missing_qualifications: Vec<String>,
    pub verdict: Verdict,
    /// Raw recommendation text the verdict was derived from.
    pub recommendation: String,
    pub reasoning: String,
}

impl EvaluationResult {
    /// Normalizes a parsed reply: score rounded and clamped into 0–100,
    /// verdict derived from the recommendation text.
    fn from_reply(reply: ScreeningReply) -> Self {
        let match_score = reply.ats_score.round().clamp(0.0, 100.0) as u8;
        let verdict = Verdict::from_recommendation(&reply.recommendation);
        EvaluationResult {
            match_score,
            matching_qualifications: reply.matching_qualifications,
            missing_qualifications: reply.missing_qualifications,
            verdict,
            recommendation: reply.recommendation,
            reasoning: reply.reasoning,
        }
    }

    /// Terminal degraded result for any evaluation failure. Not re-raised —
    /// the operator sees it inline and can resubmit.
    fn failed(detail: &str) -> Self {
        EvaluationResult {
            match_score: 0,
            matching_qualifications: Vec::new(),
            missing_qualifications: vec![ERROR_MISSING_MARKER.to_string()],
            verdict: Verdict::Error,
            recommendation: "Error".to_string(),
            reasoning: format!("An error occurred: {detail}"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Scores the resume against the job description.
///
/// Single one-shot model call; no retry on transient failure. Never returns
/// an error: any failure (HTTP, API, unparseable reply) becomes a degraded
/// result with `verdict = Error` and `match_score = 0`.
pub async fn evaluate(llm: &LlmClient, request: &EvaluationRequest) -> EvaluationResult {
    let prompt = build_analyze_prompt(request);

    match llm.call_json::<ScreeningReply>(&prompt, TEMPERATURE).await {
        Ok(reply) => {
            let result = EvaluationResult::from_reply(reply);
            info!(
                "Resume analyzed: score={}, verdict={:?}",
                result.match_score, result.verdict
            );
            result
        }
        Err(e) => {
            warn!("Resume analysis failed: {e}");
            EvaluationResult::failed(&e.to_string())
        }
    }
}

fn build_analyze_prompt(request: &EvaluationRequest) -> String {
    ANALYZE_PROMPT_TEMPLATE
        .replace("{resume_text}", &request.resume_text)
        .replace("{job_description}", &request.job_description)
        .replace("{candidate_email}", &request.candidate_email)
}

// ────────────────────────────────────────────────────────────────────────────
// Screener — pluggable analysis backend
// ────────────────────────────────────────────────────────────────────────────

/// The two model-backed analysis operations behind one seam, so the submit
/// pipeline's verdict gating can be exercised without a live model.
///
/// Carried in `AppState` as `Option<Arc<dyn Screener>>` — `None` when no API
/// key was configured at startup.
#[async_trait]
pub trait Screener: Send + Sync {
    /// Scores a resume against a job description. Never fails; any failure
    /// yields a degraded result with `verdict = Error`.
    async fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResult;

    /// Builds the screening test for a qualified candidate. Empty on failure.
    async fn generate_assessment(&self, job_description: &str) -> Assessment;
}

/// Groq-backed screener used in production.
pub struct GroqScreener {
    llm: LlmClient,
}

impl GroqScreener {
    pub fn new(llm: LlmClient) -> Self {
        GroqScreener { llm }
    }
}

#[async_trait]
impl Screener for GroqScreener {
    async fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResult {
        evaluate(&self.llm, request).await
    }

    async fn generate_assessment(&self, job_description: &str) -> Assessment {
        assessment::generate(&self.llm, job_description).await
    }
}

#[cfg(test)]
pub(crate) mod stubs {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{EvaluationRequest, EvaluationResult, Screener};
    use crate::assessment::Assessment;

    /// Replays a fixed evaluation and records every screening-test
    /// generation call.
    pub struct ScriptedScreener {
        pub evaluation: EvaluationResult,
        pub assessment: Assessment,
        pub assessment_calls: Mutex<Vec<String>>,
    }

    impl ScriptedScreener {
        pub fn new(evaluation: EvaluationResult, assessment: Assessment) -> Self {
            ScriptedScreener {
                evaluation,
                assessment,
                assessment_calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Screener for ScriptedScreener {
        async fn evaluate(&self, _request: &EvaluationRequest) -> EvaluationResult {
            self.evaluation.clone()
        }

        async fn generate_assessment(&self, job_description: &str) -> Assessment {
            self.assessment_calls
                .lock()
                .unwrap()
                .push(job_description.to_string());
            self.assessment.clone()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
