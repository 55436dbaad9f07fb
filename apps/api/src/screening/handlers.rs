//! HTTP handlers for resume submission and session inspection.
//!
//! `handle_analyze` drives the whole pipeline: multipart form → text
//! extraction → evaluation → (if qualified) assessment generation → one
//! session commit. Soft failures (unreadable PDF, missing API key) surface
//! in the response's `warnings` instead of failing the request.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::assessment::Assessment;
use crate::errors::AppError;
use crate::extract;
use crate::screening::{EvaluationRequest, EvaluationResult};
use crate::session::{CandidateProfile, SessionPhase};
use crate::state::AppState;

const MISSING_FIELDS_MESSAGE: &str =
    "Please upload a resume and provide both job description and candidate email.";

const MISSING_API_KEY_WARNING: &str =
    "Groq API key not found in environment variables. Please check your .env file.";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub phase: SessionPhase,
    pub evaluation: Option<EvaluationResult>,
    pub assessment: Option<Assessment>,
    pub candidate: CandidateProfile,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub phase: SessionPhase,
    pub evaluation: Option<EvaluationResult>,
    pub assessment: Option<Assessment>,
    pub candidate: Option<CandidateProfile>,
    pub dispatched: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart form
// ────────────────────────────────────────────────────────────────────────────

struct AnalyzeForm {
    resume: Bytes,
    job_description: String,
    candidate_email: String,
    candidate_name: String,
    job_title: String,
}

impl AnalyzeForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut resume: Option<Bytes> = None;
        let mut job_description = String::new();
        let mut candidate_email = String::new();
        let mut candidate_name = String::new();
        let mut job_title = String::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("invalid multipart form: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "resume" => {
                    let data = field.bytes().await.map_err(|e| {
                        AppError::Validation(format!("could not read resume upload: {e}"))
                    })?;
                    resume = Some(data);
                }
                "job_description" => job_description = read_text(field, "job_description").await?,
                "candidate_email" => candidate_email = read_text(field, "candidate_email").await?,
                "candidate_name" => candidate_name = read_text(field, "candidate_name").await?,
                "job_title" => job_title = read_text(field, "job_title").await?,
                _ => {}
            }
        }

        let resume = resume.ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?;
        if job_description.is_empty() || candidate_email.is_empty() {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        Ok(AnalyzeForm {
            resume,
            job_description,
            candidate_email,
            candidate_name,
            job_title,
        })
    }
}

async fn read_text(field: Field<'_>, name: &str) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("could not read {name}: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screening/analyze
///
/// Replaces the session with this submission's results. The session is
/// written once, after every external call has completed.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = AnalyzeForm::from_multipart(multipart).await?;
    let mut warnings = Vec::new();

    let resume_text = match extract::resume_text(&form.resume) {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume text extraction failed: {e}");
            warnings.push(format!("Error extracting text from PDF: {e}"));
            String::new()
        }
    };

    let candidate = CandidateProfile {
        name: form.candidate_name,
        email: form.candidate_email.clone(),
        job_title: form.job_title,
    };

    let (evaluation, generated) = match &state.screener {
        Some(screener) => {
            let request = EvaluationRequest {
                resume_text,
                job_description: form.job_description.clone(),
                candidate_email: form.candidate_email,
            };
            let evaluation = screener.evaluate(&request).await;
            let generated = if evaluation.verdict.is_qualified() {
                Some(screener.generate_assessment(&form.job_description).await)
            } else {
                None
            };
            (Some(evaluation), generated)
        }
        None => {
            warn!("{}", MISSING_API_KEY_WARNING);
            warnings.push(MISSING_API_KEY_WARNING.to_string());
            (None, None)
        }
    };

    let phase = {
        let mut session = state.session.write().await;
        session.replace(candidate.clone(), evaluation.clone(), generated.clone());
        session.phase()
    };
    info!("Session replaced for {}: phase={:?}", candidate.email, phase);

    Ok(Json(AnalyzeResponse {
        phase,
        evaluation,
        assessment: generated,
        candidate,
        warnings,
    }))
}

/// GET /api/v1/screening/session — read-only view of the current session.
pub async fn handle_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.read().await;
    Json(SessionView {
        phase: session.phase(),
        evaluation: session.evaluation.clone(),
        assessment: session.assessment.clone(),
        candidate: session.candidate.clone(),
        dispatched: session.dispatched,
    })
}
