//! HTTP handlers for notification preview and dispatch.
//!
//! Template selection mirrors the results view: a qualified verdict with a
//! stored assessment gets the acceptance letter, everything else (including
//! a degraded Error evaluation) gets the rejection letter. The optional
//! `reason` input overrides the rejection paragraph; it defaults to the
//! evaluation's reasoning text.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::assessment::Assessment;
use crate::email::compose;
use crate::errors::AppError;
use crate::screening::EvaluationResult;
use crate::session::CandidateProfile;
use crate::state::AppState;

const ANALYZE_FIRST_MESSAGE: &str = "Please analyze a resume first before sending emails.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    Qualified,
    Rejection,
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub kind: EmailKind,
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub sent: bool,
    pub detail: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Template selection
// ────────────────────────────────────────────────────────────────────────────

struct ComposedEmail {
    kind: EmailKind,
    recipient: String,
    subject: String,
    html_body: String,
}

fn compose_for(
    candidate: &CandidateProfile,
    evaluation: &EvaluationResult,
    assessment: Option<&Assessment>,
    reason_override: Option<&str>,
) -> ComposedEmail {
    match assessment {
        Some(assessment) if evaluation.verdict.is_qualified() => ComposedEmail {
            kind: EmailKind::Qualified,
            recipient: candidate.email.clone(),
            subject: compose::qualified_subject(&candidate.job_title),
            html_body: compose::compose_qualified(
                &candidate.name,
                &candidate.job_title,
                assessment,
            ),
        },
        _ => {
            let reason = reason_override
                .map(str::to_string)
                .unwrap_or_else(|| evaluation.reasoning.clone());
            ComposedEmail {
                kind: EmailKind::Rejection,
                recipient: candidate.email.clone(),
                subject: compose::rejection_subject(&candidate.job_title),
                html_body: compose::compose_rejection(
                    &candidate.name,
                    &candidate.job_title,
                    &reason,
                ),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/email/preview — composes the outgoing message without
/// touching the transport or the session.
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Result<Json<PreviewResponse>, AppError> {
    let session = state.session.read().await;
    let (candidate, evaluation) = match (&session.candidate, &session.evaluation) {
        (Some(candidate), Some(evaluation)) => (candidate, evaluation),
        _ => return Err(AppError::NotFound(ANALYZE_FIRST_MESSAGE.to_string())),
    };

    let composed = compose_for(
        candidate,
        evaluation,
        session.assessment.as_ref(),
        params.reason.as_deref(),
    );
    Ok(Json(PreviewResponse {
        kind: composed.kind,
        recipient: composed.recipient,
        subject: composed.subject,
        html_body: composed.html_body,
    }))
}

/// POST /api/v1/email/send — composes and dispatches one message.
///
/// Delivery failure is an outcome, not an HTTP error: the response reports
/// `sent: false` with the transport detail and the session is left exactly
/// as it was. Success sets `dispatched`; re-sending stays possible.
pub async fn handle_send(
    State(state): State<AppState>,
    Json(request): Json<SendRequest>,
) -> Result<Json<SendResponse>, AppError> {
    // Snapshot under the read lock; the transport call runs lock-free.
    let composed = {
        let session = state.session.read().await;
        let (candidate, evaluation) = match (&session.candidate, &session.evaluation) {
            (Some(candidate), Some(evaluation)) => (candidate, evaluation),
            _ => return Err(AppError::NotFound(ANALYZE_FIRST_MESSAGE.to_string())),
        };
        compose_for(
            candidate,
            evaluation,
            session.assessment.as_ref(),
            request.reason.as_deref(),
        )
    };

    match state
        .mailer
        .send(&composed.recipient, &composed.subject, &composed.html_body)
        .await
    {
        Ok(()) => {
            // An analyze landing while the transport ran replaces the
            // session; only the submission this message was composed for is
            // marked dispatched.
            {
                let mut session = state.session.write().await;
                let same_submission = session
                    .candidate
                    .as_ref()
                    .map(|candidate| candidate.email == composed.recipient)
                    .unwrap_or(false);
                if same_submission {
                    session.dispatched = true;
                }
            }
            info!("Email sent to {}", composed.recipient);
            Ok(Json(SendResponse {
                sent: true,
                detail: format!("Email sent to {}", composed.recipient),
            }))
        }
        Err(e) => {
            error!("Email dispatch failed: {e}");
            Ok(Json(SendResponse {
                sent: false,
                detail: format!("Failed to send email: {e}"),
            }))
        }
    }
}
