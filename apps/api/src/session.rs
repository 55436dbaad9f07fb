//! Single-session screening state.
//!
//! One candidate pipeline per process: submission replaces whatever was
//! there before. Handlers compute results into locals and commit them with
//! one write-lock acquisition, so readers never observe a half-updated
//! session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::assessment::Assessment;
use crate::screening::EvaluationResult;

pub type SharedSession = Arc<RwLock<SessionState>>;

/// Who the current submission is about. Name and title are operator-typed
/// and optional in the form; they default to empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub job_title: String,
}

/// Everything the pipeline has produced for the current submission.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub candidate: Option<CandidateProfile>,
    pub evaluation: Option<EvaluationResult>,
    pub assessment: Option<Assessment>,
    /// Set when a notification email went out for this submission.
    /// Informational only — re-sending stays possible.
    pub dispatched: bool,
}

/// Orchestration phase, derived from what the session holds rather than
/// tracked separately (it cannot drift from the data that way).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    AwaitingSubmission,
    Evaluated,
    AssessmentReady,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.assessment.is_some() {
            SessionPhase::AssessmentReady
        } else if self.evaluation.is_some() {
            SessionPhase::Evaluated
        } else {
            SessionPhase::AwaitingSubmission
        }
    }

    /// Installs a fresh submission's results, discarding the prior session.
    /// `dispatched` resets: the flag belongs to the submission it was sent
    /// for.
    pub fn replace(
        &mut self,
        candidate: CandidateProfile,
        evaluation: Option<EvaluationResult>,
        assessment: Option<Assessment>,
    ) {
        self.candidate = Some(candidate);
        self.evaluation = evaluation;
        self.assessment = assessment;
        self.dispatched = false;
    }
}
