use std::sync::Arc;

use crate::config::Config;
use crate::email::mailer::Mailer;
use crate::screening::Screener;
use crate::session::SharedSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analysis backend. Production: GroqScreener. `None` when
    /// GROQ_API_KEY is absent — analysis short-circuits with a warning
    /// instead of failing mid-call. Tests swap in scripted stubs.
    pub screener: Option<Arc<dyn Screener>>,
    /// Pluggable mail transport. Production: SmtpMailer. Tests swap in stubs.
    pub mailer: Arc<dyn Mailer>,
    pub session: SharedSession,
}
