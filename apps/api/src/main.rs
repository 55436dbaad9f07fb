mod assessment;
mod config;
mod email;
mod errors;
mod extract;
mod llm;
mod routes;
mod screening;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::email::mailer::SmtpMailer;
use crate::llm::LlmClient;
use crate::routes::build_router;
use crate::screening::{GroqScreener, Screener};
use crate::session::SessionState;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sift API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the analysis backend. The service boots without a key;
    // analysis requests then report the missing configuration instead of
    // calling out.
    let screener: Option<Arc<dyn Screener>> = match &config.groq_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm::MODEL);
            Some(Arc::new(GroqScreener::new(LlmClient::new(key.clone()))))
        }
        None => {
            warn!("GROQ_API_KEY is not set; resume analysis will be unavailable");
            None
        }
    };

    // Initialize mail transport
    if config.email_user.is_none() || config.email_password.is_none() {
        warn!("EMAIL_USER/EMAIL_PASSWORD not set; email dispatch will be unavailable");
    }
    let mailer = Arc::new(SmtpMailer::from_config(&config));
    info!(
        "SMTP transport configured for {}:{}",
        config.email_host, config.email_port
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        screener,
        mailer,
        session: Arc::new(RwLock::new(SessionState::default())),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
