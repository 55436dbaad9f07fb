pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::email;
use crate::screening;
use crate::state::AppState;

/// Resume uploads are capped well above any realistic resume PDF.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route(
            "/api/v1/screening/analyze",
            post(screening::handlers::handle_analyze),
        )
        .route(
            "/api/v1/screening/session",
            get(screening::handlers::handle_session),
        )
        // Email API
        .route("/api/v1/email/preview", get(email::handlers::handle_preview))
        .route("/api/v1/email/send", post(email::handlers::handle_send))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
