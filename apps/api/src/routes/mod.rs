pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ai/cover-letter", post(handlers::handle_cover_letter))
        .route(
            "/api/ai/job-description",
            post(handlers::handle_job_description),
        )
        .route("/api/ai/cold-email", post(handlers::handle_cold_email))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
