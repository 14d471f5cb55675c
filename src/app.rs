use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/punch/:kind", post(handlers::punch_form))
        .route("/api/today", get(handlers::get_today))
        .route("/api/history", get(handlers::get_history))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/punch", post(handlers::punch))
        .route("/api/corrections", post(handlers::submit_correction))
        .route("/api/justifications", post(handlers::submit_justification))
        .with_state(state)
}
