pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::intake::handlers as intake_handlers;
use crate::progress::handlers as progress_handlers;
use crate::report::handlers as report_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake: gate affordance + authoritative submission
        .route(
            "/api/v1/intake/check",
            post(intake_handlers::handle_intake_check),
        )
        .route("/api/v1/analyze", post(intake_handlers::handle_analyze))
        // Progress flow
        .route(
            "/api/v1/analyze/:id/progress",
            get(progress_handlers::handle_progress),
        )
        .route(
            "/api/v1/analyze/:id/cancel",
            post(progress_handlers::handle_cancel),
        )
        .route(
            "/api/v1/analyze/:id/result",
            get(progress_handlers::handle_result),
        )
        // Report export + share
        .route("/api/v1/report", post(report_handlers::handle_report))
        .route("/api/v1/share", post(report_handlers::handle_share))
        .with_state(state)
}
