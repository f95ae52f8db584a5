pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::assessment::upload::UploadPolicy;
use crate::debug::handlers as debug;
use crate::state::AppState;

/// Room for the `formData` field and multipart framing on top of the file itself.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

fn upload_body_limit(policy: UploadPolicy) -> DefaultBodyLimit {
    DefaultBodyLimit::max(policy.max_bytes() + MULTIPART_OVERHEAD)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/assessment/:assessment_type",
            post(handlers::handle_create),
        )
        .route(
            "/api/assessment/:assessment_type/:id",
            get(handlers::handle_get),
        )
        .route(
            "/api/assessment/:assessment_type/:id/submit-with-google-vision",
            post(handlers::handle_submit_vision).layer(upload_body_limit(UploadPolicy::Vision)),
        )
        .route(
            "/api/assessment/:assessment_type/:id/submit-with-file",
            post(handlers::handle_submit_file).layer(upload_body_limit(UploadPolicy::Legacy)),
        )
        .route(
            "/api/assessment/:assessment_type/:id/analyze",
            post(handlers::handle_analyze),
        )
        // Debug API
        .route(
            "/api/debug/assessments",
            get(debug::handle_debug_get).post(debug::handle_debug_post),
        )
        .with_state(state)
}
