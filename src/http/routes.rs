//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::http::monitoring;
use crate::job::routes as job_routes;
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// /jobs
///   POST   /jobs                - Create job
///   GET    /jobs                - List jobs
///   GET    /jobs/{id}           - Get job
///   DELETE /jobs/{id}           - Delete job
///   PATCH  /jobs/{id}/status    - Update job status
///
/// /health  - Health check
/// ```
///
/// CORS is permissive: the listener is loopback-only, and the desktop
/// renderer that calls it runs under an arbitrary origin.
pub fn create_router(state: Arc<AppState>) -> Router {
    let job_router = Router::new()
        .route("/", post(job_routes::create_job))
        .route("/", get(job_routes::list_jobs))
        .route("/{id}", get(job_routes::get_job))
        .route("/{id}", delete(job_routes::delete_job))
        .route("/{id}/status", patch(job_routes::update_job_status))
        .with_state(state);

    let health_route = Router::new().route("/health", get(monitoring::health_check));

    Router::new()
        .nest("/jobs", job_router)
        .merge(health_route)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
