//! Job HTTP route handlers.
//!
//! Provides CRUD operations for jobs:
//! - POST   /jobs              - Create job
//! - GET    /jobs              - List jobs
//! - GET    /jobs/{id}         - Get job
//! - DELETE /jobs/{id}         - Delete job
//! - PATCH  /jobs/{id}/status  - Update job status

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::definition::{CreateJobRequest, Job};
use crate::state::AppState;

/// Response for listing jobs.
#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}

/// Query parameters for a status update.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

/// Create a new job.
///
/// POST /jobs
pub async fn create_job(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateJobRequest>,
) -> impl IntoResponse {
    info!("Creating job: {}", req.name);

    let job = state.jobs.create(req.name, req.description);
    (StatusCode::CREATED, Json(job))
}

/// List all jobs in insertion order.
///
/// GET /jobs
pub async fn list_jobs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(JobListResponse {
        jobs: state.jobs.list(),
    })
}

/// Get a job by ID.
///
/// GET /jobs/{id}
pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.jobs.get(&id) {
        Ok(job) => (StatusCode::OK, Json(serde_json::json!(job))),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"detail": e.to_string()})),
        ),
    }
}

/// Delete a job.
///
/// DELETE /jobs/{id}
pub async fn delete_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("Deleting job: {}", id);

    match state.jobs.delete(&id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({"message": format!("Job {} deleted", id)})),
        ),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"detail": e.to_string()})),
        ),
    }
}

/// Update a job's status.
///
/// PATCH /jobs/{id}/status?status=<value>
pub async fn update_job_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> impl IntoResponse {
    info!("Updating job {} status to '{}'", id, query.status);

    match state.jobs.update_status(&id, query.status) {
        Ok(job) => (StatusCode::OK, Json(serde_json::json!(job))),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"detail": e.to_string()})),
        ),
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
