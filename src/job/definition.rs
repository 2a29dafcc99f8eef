//! Job record and request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status a freshly created job starts in.
pub const STATUS_PENDING: &str = "pending";

/// A unit of trackable work metadata.
///
/// The service only stores jobs; it never executes them. `status` is a
/// free-form string: `pending`, `running` and `done` are conventions shared
/// with the desktop app, not an enforced set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job id, assigned by the server.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Optional free text, empty when not provided.
    pub description: String,
    /// Current lifecycle label.
    pub status: String,
    /// Creation time, never updated.
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Create a job with a fresh id and creation timestamp.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            status: STATUS_PENDING.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating a job.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobRequest {
    /// Required job label.
    pub name: String,
    /// Optional description, defaults to empty.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new() {
        let job = Job::new("build", "compile the portal");
        assert!(!job.id.is_empty());
        assert_eq!(job.name, "build");
        assert_eq!(job.description, "compile the portal");
        assert_eq!(job.status, STATUS_PENDING);
    }

    #[test]
    fn test_job_ids_unique() {
        let a = Job::new("a", "");
        let b = Job::new("a", "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_job_serialize_created_at_as_string() {
        let job = Job::new("build", "");
        let value = serde_json::to_value(&job).unwrap();
        assert!(value["created_at"].is_string());
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn test_create_request_deserialize() {
        let req: CreateJobRequest =
            serde_json::from_str(r#"{"name": "build", "description": "full"}"#).unwrap();
        assert_eq!(req.name, "build");
        assert_eq!(req.description, "full");
    }

    #[test]
    fn test_create_request_default_description() {
        let req: CreateJobRequest = serde_json::from_str(r#"{"name": "build"}"#).unwrap();
        assert_eq!(req.description, "");
    }

    #[test]
    fn test_create_request_missing_name_rejected() {
        let result = serde_json::from_str::<CreateJobRequest>(r#"{"description": "x"}"#);
        assert!(result.is_err());
    }
}
