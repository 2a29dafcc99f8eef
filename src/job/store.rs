//! In-memory job store.

use parking_lot::Mutex;
use tracing::debug;

use super::definition::Job;
use crate::error::ServiceError;

/// Sole authority over the job collection.
///
/// Jobs are kept in insertion order behind a single mutex so concurrent
/// request handlers observe serialized mutations. Operations never suspend
/// and never perform I/O; callers receive owned clones.
#[derive(Default)]
pub struct JobStore {
    jobs: Mutex<Vec<Job>>,
}

impl JobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All jobs in insertion order.
    pub fn list(&self) -> Vec<Job> {
        self.jobs.lock().clone()
    }

    /// Look up a job by id.
    pub fn get(&self, id: &str) -> Result<Job, ServiceError> {
        self.jobs
            .lock()
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::JobNotFound(id.to_string()))
    }

    /// Create a job and append it to the collection.
    pub fn create(&self, name: impl Into<String>, description: impl Into<String>) -> Job {
        let job = Job::new(name, description);
        debug!("Created job '{}' ({})", job.name, job.id);
        self.jobs.lock().push(job.clone());
        job
    }

    /// Overwrite the status of an existing job.
    ///
    /// The new value is not validated; any string is accepted.
    pub fn update_status(
        &self,
        id: &str,
        new_status: impl Into<String>,
    ) -> Result<Job, ServiceError> {
        let mut jobs = self.jobs.lock();
        let job = jobs
            .iter_mut()
            .find(|job| job.id == id)
            .ok_or_else(|| ServiceError::JobNotFound(id.to_string()))?;
        job.status = new_status.into();
        Ok(job.clone())
    }

    /// Remove a job by id, preserving the order of the rest.
    pub fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut jobs = self.jobs.lock();
        let index = jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or_else(|| ServiceError::JobNotFound(id.to_string()))?;
        jobs.remove(index);
        debug!("Deleted job '{}'", id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
