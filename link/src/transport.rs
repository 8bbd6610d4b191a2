//! The four logical operations the store needs from the jobs service.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{DeleteResponse, Job, JobId, JobUpdate, NewJob};

/// Access to the remote jobs collection.
///
/// Implementations map each call onto exactly one request, do not retry,
/// and report any non-success outcome as an error without interpreting it
/// further. [`crate::JobLinkClient`] is the HTTP implementation.
#[async_trait]
pub trait JobTransport: Send + Sync {
    /// All jobs, in whatever order the service returns them.
    async fn list(&self) -> Result<Vec<Job>>;

    /// Persist a new job; the returned record carries the assigned id.
    async fn create(&self, job: &NewJob) -> Result<Job>;

    /// Apply a partial update and return the stored record.
    async fn update(&self, id: &JobId, fields: &JobUpdate) -> Result<Job>;

    async fn delete(&self, id: &JobId) -> Result<DeleteResponse>;
}

#[async_trait]
impl<T> JobTransport for std::sync::Arc<T>
where
    T: JobTransport + ?Sized,
{
    async fn list(&self) -> Result<Vec<Job>> {
        (**self).list().await
    }

    async fn create(&self, job: &NewJob) -> Result<Job> {
        (**self).create(job).await
    }

    async fn update(&self, id: &JobId, fields: &JobUpdate) -> Result<Job> {
        (**self).update(id, fields).await
    }

    async fn delete(&self, id: &JobId) -> Result<DeleteResponse> {
        (**self).delete(id).await
    }
}
