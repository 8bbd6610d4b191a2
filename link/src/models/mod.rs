//! Data models for job-link.
//!
//! Request and response bodies exchanged with the jobs service, plus the
//! client-side connection options.

pub mod connection_options;
pub mod delete_response;
pub mod error_detail;
pub mod http_version;
pub mod job;
pub mod job_id;
pub mod job_status;
pub mod job_update;
pub mod new_job;

#[cfg(test)]
mod tests;

pub use connection_options::ConnectionOptions;
pub use delete_response::DeleteResponse;
pub use error_detail::ErrorDetail;
pub use http_version::HttpVersion;
pub use job::{parse_application_date, Job};
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use job_update::JobUpdate;
pub use new_job::NewJob;
