//! # job-link
//!
//! Client library for the job application tracker.
//!
//! - [`JobLinkClient`]: HTTP transport for the `/jobs` collection
//! - [`JobStore`]: cached, newest-first view of the collection with
//!   optimistic updates/deletes and rollback on failure
//! - [`JobFilter`]: status/date projections over the cached list
//!
//! # Example
//!
//! ```rust,no_run
//! use job_link::{JobFilter, JobLinkClient, JobStatus, JobStore, NewJob};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = JobLinkClient::builder()
//!     .base_url("http://localhost:5000/api")
//!     .build()?;
//! let store = JobStore::new(client);
//!
//! store.refresh().await?;
//! store
//!     .create(NewJob::new("Acme", "Engineer", JobStatus::Applied, "2024-02-01"))
//!     .await?;
//!
//! for job in store.filtered(&JobFilter::new().with_status(JobStatus::Applied)) {
//!     println!("{} - {}", job.company, job.role);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod filter;
pub mod models;
pub mod store;
pub mod timeouts;
pub mod transport;

pub use client::{JobLinkClient, JobLinkClientBuilder};
pub use error::{JobLinkError, MutationKind, Result, StoreError};
pub use filter::{JobFilter, StatusFilter};
pub use models::{
    ConnectionOptions, DeleteResponse, HttpVersion, Job, JobId, JobStatus, JobUpdate, NewJob,
};
pub use store::{JobStore, MutationId, StoreOptions, StoreStatus};
pub use timeouts::{JobLinkTimeouts, JobLinkTimeoutsBuilder};
pub use transport::JobTransport;
