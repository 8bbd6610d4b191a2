//! Read-time projections over the cached job list.

use crate::models::{Job, JobStatus};
use std::fmt;
use std::str::FromStr;

/// Status criterion of a [`JobFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: JobStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    /// `"all"` (or an empty string) selects everything; otherwise a status name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        trimmed.parse::<JobStatus>().map(StatusFilter::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Status and date criteria applied to the cached list. Never touches the cache.
///
/// # Example
///
/// ```rust
/// use job_link::{JobFilter, JobStatus};
///
/// let filter = JobFilter::new()
///     .with_status(JobStatus::Offer)
///     .with_date("2024-01");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub status: StatusFilter,

    /// Substring matched against the raw `applicationDate` text
    pub date: Option<String>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn with_status_filter(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// An empty string clears the date criterion.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.date = if date.is_empty() { None } else { Some(date) };
        self
    }

    pub fn matches(&self, job: &Job) -> bool {
        let status_match = self.status.matches(job.status);
        let date_match = self
            .date
            .as_deref()
            .map_or(true, |date| job.application_date.contains(date));
        status_match && date_match
    }

    /// Matching jobs, in input order.
    pub fn apply<'a, I>(&self, jobs: I) -> Vec<Job>
    where
        I: IntoIterator<Item = &'a Job>,
    {
        jobs.into_iter().filter(|job| self.matches(job)).cloned().collect()
    }
}
