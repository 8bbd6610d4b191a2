use serde::{Deserialize, Serialize};

use super::job::{empty_string_as_none, parse_application_date, Job};
use super::job_status::JobStatus;
use crate::error::{JobLinkError, Result};

/// Create payload: a job without an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub company: String,

    pub role: String,

    #[serde(default)]
    pub status: JobStatus,

    #[serde(rename = "applicationDate")]
    pub application_date: String,

    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

impl NewJob {
    pub fn new(
        company: impl Into<String>,
        role: impl Into<String>,
        status: JobStatus,
        application_date: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            status,
            application_date: application_date.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        let link = link.into();
        self.link = if link.trim().is_empty() { None } else { Some(link) };
        self
    }

    /// Reject payloads the service would store as garbage.
    pub fn validate(&self) -> Result<()> {
        if self.company.trim().is_empty() {
            return Err(JobLinkError::ValidationError("company must not be empty".into()));
        }
        if self.role.trim().is_empty() {
            return Err(JobLinkError::ValidationError("role must not be empty".into()));
        }
        if parse_application_date(&self.application_date).is_none() {
            return Err(JobLinkError::ValidationError(format!(
                "applicationDate '{}' is not an ISO date",
                self.application_date
            )));
        }
        Ok(())
    }
}

impl From<Job> for NewJob {
    fn from(job: Job) -> Self {
        Self {
            company: job.company,
            role: job.role,
            status: job.status,
            application_date: job.application_date,
            link: job.link,
        }
    }
}
