//! CLI session: one store, one formatter, one command at a time.
//!
//! Every command returns the text to print so callers (and tests) decide
//! where it goes.

use colored::*;
use job_link::{
    Job, JobFilter, JobId, JobStore, JobTransport, JobUpdate, NewJob, StatusFilter,
};
use log::debug;

use crate::error::{CLIError, Result};
use crate::formatter::{OutputFormat, OutputFormatter};

/// Terminal front-end over a [`JobStore`].
pub struct CLISession<T> {
    store: JobStore<T>,
    formatter: OutputFormatter,
    color: bool,
}

impl<T: JobTransport> CLISession<T> {
    pub fn new(store: JobStore<T>, format: OutputFormat, color: bool) -> Self {
        Self {
            store,
            formatter: OutputFormatter::new(format, color),
            color,
        }
    }

    pub fn store(&self) -> &JobStore<T> {
        &self.store
    }

    fn success(&self, message: String) -> String {
        if self.color {
            format!("{} {}", "✓".green().bold(), message)
        } else {
            format!("✓ {}", message)
        }
    }

    fn describe(job: &Job) -> String {
        format!("{} - {} ({})", job.company, job.role, job.status)
    }

    /// Load the collection and render the filtered view.
    pub async fn list(&self, status: StatusFilter, date: Option<String>) -> Result<String> {
        self.store.refresh().await?;
        let filter = JobFilter::new()
            .with_status_filter(status)
            .with_date(date.unwrap_or_default());
        let jobs = self.store.filtered(&filter);
        debug!(
            "[CLI] {} of {} jobs match status={} date={:?}",
            jobs.len(),
            self.store.jobs().len(),
            filter.status,
            filter.date
        );
        self.formatter.format_jobs(&jobs)
    }

    pub async fn add(&self, job: NewJob) -> Result<String> {
        let created = self.store.create(job).await?;
        let id = created
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "?".to_string());
        Ok(self.success(format!("Added job {}: {}", id, Self::describe(&created))))
    }

    pub async fn update(&self, id: JobId, fields: JobUpdate) -> Result<String> {
        if fields.is_empty() {
            return Err(CLIError::ParseError(
                "Nothing to update; pass --status, --company or --role".into(),
            ));
        }
        let updated = self.store.update(id.clone(), fields).await?;
        Ok(self.success(format!("Updated job {}: {}", id, Self::describe(&updated))))
    }

    pub async fn delete(&self, id: JobId) -> Result<String> {
        let response = self.store.delete(id.clone()).await?;
        let mut message = format!("Deleted job {}", id);
        if let Some(detail) = response.message {
            message.push_str(&format!(" ({})", detail));
        }
        Ok(self.success(message))
    }
}
