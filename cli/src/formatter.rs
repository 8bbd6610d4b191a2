//! Output formatters for job lists
//!
//! Renders the store's read view as a colored table or as JSON.

use clap::ValueEnum;
use colored::*;
use job_link::{Job, JobStatus};

use crate::error::Result;

/// Maximum column width before truncation
const MAX_COLUMN_WIDTH: usize = 32;

pub const EMPTY_MESSAGE: &str = "No job applications found.";

/// Output format for job lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Formats job lists for display
pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Truncate a string to max width with ellipsis
    fn truncate_value(value: &str, max_width: usize) -> String {
        if value.chars().count() <= max_width {
            value.to_string()
        } else if max_width <= 3 {
            value.chars().take(max_width).collect()
        } else {
            let take = max_width - 3;
            format!("{}...", value.chars().take(take).collect::<String>())
        }
    }

    /// `YYYY-MM-DD` part of an application date, or the raw text if it doesn't parse
    pub fn display_date(job: &Job) -> String {
        job.applied_at()
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| job.application_date.clone())
    }

    /// Status badge; padded before coloring so ANSI codes don't skew alignment
    fn status_badge(&self, status: JobStatus, width: usize) -> String {
        let text = format!("{:<width$}", status.as_str(), width = width);
        if !self.color {
            return text;
        }
        match status {
            JobStatus::Applied => text.blue().to_string(),
            JobStatus::Interview => text.yellow().to_string(),
            JobStatus::Offer => text.green().bold().to_string(),
            JobStatus::Rejected => text.red().to_string(),
        }
    }

    pub fn format_jobs(&self, jobs: &[Job]) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_table(jobs)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(jobs)?),
        }
    }

    fn format_table(&self, jobs: &[Job]) -> String {
        if jobs.is_empty() {
            return EMPTY_MESSAGE.to_string();
        }

        let headers = ["ID", "Company", "Role", "Status", "Applied", "Link"];
        let rows: Vec<[String; 6]> = jobs
            .iter()
            .map(|job| {
                [
                    job.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                    Self::truncate_value(&job.company, MAX_COLUMN_WIDTH),
                    Self::truncate_value(&job.role, MAX_COLUMN_WIDTH),
                    job.status.to_string(),
                    Self::display_date(job),
                    job.link.clone().unwrap_or_default(),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut output = String::new();
        let header_line = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ");
        if self.color {
            output.push_str(&header_line.bold().to_string());
        } else {
            output.push_str(&header_line);
        }
        output.push('\n');
        output.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        output.push('\n');

        for (job, row) in jobs.iter().zip(&rows) {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i == 3 {
                        self.status_badge(job.status, widths[i])
                    } else {
                        format!("{:<width$}", cell, width = widths[i])
                    }
                })
                .collect();
            output.push_str(cells.join(" | ").trim_end());
            output.push('\n');
        }

        let noun = if jobs.len() == 1 { "application" } else { "applications" };
        output.push_str(&format!("\n{} {}", jobs.len(), noun));
        output
    }
}
