use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::job_id::JobId;
use super::job_status::JobStatus;

/// A job application record as stored by the jobs service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Assigned by the service; `None` until the record is persisted
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JobId>,

    pub company: String,

    pub role: String,

    pub status: JobStatus,

    /// ISO-8601 date (`2024-01-05`) or timestamp (`2024-01-05T00:00:00.000Z`)
    #[serde(rename = "applicationDate")]
    pub application_date: String,

    /// Listing URL. An empty string on the wire is read as `None`.
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

impl Job {
    /// Whether this record carries the given id
    pub fn has_id(&self, id: &JobId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// Application date as a comparable instant, if it parses
    pub fn applied_at(&self) -> Option<NaiveDateTime> {
        parse_application_date(&self.application_date)
    }
}

/// Parse an application date the way the service emits it.
///
/// Accepts RFC 3339 timestamps, zone-less timestamps, and plain dates.
pub fn parse_application_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.naive_utc());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
