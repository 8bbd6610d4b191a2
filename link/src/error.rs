//! Error types for job-link.
//!
//! [`JobLinkError`] is what the transport layer surfaces. [`StoreError`] is
//! what the cached store surfaces to its consumers: a failed load or a failed
//! mutation, nothing else.

use std::fmt;
use thiserror::Error;

/// Result type for transport-level operations.
pub type Result<T> = std::result::Result<T, JobLinkError>;

/// Errors produced while talking to the jobs service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobLinkError {
    /// Request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request did not complete within the configured timeout
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Service answered with a non-2xx status
    #[error("Server error ({status_code}): {message}")]
    ServerError { status_code: u16, message: String },

    /// Body could not be encoded or decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Client was misconfigured (missing or malformed base URL, etc.)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Payload was rejected before it left the client
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<reqwest::Error> for JobLinkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JobLinkError::TimeoutError(err.to_string())
        } else if err.is_decode() {
            JobLinkError::SerializationError(err.to_string())
        } else if let Some(status) = err.status() {
            JobLinkError::ServerError {
                status_code: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            JobLinkError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JobLinkError {
    fn from(err: serde_json::Error) -> Self {
        JobLinkError::SerializationError(err.to_string())
    }
}

/// The kind of mutation a [`StoreError::Mutation`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::Create => write!(f, "create"),
            MutationKind::Update => write!(f, "update"),
            MutationKind::Delete => write!(f, "delete"),
        }
    }
}

/// Errors surfaced by [`crate::JobStore`].
///
/// A load failure leaves the cache untouched. A mutation failure leaves the
/// cache as it was before the call (update and delete roll back their
/// optimistic edit; create never applies one).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to load jobs: {0}")]
    Load(#[source] JobLinkError),

    #[error("Failed to {kind} job: {source}")]
    Mutation {
        kind: MutationKind,
        #[source]
        source: JobLinkError,
    },
}

impl StoreError {
    pub(crate) fn mutation(kind: MutationKind, source: JobLinkError) -> Self {
        StoreError::Mutation { kind, source }
    }

    /// Underlying transport error
    pub fn link_error(&self) -> &JobLinkError {
        match self {
            StoreError::Load(err) => err,
            StoreError::Mutation { source, .. } => source,
        }
    }

    pub fn is_load(&self) -> bool {
        matches!(self, StoreError::Load(_))
    }
}
