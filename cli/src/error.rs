//! Error types for job-cli
//!
//! Turns library errors into messages fit for a terminal.

use job_link::{JobLinkError, StoreError};
use std::fmt;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CLIError>;

/// Errors that can occur in the CLI
#[derive(Debug)]
pub enum CLIError {
    /// Transport error outside of the store (client construction, etc.)
    LinkError(JobLinkError),

    /// Load or mutation failure reported by the store
    StoreError(StoreError),

    /// Configuration file error
    ConfigurationError(String),

    /// File I/O error
    FileError(String),

    /// Invalid command arguments
    ParseError(String),

    /// Output rendering error
    FormatError(String),
}

impl CLIError {
    fn format_link_error(err: &JobLinkError) -> String {
        match err {
            JobLinkError::NetworkError(msg) => Self::clean_nested_message(msg),
            JobLinkError::TimeoutError(msg) => format!("Request timed out: {}", msg),
            JobLinkError::ServerError {
                status_code,
                message,
            } => format!("Server error ({}): {}", status_code, message),
            JobLinkError::SerializationError(msg) => {
                format!("Unexpected response from server: {}", msg)
            },
            JobLinkError::ConfigurationError(msg) => msg.clone(),
            JobLinkError::ValidationError(msg) => msg.clone(),
            JobLinkError::InternalError(msg) => msg.clone(),
        }
    }

    fn format_store_error(err: &StoreError) -> String {
        match err {
            StoreError::Load(source) => format!(
                "Failed to load job applications. {}",
                Self::format_link_error(source)
            ),
            StoreError::Mutation { kind, source } => {
                format!("Failed to {} job. {}", kind, Self::format_link_error(source))
            },
        }
    }

    fn clean_nested_message(message: &str) -> String {
        let mut cleaned = message.trim();
        let prefixes = [
            "Network error:",
            "network error:",
            "error sending request for url",
        ];

        loop {
            let mut stripped = false;
            for prefix in &prefixes {
                if let Some(rest) = cleaned.strip_prefix(prefix) {
                    cleaned = rest.trim_start();
                    stripped = true;
                    break;
                }
            }

            if !stripped {
                break;
            }
        }

        cleaned.to_string()
    }
}

impl fmt::Display for CLIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLIError::LinkError(e) => write!(f, "{}", Self::format_link_error(e)),
            CLIError::StoreError(e) => write!(f, "{}", Self::format_store_error(e)),
            CLIError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            CLIError::FileError(msg) => write!(f, "File error: {}", msg),
            CLIError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CLIError::FormatError(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl std::error::Error for CLIError {}

impl From<JobLinkError> for CLIError {
    fn from(err: JobLinkError) -> Self {
        CLIError::LinkError(err)
    }
}

impl From<StoreError> for CLIError {
    fn from(err: StoreError) -> Self {
        CLIError::StoreError(err)
    }
}

impl From<std::io::Error> for CLIError {
    fn from(err: std::io::Error) -> Self {
        CLIError::FileError(err.to_string())
    }
}

impl From<toml::de::Error> for CLIError {
    fn from(err: toml::de::Error) -> Self {
        CLIError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}

impl From<serde_json::Error> for CLIError {
    fn from(err: serde_json::Error) -> Self {
        CLIError::FormatError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_link::MutationKind;

    #[test]
    fn test_error_display() {
        let err = CLIError::ParseError("Nothing to update".into());
        assert_eq!(err.to_string(), "Parse error: Nothing to update");
    }

    #[test]
    fn test_store_error_display() {
        let err = CLIError::from(StoreError::Load(JobLinkError::ServerError {
            status_code: 500,
            message: "boom".into(),
        }));
        assert_eq!(
            err.to_string(),
            "Failed to load job applications. Server error (500): boom"
        );

        let err = CLIError::from(StoreError::Mutation {
            kind: MutationKind::Update,
            source: JobLinkError::NetworkError("Network error: connection refused".into()),
        });
        assert_eq!(err.to_string(), "Failed to update job. connection refused");
    }
}
