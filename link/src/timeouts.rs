//! Timeout configuration for job-link HTTP requests.

use std::time::Duration;

/// Timeouts applied by the HTTP transport.
///
/// The store itself never times out an operation; whatever limit exists comes
/// from here.
///
/// # Examples
///
/// ```rust
/// use job_link::JobLinkTimeouts;
/// use std::time::Duration;
///
/// let timeouts = JobLinkTimeouts::default();
///
/// let timeouts = JobLinkTimeouts::builder()
///     .connection_timeout(Duration::from_secs(60))
///     .receive_timeout_secs(120)
///     .build();
///
/// let timeouts = JobLinkTimeouts::fast();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLinkTimeouts {
    /// Timeout for establishing connections (TCP + TLS handshake).
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Total time allowed for one request, from send to fully-read body.
    /// Default: 30 seconds
    pub receive_timeout: Duration,
}

impl Default for JobLinkTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            receive_timeout: Duration::from_secs(30),
        }
    }
}

impl JobLinkTimeouts {
    pub fn builder() -> JobLinkTimeoutsBuilder {
        JobLinkTimeoutsBuilder::new()
    }

    /// Short timeouts for a service on localhost.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            receive_timeout: Duration::from_secs(5),
        }
    }
}

/// Builder for custom [`JobLinkTimeouts`].
#[derive(Debug, Clone)]
pub struct JobLinkTimeoutsBuilder {
    timeouts: JobLinkTimeouts,
}

impl JobLinkTimeoutsBuilder {
    fn new() -> Self {
        Self {
            timeouts: JobLinkTimeouts::default(),
        }
    }

    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connection_timeout = timeout;
        self
    }

    pub fn connection_timeout_secs(self, secs: u64) -> Self {
        self.connection_timeout(Duration::from_secs(secs))
    }

    pub fn receive_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.receive_timeout = timeout;
        self
    }

    pub fn receive_timeout_secs(self, secs: u64) -> Self {
        self.receive_timeout(Duration::from_secs(secs))
    }

    pub fn build(self) -> JobLinkTimeouts {
        self.timeouts
    }
}
