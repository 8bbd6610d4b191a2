//! HTTP client for the jobs service, with builder pattern.
//!
//! [`JobLinkClient`] is the [`JobTransport`] used in production: one request
//! per call, no retries, JSON in and out.

use crate::{
    error::{JobLinkError, Result},
    models::{ConnectionOptions, DeleteResponse, ErrorDetail, HttpVersion, Job, JobId, JobUpdate, NewJob},
    timeouts::JobLinkTimeouts,
    transport::JobTransport,
};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// HTTP client for the `/jobs` collection.
///
/// Use [`JobLinkClientBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust,no_run
/// use job_link::{JobLinkClient, JobTransport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = JobLinkClient::builder()
///     .base_url("http://localhost:5000/api")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()?;
///
/// let jobs = client.list().await?;
/// println!("{} jobs", jobs.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JobLinkClient {
    base_url: Url,
    http_client: reqwest::Client,
    timeouts: JobLinkTimeouts,
}

impl JobLinkClient {
    pub fn builder() -> JobLinkClientBuilder {
        JobLinkClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn timeouts(&self) -> &JobLinkTimeouts {
        &self.timeouts
    }

    /// `{base}/jobs` or `{base}/jobs/{id}`, with the id encoded as one path segment.
    fn jobs_url(&self, id: Option<&JobId>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                JobLinkError::ConfigurationError(format!(
                    "base_url '{}' cannot carry a path",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty().push("jobs");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    /// Send one request and return the raw body of a 2xx response.
    async fn send<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<String>
    where
        B: serde::Serialize + ?Sized,
    {
        let mut request = self.http_client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let start = Instant::now();
        debug!("[JOB_HTTP] Sending {} {}", method, url);

        let response = request.send().await.map_err(|e| {
            warn!(
                "[JOB_HTTP] {} {} failed: {} duration_ms={}",
                method,
                url,
                e,
                start.elapsed().as_millis()
            );
            JobLinkError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        debug!(
            "[JOB_HTTP] Response: {} {} status={} duration_ms={}",
            method,
            url,
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorDetail>(&text)
                .ok()
                .and_then(ErrorDetail::into_message)
                .unwrap_or_else(|| {
                    if text.trim().is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("Unknown error")
                            .to_string()
                    } else {
                        text.clone()
                    }
                });
            warn!(
                "[JOB_HTTP] Server error: {} {} status={} message=\"{}\"",
                method, url, status, message
            );
            return Err(JobLinkError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }

    fn parse<R: DeserializeOwned>(text: &str) -> Result<R> {
        serde_json::from_str(text).map_err(JobLinkError::from)
    }
}

#[async_trait]
impl JobTransport for JobLinkClient {
    async fn list(&self) -> Result<Vec<Job>> {
        let url = self.jobs_url(None)?;
        let text = self.send::<()>(Method::GET, url, None).await?;
        let jobs: Vec<Job> = Self::parse(&text)?;
        debug!("[JOB_HTTP] Listed {} jobs", jobs.len());
        Ok(jobs)
    }

    async fn create(&self, job: &NewJob) -> Result<Job> {
        let url = self.jobs_url(None)?;
        let text = self.send(Method::POST, url, Some(job)).await?;
        Self::parse(&text)
    }

    async fn update(&self, id: &JobId, fields: &JobUpdate) -> Result<Job> {
        let url = self.jobs_url(Some(id))?;
        let text = self.send(Method::PUT, url, Some(fields)).await?;
        Self::parse(&text)
    }

    async fn delete(&self, id: &JobId) -> Result<DeleteResponse> {
        let url = self.jobs_url(Some(id))?;
        let text = self.send::<()>(Method::DELETE, url, None).await?;
        if text.trim().is_empty() {
            return Ok(DeleteResponse::default());
        }
        // Confirmation bodies are informational; a plain-text one is kept as the message.
        Ok(Self::parse(&text).unwrap_or(DeleteResponse {
            message: Some(text),
        }))
    }
}

/// Builder for configuring [`JobLinkClient`] instances.
pub struct JobLinkClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    timeouts: JobLinkTimeouts,
    connection_options: ConnectionOptions,
}

impl JobLinkClientBuilder {
    fn new() -> Self {
        let timeouts = JobLinkTimeouts::default();
        Self {
            base_url: None,
            timeout: timeouts.receive_timeout,
            timeouts,
            connection_options: ConnectionOptions::default(),
        }
    }

    /// Set the base URL of the jobs service (the part before `/jobs`)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set all timeouts at once
    ///
    /// Overrides any earlier `timeout()` call.
    pub fn timeouts(mut self, timeouts: JobLinkTimeouts) -> Self {
        self.timeout = timeouts.receive_timeout;
        self.timeouts = timeouts;
        self
    }

    pub fn connection_options(mut self, options: ConnectionOptions) -> Self {
        self.connection_options = options;
        self
    }

    /// Shorthand for setting just the HTTP version.
    pub fn http_version(mut self, version: HttpVersion) -> Self {
        self.connection_options.http_version = version;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<JobLinkClient> {
        let raw_url = self
            .base_url
            .ok_or_else(|| JobLinkError::ConfigurationError("base_url is required".into()))?;

        let base_url = Url::parse(raw_url.trim()).map_err(|e| {
            JobLinkError::ConfigurationError(format!("Invalid base_url '{}': {}", raw_url, e))
        })?;
        match base_url.scheme() {
            "http" | "https" => {},
            other => {
                return Err(JobLinkError::ConfigurationError(format!(
                    "Unsupported base_url scheme '{}'; expected http(s)",
                    other
                )));
            },
        }
        if base_url.cannot_be_a_base() {
            return Err(JobLinkError::ConfigurationError(format!(
                "base_url '{}' cannot carry a path",
                raw_url
            )));
        }

        let mut client_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.timeouts.connection_timeout)
            .pool_max_idle_per_host(self.connection_options.pool_max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(
                self.connection_options.pool_idle_timeout_secs,
            ));

        client_builder = match self.connection_options.http_version {
            HttpVersion::Http1 => {
                debug!("[CLIENT] Using HTTP/1.1 only");
                client_builder.http1_only()
            },
            HttpVersion::Http2 => {
                debug!("[CLIENT] Using HTTP/2 with prior knowledge");
                client_builder.http2_prior_knowledge()
            },
            HttpVersion::Auto => {
                debug!("[CLIENT] Using automatic HTTP version negotiation");
                client_builder
            },
        };

        let http_client = client_builder
            .build()
            .map_err(|e| JobLinkError::ConfigurationError(e.to_string()))?;

        Ok(JobLinkClient {
            base_url,
            http_client,
            timeouts: self.timeouts,
        })
    }
}
