//! Shared helpers for the HTTP integration tests.
//!
//! Each test gets its own `mockito` server standing in for the jobs service.

#![allow(dead_code)]

use job_link::{JobLinkClient, JobLinkTimeouts};
use mockito::{Mock, Server, ServerGuard};
use serde_json::{json, Value};

pub async fn mock_service() -> ServerGuard {
    Server::new_async().await
}

pub fn client_for(server: &ServerGuard) -> JobLinkClient {
    JobLinkClient::builder()
        .base_url(server.url())
        .timeouts(JobLinkTimeouts::fast())
        .build()
        .expect("Failed to create client")
}

pub fn job_json(id: &str, company: &str, status: &str, date: &str) -> Value {
    json!({
        "_id": id,
        "company": company,
        "role": "Engineer",
        "status": status,
        "applicationDate": date,
        "link": "",
        "__v": 0
    })
}

/// Collection used by most tests: job 1 applied earlier than job 2.
pub fn two_jobs_json() -> Value {
    json!([
        job_json("1", "Acme", "Applied", "2024-01-02T00:00:00.000Z"),
        job_json("2", "Globex", "Offer", "2024-01-05T00:00:00.000Z"),
    ])
}

pub async fn mock_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: &Value,
) -> Mock {
    server
        .mock(method, path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}
