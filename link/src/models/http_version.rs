use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// HTTP protocol version used when talking to the jobs service.
///
/// # Example
///
/// ```rust
/// use job_link::{ConnectionOptions, HttpVersion};
///
/// let options = ConnectionOptions::new().with_http_version(HttpVersion::Http2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HttpVersion {
    /// HTTP/1.1 (default) - widely compatible
    #[default]
    #[serde(rename = "http1", alias = "http/1.1", alias = "1.1")]
    Http1,

    /// HTTP/2 with prior knowledge - the server must speak h2c or h2
    #[serde(rename = "http2", alias = "http/2", alias = "2")]
    Http2,

    /// Let the client negotiate (ALPN for https, HTTP/1.1 for plain http)
    #[serde(rename = "auto")]
    Auto,
}

impl FromStr for HttpVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http1" | "http/1" | "http/1.1" | "1.1" => Ok(HttpVersion::Http1),
            "http2" | "http/2" | "2" => Ok(HttpVersion::Http2),
            "auto" => Ok(HttpVersion::Auto),
            other => Err(format!("Unknown HTTP version '{}'", other)),
        }
    }
}
