//! Configuration file management
//!
//! # Configuration Format
//!
//! ```toml
//! [server]
//! url = "http://localhost:5000"  # Jobs service base URL (the part before /jobs)
//! timeout = 30                   # Request timeout in seconds
//! http_version = "http1"         # HTTP version: "http1", "http2", "auto"
//!
//! [store]
//! reconcile_on_error = false     # Refetch after a failed update/delete
//!
//! [ui]
//! format = "table"               # table, json
//! color = true
//! ```

use job_link::{ConnectionOptions, HttpVersion, StoreOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CLIError, Result};
use crate::formatter::OutputFormat;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// CLI configuration loaded from TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CLIConfiguration {
    pub server: Option<ServerConfig>,

    pub store: Option<StoreConfig>,

    pub ui: Option<UIConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Service base URL (e.g., http://localhost:5000/api)
    pub url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// HTTP version preference: "http1", "http2", "auto"
    #[serde(default = "default_http_version")]
    pub http_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub reconcile_on_error: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Output format: table, json
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_timeout() -> u64 {
    30
}

fn default_http_version() -> String {
    "http1".to_string()
}

fn default_format() -> String {
    "table".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for CLIConfiguration {
    fn default() -> Self {
        Self {
            server: Some(ServerConfig {
                url: Some(DEFAULT_SERVER_URL.to_string()),
                timeout: default_timeout(),
                http_version: default_http_version(),
            }),
            store: Some(StoreConfig {
                reconcile_on_error: false,
            }),
            ui: Some(UIConfig {
                format: default_format(),
                color: default_color(),
            }),
        }
    }
}

pub fn expand_config_path(path: &Path) -> PathBuf {
    let path_str = path.to_str().unwrap_or("~/.jobtrack/config.toml");
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(rest);
        }
    }
    path.to_path_buf()
}

pub fn default_config_path() -> PathBuf {
    expand_config_path(Path::new("~/.jobtrack/config.toml"))
}

impl CLIConfiguration {
    /// Load configuration from file
    ///
    /// Returns default configuration if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let expanded_path = expand_config_path(path);
        let path = &expanded_path;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            CLIError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: CLIConfiguration = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let expanded_path = expand_config_path(path);
        let path = &expanded_path;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CLIError::ConfigurationError(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn server_url(&self) -> String {
        self.server
            .as_ref()
            .and_then(|s| s.url.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.server.as_ref().map(|s| s.timeout).unwrap_or_else(default_timeout)
    }

    /// HTTP version from config; unknown strings fall back to auto negotiation
    pub fn http_version(&self) -> HttpVersion {
        self.server
            .as_ref()
            .map(|s| s.http_version.parse().unwrap_or(HttpVersion::Auto))
            .unwrap_or_default()
    }

    pub fn to_connection_options(&self) -> ConnectionOptions {
        ConnectionOptions::default().with_http_version(self.http_version())
    }

    pub fn to_store_options(&self) -> StoreOptions {
        StoreOptions::new().with_reconcile_on_error(
            self.store
                .as_ref()
                .map(|s| s.reconcile_on_error)
                .unwrap_or(false),
        )
    }

    pub fn output_format(&self) -> OutputFormat {
        match self.ui.as_ref().map(|ui| ui.format.to_lowercase()) {
            Some(format) if format == "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }

    pub fn color(&self) -> bool {
        self.ui.as_ref().map(|ui| ui.color).unwrap_or_else(default_color)
    }
}
