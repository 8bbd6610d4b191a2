//! Library entry point for job-cli components.
//!
//! Exposes the reusable pieces (config, formatter, session) so integration
//! tests can drive them without going through the binary.

pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod session;

pub use config::CLIConfiguration;
pub use error::{CLIError, Result};
pub use formatter::{OutputFormat, OutputFormatter};
pub use session::CLISession;
