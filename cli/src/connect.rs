use crate::args::Cli;
use job_cli::{CLIConfiguration, CLISession, Result};
use job_link::{JobLinkClient, JobStore};
use log::debug;
use std::time::Duration;

/// Build the client, store and session from flags layered over config.
pub fn create_session(cli: &Cli, config: &CLIConfiguration) -> Result<CLISession<JobLinkClient>> {
    let server_url = cli.url.clone().unwrap_or_else(|| config.server_url());
    let timeout = cli.timeout.unwrap_or_else(|| config.timeout_secs());
    let format = cli.format.unwrap_or_else(|| config.output_format());
    let color = !cli.no_color && config.color();

    debug!(
        "[CLI] Connecting to {} (timeout={}s, format={:?}, color={})",
        server_url, timeout, format, color
    );

    let client = JobLinkClient::builder()
        .base_url(server_url)
        .timeout(Duration::from_secs(timeout))
        .connection_options(config.to_connection_options())
        .build()?;

    let store = JobStore::with_options(client, config.to_store_options());
    Ok(CLISession::new(store, format, color))
}
