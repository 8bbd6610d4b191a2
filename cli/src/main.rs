//! jobs - terminal client for the job application tracker
//!
//! # Usage
//!
//! ```bash
//! # List everything, newest first
//! jobs -u http://localhost:5000/api list
//!
//! # Only offers from February
//! jobs list --status offer --date 2024-02
//!
//! # Record, progress and remove an application
//! jobs add --company Acme --role Engineer --link https://acme.example/jobs/1
//! jobs update 65a1f0c2 --status Interview
//! jobs delete 65a1f0c2
//! ```

use clap::Parser;
use colored::*;
use job_cli::{logging::init_logging, CLIConfiguration, Result};
use job_link::{JobId, JobUpdate, NewJob};

mod args;
mod connect;

use args::{Cli, Command};
use connect::create_session;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = CLIConfiguration::load(&cli.config)?;
    let session = create_session(&cli, &config)?;

    let output = match cli.command {
        Command::List(args) => session.list(args.status, args.date).await?,
        Command::Add(args) => {
            let date = args
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());
            let mut job = NewJob::new(args.company, args.role, args.status, date);
            if let Some(link) = args.link {
                job = job.with_link(link);
            }
            session.add(job).await?
        },
        Command::Update(args) => {
            let mut fields = JobUpdate::new();
            fields.status = args.status;
            fields.company = args.company;
            fields.role = args.role;
            session.update(JobId::new(args.id), fields).await?
        },
        Command::Delete { id } => session.delete(JobId::new(id)).await?,
    };

    println!("{}", output);
    Ok(())
}
