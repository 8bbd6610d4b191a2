use clap::{Args, Parser, Subcommand};
use job_link::{JobStatus, StatusFilter};
use job_cli::OutputFormat;
use std::path::PathBuf;

/// jobs - track job applications from the terminal
#[derive(Parser, Debug)]
#[command(name = "jobs")]
#[command(version)]
#[command(about = "Track job applications against a jobs service", long_about = None)]
pub struct Cli {
    /// Jobs service base URL (e.g., http://localhost:5000/api)
    #[arg(short = 'u', long = "url", env = "JOBTRACK_BACKEND_URL", global = true)]
    pub url: Option<String>,

    /// HTTP request timeout in seconds (default: from config, else 30)
    #[arg(long = "timeout", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Output format (default: from config, else table)
    #[arg(long = "format", global = true)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(long = "config", default_value = "~/.jobtrack/config.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List job applications, newest first
    List(ListArgs),

    /// Record a new job application
    Add(AddArgs),

    /// Change status, company or role of an application
    Update(UpdateArgs),

    /// Remove an application
    Delete {
        /// Job id
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show this status ("all" for every status)
    #[arg(short = 's', long = "status", default_value = "all")]
    pub status: StatusFilter,

    /// Only show applications whose date contains this text (e.g. 2024-02)
    #[arg(short = 'd', long = "date")]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(short = 'c', long = "company")]
    pub company: String,

    #[arg(short = 'r', long = "role")]
    pub role: String,

    #[arg(short = 's', long = "status", default_value = "Applied")]
    pub status: JobStatus,

    /// Application date, YYYY-MM-DD (default: today)
    #[arg(short = 'd', long = "date")]
    pub date: Option<String>,

    /// Link to the job listing
    #[arg(short = 'l', long = "link")]
    pub link: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Job id
    pub id: String,

    #[arg(short = 's', long = "status")]
    pub status: Option<JobStatus>,

    #[arg(short = 'c', long = "company")]
    pub company: Option<String>,

    #[arg(short = 'r', long = "role")]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_defaults_to_all() {
        let cli = Cli::try_parse_from(["jobs", "list"]).unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.status, StatusFilter::All);
                assert!(args.date.is_none());
            },
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_list_with_filters() {
        let cli =
            Cli::try_parse_from(["jobs", "list", "--status", "offer", "--date", "2024-02"]).unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.status, StatusFilter::Only(JobStatus::Offer));
                assert_eq!(args.date.as_deref(), Some("2024-02"));
            },
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_add_defaults_status_to_applied() {
        let cli = Cli::try_parse_from(["jobs", "add", "-c", "Acme", "-r", "Eng"]).unwrap();
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.status, JobStatus::Applied);
                assert!(args.date.is_none());
            },
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_add_rejects_unknown_status() {
        let result =
            Cli::try_parse_from(["jobs", "add", "-c", "Acme", "-r", "Eng", "-s", "ghosted"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_and_global_flags() {
        let cli = Cli::try_parse_from([
            "jobs",
            "update",
            "65a1f0",
            "--status",
            "Interview",
            "--no-color",
            "--url",
            "http://jobs.local",
        ])
        .unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.url.as_deref(), Some("http://jobs.local"));
        match cli.command {
            Command::Update(args) => {
                assert_eq!(args.id, "65a1f0");
                assert_eq!(args.status, Some(JobStatus::Interview));
                assert!(args.company.is_none());
            },
            other => panic!("unexpected command {:?}", other),
        }
    }
}
