use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "ds3cli", version, long_version = LONG_VERSION)]
#[command(about = "Render BlackPearl command results as stable JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Proceed even when BlackPearl reports tape failures
    #[arg(long, global = true)]
    pub force: bool,

    /// Directory holding config.json (defaults to $DS3CLI_HOME, then the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

/// Where the captured backend response is read from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Response file, or `-` for stdin
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tapes
    GetTapes(InputArgs),

    /// List the objects of a bucket
    GetBucket(InputArgs),

    /// List the buckets of the account
    GetService(InputArgs),

    /// Show an object's metadata and where it lives
    HeadObject(InputArgs),

    /// Show BlackPearl build and identity information
    SystemInformation(InputArgs),

    /// List storage domains
    GetStorageDomains(InputArgs),

    /// List active jobs
    GetJobs(InputArgs),

    /// Report the outcome of a bulk put
    PutBulk(InputArgs),

    /// Delete a tape after checking for tape failures
    DeleteTape {
        /// Tape id
        #[arg(long)]
        id: Uuid,

        /// Tape failures reported by BlackPearl (JSON list of {tapeId, errorMessage})
        #[arg(long, value_name = "FILE")]
        failures: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (verbose or force)
        key: Option<String>,

        /// Value to store (true or false); prints the current value if omitted
        value: Option<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::GetTapes(_) => "get-tapes",
            Commands::GetBucket(_) => "get-bucket",
            Commands::GetService(_) => "get-service",
            Commands::HeadObject(_) => "head-object",
            Commands::SystemInformation(_) => "system-information",
            Commands::GetStorageDomains(_) => "get-storage-domains",
            Commands::GetJobs(_) => "get-jobs",
            Commands::PutBulk(_) => "put-bulk",
            Commands::DeleteTape { .. } => "delete-tape",
            Commands::Config { .. } => "config",
        }
    }
}
