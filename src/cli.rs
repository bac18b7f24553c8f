use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "job-board-api", version, about = "REST API for job postings backed by a JSON file")]
pub struct Cli {
    /// Interface to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// JSON data file (overrides DB_PATH)
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Directory for log files (overrides LOG_DIR)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Overwrite the data file with the seed records and exit
    Seed,
}
