use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agrofert", version, about = "Fertilizer recommendation engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Produce a fertilizer recommendation for a field
    Recommend {
        /// Path to a JSON file with the field measurements ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Pretty-print the JSON report
        #[arg(short, long)]
        pretty: bool,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config and test the classifier connection
    Check,
}
