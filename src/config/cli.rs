use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bowling-analytics")]
#[command(about = "Validate bowling frames and build dashboard statistics")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Check a single frame score against its strike/spare flags
    Validate {
        #[arg(long, allow_hyphen_values = true)]
        score: i64,
        #[arg(long)]
        strike: bool,
        #[arg(long)]
        spare: bool,
    },
    /// Import games from a JSON or CSV file and write a dashboard report
    Stats {
        #[arg(long)]
        input: String,
        #[arg(long, help = "Directory for the report (overrides output.directory)")]
        output: Option<String>,
    },
    /// Print round(part / total * 100)
    Percent {
        #[arg(allow_hyphen_values = true)]
        part: f64,
        #[arg(allow_hyphen_values = true)]
        total: f64,
    },
    /// Print a number with digit grouping
    Format {
        #[arg(allow_hyphen_values = true)]
        number: f64,
    },
}
