//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Priorart CLI - patent search and claim-chart comparison.
#[derive(Debug, Parser)]
#[command(name = "priorart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search The Lens and print a similarity-ranked table
    Lens(LensArgs),

    /// Search EPO OPS and print a landscape table
    Ops(OpsArgs),

    /// Chart a claim against prior-art claims from a file
    Chart(ChartArgs),
}

/// Arguments for the lens command.
#[derive(Debug, Parser)]
pub struct LensArgs {
    /// Search expression supported by Lens
    pub query: String,

    /// Number of records to request (defaults from configuration)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Description of your invention, inline or @file; enables scoring
    #[arg(short, long, default_value = "")]
    pub invention: String,

    /// Lens API bearer token
    #[arg(long, env = "LENS_API_TOKEN", hide_env_values = true)]
    pub token: String,
}

/// Arguments for the ops command.
#[derive(Debug, Parser)]
pub struct OpsArgs {
    /// Search expression in CQL form
    pub query: String,

    /// Number of records to request (defaults from configuration)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// EPO OPS consumer key
    #[arg(long, env = "PATENT_CLIENT_EPO_API_KEY", hide_env_values = true)]
    pub key: String,

    /// EPO OPS consumer secret
    #[arg(long, env = "PATENT_CLIENT_EPO_SECRET", hide_env_values = true)]
    pub secret: String,
}

/// Arguments for the chart command.
#[derive(Debug, Parser)]
pub struct ChartArgs {
    /// Your claim text, inline or @file
    pub claim: String,

    /// File of prior-art claims, separated by blank lines
    #[arg(short, long)]
    pub prior: PathBuf,
}
