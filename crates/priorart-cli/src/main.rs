//! Priorart CLI - patent search and claim-chart comparison.

use clap::Parser;
use priorart_cli::{commands, Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> priorart_cli::Result<()> {
    // Log to stderr so tables and JSON stay clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config from the given path, or the default location
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Lens(args) => commands::execute_lens(args, &config, &formatter).await,
        Command::Ops(args) => commands::execute_ops(args, &config, &formatter).await,
        Command::Chart(args) => commands::execute_chart(args, &formatter),
    }
}
