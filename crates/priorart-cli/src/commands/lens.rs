//! Lens search command implementation.

use crate::cli::LensArgs;
use crate::commands::read_text_arg;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use priorart_lens::{LensClient, LensConfig};

/// Execute the lens command.
pub async fn execute_lens(args: LensArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let invention = read_text_arg(&args.invention)?;

    let lens_config = LensConfig {
        endpoint: config.lens.endpoint.clone(),
        token: args.token,
        size_limit: config.lens.size,
    };
    let client = LensClient::new(lens_config);

    let size = args.size.unwrap_or(config.lens.size);
    let records = client.search_lens(&args.query, size, invention.trim()).await?;

    println!("{}", formatter.format_search(&records)?);

    Ok(())
}
