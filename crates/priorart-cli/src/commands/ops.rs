//! OPS landscape command implementation.

use crate::cli::OpsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use priorart_ops::{OpsClient, OpsConfig};

/// Execute the ops command.
pub async fn execute_ops(args: OpsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let ops_config = OpsConfig {
        endpoint: config.ops.endpoint.clone(),
        api_key: args.key,
        api_secret: args.secret,
        size_limit: config.ops.size,
    };
    let client = OpsClient::new(ops_config);

    let size = args.size.unwrap_or(config.ops.size);
    let records = client.search_ops(&args.query, size).await?;

    println!("{}", formatter.format_landscape(&records)?);

    Ok(())
}
