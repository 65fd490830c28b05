//! Claim chart command implementation.

use crate::cli::ChartArgs;
use crate::commands::read_text_arg;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use priorart_claims::{chart_and_diff, TokenSetScorer};
use std::fs;

/// Execute the chart command.
pub fn execute_chart(args: ChartArgs, formatter: &Formatter) -> Result<()> {
    let claim = read_text_arg(&args.claim)?;
    if claim.trim().is_empty() {
        return Err(CliError::InvalidInput("Claim text is empty".to_string()));
    }

    let contents = fs::read_to_string(&args.prior)?;
    let prior_claims = split_paragraphs(&contents);
    if prior_claims.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No prior claims found in {}",
            args.prior.display()
        )));
    }

    let rows = chart_and_diff(&claim, &prior_claims, &TokenSetScorer);

    println!("{}", formatter.format_chart(&rows)?);

    Ok(())
}

/// One claim per blank-line-separated paragraph.
fn split_paragraphs(contents: &str) -> Vec<String> {
    contents
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}
