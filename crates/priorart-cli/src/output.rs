//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use priorart_domain::{ComparisonRow, PatentRecord, ProcessConditions};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a similarity-ranked search result.
    pub fn format_search(&self, records: &[PatentRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_records_json(records),
            OutputFormat::Table => self.format_search_table(records),
            OutputFormat::Quiet => Ok(Self::format_ids(records)),
        }
    }

    /// Format a landscape result.
    pub fn format_landscape(&self, records: &[PatentRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_records_json(records),
            OutputFormat::Table => self.format_landscape_table(records),
            OutputFormat::Quiet => Ok(Self::format_ids(records)),
        }
    }

    /// Format a claim chart.
    pub fn format_chart(&self, rows: &[ComparisonRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_chart_json(rows),
            OutputFormat::Table => self.format_chart_table(rows),
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|r| r.sim.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format records as JSON.
    fn format_records_json(&self, records: &[PatentRecord]) -> Result<String> {
        let json_records: Vec<serde_json::Value> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id,
                    "title": r.title,
                    "date_published": r.date_published,
                    "score": r.score,
                    "elements": r.elements,
                    "classifications": r.classifications,
                    "conditions": r.conditions.as_ref().map(conditions_json),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_records)?)
    }

    /// Format search records as a table.
    fn format_search_table(&self, records: &[PatentRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(self.colorize("No records found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Title", "Date", "Score", "Elements"]);

        for record in records {
            builder.push_record([
                &record.id,
                &record.title,
                record.date_published.as_deref().unwrap_or(""),
                &record.score.to_string(),
                &record.elements.join("; "),
            ]);
        }

        Ok(Self::style_table(builder))
    }

    /// Format landscape records as a table.
    fn format_landscape_table(&self, records: &[PatentRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(self.colorize("No records found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Publication", "Title", "Conditions", "CPC"]);

        for record in records {
            let conditions = record
                .conditions
                .as_ref()
                .map(conditions_summary)
                .unwrap_or_default();
            builder.push_record([
                &record.id,
                &record.title,
                &conditions,
                &record.classifications.join(", "),
            ]);
        }

        Ok(Self::style_table(builder))
    }

    /// Format chart rows as a table.
    fn format_chart_table(&self, rows: &[ComparisonRow]) -> Result<String> {
        if rows.is_empty() {
            return Ok(self.colorize("No prior claims to chart.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Score", "Overlap", "Missing", "Extra"]);

        for (idx, row) in rows.iter().enumerate() {
            builder.push_record([
                &(idx + 1).to_string(),
                &row.sim.to_string(),
                &row.overlap.join("; "),
                &row.missing.join("; "),
                &row.extra.join("; "),
            ]);
        }

        Ok(Self::style_table(builder))
    }

    /// Format chart rows as JSON.
    fn format_chart_json(&self, rows: &[ComparisonRow]) -> Result<String> {
        let json_rows: Vec<serde_json::Value> = rows
            .iter()
            .map(|r| {
                serde_json::json!({
                    "sim": r.sim,
                    "overlap": r.overlap,
                    "missing": r.missing,
                    "extra": r.extra,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_rows)?)
    }

    /// Identifiers only, one per line.
    fn format_ids(records: &[PatentRecord]) -> String {
        records
            .iter()
            .map(|r| r.id.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn style_table(builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Compact one-line summary of extracted conditions.
fn conditions_summary(cond: &ProcessConditions) -> String {
    let mut parts = Vec::new();

    if !cond.oxygen.is_empty() {
        let o2: Vec<String> = cond
            .oxygen
            .iter()
            .map(|o| format!("{} {}", o.amount, o.unit))
            .collect();
        parts.push(format!("O2: {}", o2.join(", ")));
    }

    if !cond.temperatures_c.is_empty() {
        parts.push(format!("T: {}C", cond.temperatures_c.join("C, ")));
    }

    if !cond.layers.is_empty() {
        let layers: Vec<&str> = cond.layers.iter().map(|l| l.raw.as_str()).collect();
        parts.push(format!("layers: {}", layers.join(", ")));
    }

    parts.join("; ")
}

fn conditions_json(cond: &ProcessConditions) -> serde_json::Value {
    serde_json::json!({
        "oxygen": cond.oxygen.iter().map(|o| {
            serde_json::json!({"amount": o.amount, "unit": o.unit})
        }).collect::<Vec<_>>(),
        "temperatures_c": cond.temperatures_c,
        "layers": cond.layers.iter().map(|l| {
            serde_json::json!({"raw": l.raw, "count": l.count})
        }).collect::<Vec<_>>(),
    })
}
