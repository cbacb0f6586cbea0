//! Output formatting for the CLI.

use crate::cli::OutputFormat;
use crate::error::Result;
use clausewise_analyzer::{AnalysisResult, FlatRecord};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Maximum clause length shown in the table view.
const TABLE_CLAUSE_WIDTH: usize = 60;

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

    /// Format an analysis result.
    pub fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let records: Vec<FlatRecord> = result.records.iter().map(FlatRecord::from).collect();
        match self.format {
            OutputFormat::Table => Ok(self.format_table(records)),
            OutputFormat::Json => self.format_json(&records),
            OutputFormat::Csv => Ok(self.format_csv(&records)),
        }
    }

    /// Risk summary table, sorted by descending score.
    fn format_table(&self, mut records: Vec<FlatRecord>) -> String {
        records.sort_by(|a, b| b.risk_score.cmp(&a.risk_score).then(a.id.cmp(&b.id)));

        let mut builder = Builder::default();
        builder.push_record(["ID", "Tier", "Score", "Category", "Conf", "Clause", "Reasons"]);

        for record in &records {
            builder.push_record([
                record.id.to_string(),
                self.tier_cell(&record.risk_tier),
                record.risk_score.to_string(),
                record.category.clone(),
                format!("{:.3}", record.category_confidence),
                truncate(&record.clause, TABLE_CLAUSE_WIDTH),
                record.reasons.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn tier_cell(&self, tier: &str) -> String {
        if !self.color_enabled {
            return tier.to_string();
        }
        match tier {
            "High" => tier.red().bold().to_string(),
            "Medium" => tier.yellow().to_string(),
            _ => tier.green().to_string(),
        }
    }

    /// JSON array of flat records, in source order.
    fn format_json(&self, records: &[FlatRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }

    /// CSV with one row per clause, in source order. The entity list is
    /// embedded as a JSON string, matching the JSON export shape.
    fn format_csv(&self, records: &[FlatRecord]) -> String {
        let mut out = String::from(
            "id,clause,category,category_confidence,risk_tier,risk_score,reasons,entities\n",
        );
        for record in records {
            let entities =
                serde_json::to_string(&record.entities).unwrap_or_else(|_| "[]".to_string());
            let row = [
                record.id.to_string(),
                csv_field(&record.clause),
                record.category.clone(),
                format!("{:.3}", record.category_confidence),
                record.risk_tier.clone(),
                record.risk_score.to_string(),
                csv_field(&record.reasons),
                csv_field(&entities),
            ];
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Truncate to `max` characters, appending an ellipsis when shortened.
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        value.to_string()
    } else {
        let shortened: String = value.chars().take(max).collect();
        format!("{}...", shortened)
    }
}
