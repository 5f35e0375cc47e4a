// Report generation from a finished comparison

use crate::compare::Comparison;
use crate::diff::ConstantChange;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const NAME_WIDTH: usize = 30;
const VALUE_WIDTH: usize = 50;
const SEPARATOR_WIDTH: usize = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    pub old_version: String,
    pub new_version: String,
    pub old_count: usize,
    pub new_count: usize,
    pub changes: Vec<ConstantChange>,
}

impl From<&Comparison> for ReportData {
    fn from(comparison: &Comparison) -> Self {
        Self {
            old_version: comparison.old.version.clone(),
            new_version: comparison.new.version.clone(),
            old_count: comparison.old.constants.len(),
            new_count: comparison.new.constants.len(),
            changes: comparison.changes.clone(),
        }
    }
}

/// Fixed-width table: one header row, a separator, then one row per change
pub fn generate_text_report(changes: &[ConstantChange], old_label: &str, new_label: &str) -> String {
    let mut report = String::new();

    report.push_str(&format_row("Constant Name", old_label, new_label));
    report.push_str(&"=".repeat(SEPARATOR_WIDTH));
    report.push('\n');

    for change in changes {
        report.push_str(&format_row(&change.name, &change.old_value, &change.new_value));
    }

    report
}

pub fn generate_json_report(data: &ReportData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

pub fn generate_report(
    comparison: &Comparison,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(
            &comparison.changes,
            &comparison.old.version,
            &comparison.new.version,
        )),
        ReportFormat::Json => {
            let mut json = generate_json_report(&ReportData::from(comparison))?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn format_row(name: &str, old_value: &str, new_value: &str) -> String {
    format!(
        "{:<name_w$} | {:<value_w$} | {:<value_w$}\n",
        name,
        old_value,
        new_value,
        name_w = NAME_WIDTH,
        value_w = VALUE_WIDTH
    )
}
