// JSON report output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::classify::ClassificationReport;

/// Serialize a report as pretty-printed JSON.
pub fn to_json(report: &ClassificationReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Write a report as JSON to `path`, creating parent directories as needed.
pub fn write_report(report: &ClassificationReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(path, to_json(report)?)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
