//! Result presentation: JSON envelope on stdout or flattened CSV rows.
//!
//! The CSV layout mirrors human review workflows: one row per hit, with the
//! claim's id, term, status, and count repeated, plus a single row for
//! claims with no hits so every claim appears in the export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::judge::JudgeOpinion;
use crate::matcher::{ClaimResult, ValidationOptions};

/// JSON report envelope printed to stdout
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Human-readable description of the document source
    pub doc: String,
    pub checked_at: DateTime<Utc>,
    pub options: &'a ValidationOptions,
    pub results: &'a [ClaimResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judge: Option<&'a JudgeOpinion>,
}

impl<'a> Report<'a> {
    pub fn new(
        doc: String,
        options: &'a ValidationOptions,
        results: &'a [ClaimResult],
        judge: Option<&'a JudgeOpinion>,
    ) -> Self {
        Self {
            doc,
            checked_at: Utc::now(),
            options,
            results,
            judge,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }
}

/// One flattened CSV row
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    claim_id: &'a str,
    term: &'a str,
    status: &'a str,
    count: usize,
    page: Option<usize>,
    offset: Option<usize>,
    context: Option<&'a str>,
}

/// Write one row per hit (or one hit-less row per unmatched claim) to `path`.
pub fn write_csv(results: &[ClaimResult], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    for result in results {
        if result.hits.is_empty() {
            writer.serialize(CsvRow {
                claim_id: &result.claim_id,
                term: &result.term,
                status: result.status.as_str(),
                count: result.count,
                page: None,
                offset: None,
                context: None,
            })?;
        } else {
            for hit in &result.hits {
                writer.serialize(CsvRow {
                    claim_id: &result.claim_id,
                    term: &result.term,
                    status: result.status.as_str(),
                    count: result.count,
                    page: hit.page,
                    offset: Some(hit.offset),
                    context: Some(&hit.context),
                })?;
            }
        }
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
