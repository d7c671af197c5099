//! Table output
//!
//! Extraction results are flattened into [`TableRow`]s (absent fields become
//! the configured "not found" marker) and handed to a [`TableWriter`] for the
//! chosen [`OutputFormat`].

mod delimited;
mod json;
mod xlsx;

pub use delimited::CsvWriter;
pub use json::JsonWriter;
pub use xlsx::XlsxWriter;

use crate::cleaning::truncate_on_word;
use crate::config::OutputConfig;
use crate::error::{PutusanError, Result};
use crate::extraction::ExtractionResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Column headers, in cell order.
pub const COLUMNS: [&str; 6] = [
    "no",
    "document",
    "case_number",
    "court_name",
    "evidence_list",
    "verdict_text",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Xlsx,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }
}

impl FromStr for OutputFormat {
    type Err = PutusanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(PutusanError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One display-ready row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub no: usize,
    pub document: String,
    pub case_number: String,
    pub court_name: String,
    pub evidence_list: String,
    pub verdict_text: String,
}

impl TableRow {
    /// Flatten `result` as row number `no` (1-based).
    pub fn from_result(no: usize, result: &ExtractionResult, output: &OutputConfig) -> Self {
        let or_marker =
            |value: &Option<String>| value.clone().unwrap_or_else(|| output.not_found.clone());

        let evidence_list = if result.evidence.is_empty() {
            output.not_found.clone()
        } else {
            truncate_on_word(
                &result.evidence.join(&output.evidence_separator),
                output.max_evidence_chars,
            )
        };

        TableRow {
            no,
            document: result.document_id.clone(),
            case_number: or_marker(&result.case_number),
            court_name: or_marker(&result.court_name),
            evidence_list,
            verdict_text: or_marker(&result.verdict),
        }
    }

    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 6] {
        [
            self.no.to_string(),
            self.document.clone(),
            self.case_number.clone(),
            self.court_name.clone(),
            self.evidence_list.clone(),
            self.verdict_text.clone(),
        ]
    }
}

/// A sink for the summary table.
pub trait TableWriter {
    /// Format name as accepted on the command line.
    fn name(&self) -> &str;

    fn write(&self, rows: &[TableRow], path: &Path) -> Result<()>;
}

pub fn writer_for(format: OutputFormat, sheet_name: &str) -> Box<dyn TableWriter> {
    match format {
        OutputFormat::Xlsx => Box::new(XlsxWriter::new(sheet_name)),
        OutputFormat::Csv => Box::new(CsvWriter),
        OutputFormat::Json => Box::new(JsonWriter),
    }
}

/// Write `rows` to `path`, returning the path actually written.
///
/// A target that is locked (typically the spreadsheet open in another
/// program) is retried once under a timestamped sibling name.
pub fn write_table(
    rows: &[TableRow],
    path: &Path,
    format: OutputFormat,
    sheet_name: &str,
) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PutusanError::io(parent, e))?;
    }

    let writer = writer_for(format, sheet_name);
    tracing::debug!(format = writer.name(), path = %path.display(), rows = rows.len(), "writing table");
    match writer.write(rows, path) {
        Ok(()) => Ok(path.to_path_buf()),
        Err(err) if err.is_permission_denied() => {
            let fallback = timestamped_sibling(path, chrono::Local::now().naive_local());
            tracing::warn!(
                target = %path.display(),
                fallback = %fallback.display(),
                "output locked, writing fallback file"
            );
            writer.write(rows, &fallback)?;
            Ok(fallback)
        }
        Err(err) => Err(err),
    }
}

/// `dir/putusan_summary.xlsx` → `dir/putusan_summary_20240131_235959.xlsx`
pub fn timestamped_sibling(path: &Path, at: chrono::NaiveDateTime) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "putusan_summary".to_string());
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, at.format("%Y%m%d_%H%M%S"), ext.to_string_lossy()),
        None => format!("{}_{}", stem, at.format("%Y%m%d_%H%M%S")),
    };
    path.with_file_name(name)
}
