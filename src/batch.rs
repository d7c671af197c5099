//! Directory-level driver
//!
//! Loads every judgment in a directory, parses each one independently and
//! writes the summary table. A document that cannot be read is logged and
//! skipped; the rest of the batch carries on.

use crate::config::{OutputConfig, PutusanConfig};
use crate::document::{list_documents, Document};
use crate::error::{PutusanError, Result};
use crate::extraction::{DocumentParser, ExtractionResult};
use crate::output::{write_table, TableRow};
use std::path::{Path, PathBuf};

/// A document the batch had to skip.
#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub error: PutusanError,
}

/// Outcome of parsing a list of files.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<ExtractionResult>,
    pub failures: Vec<Failure>,
}

impl BatchReport {
    /// Table rows, numbered from 1 in processing order.
    pub fn rows(&self, output: &OutputConfig) -> Vec<TableRow> {
        self.results
            .iter()
            .enumerate()
            .map(|(index, result)| TableRow::from_result(index + 1, result, output))
            .collect()
    }
}

/// What [`extract_directory`] did.
#[derive(Debug)]
pub struct BatchSummary {
    pub written: PathBuf,
    pub processed: usize,
    pub failures: Vec<Failure>,
}

/// Parse each path in order; unreadable files are recorded, not fatal.
pub fn run_batch(paths: &[PathBuf], parser: &DocumentParser) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        match Document::load(path) {
            Ok(document) => {
                let result = parser.parse(&document);
                tracing::info!(
                    document = document.id(),
                    evidence_items = result.evidence.len(),
                    "processed"
                );
                report.results.push(result);
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "skipping document");
                report.failures.push(Failure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    report
}

/// Run the whole pipeline for `input_dir` and write the table described by
/// `config.output`.
pub fn extract_directory(input_dir: &Path, config: &PutusanConfig) -> Result<BatchSummary> {
    let paths = list_documents(input_dir, &config.input.extension)?;
    tracing::info!(dir = %input_dir.display(), files = paths.len(), "starting batch");

    let parser = DocumentParser::from_config(config);
    let report = run_batch(&paths, &parser);
    if report.results.is_empty() {
        return Err(PutusanError::EmptyBatch);
    }

    let rows = report.rows(&config.output);
    let written = write_table(
        &rows,
        &config.output.path,
        config.output.format,
        &config.output.sheet_name,
    )?;
    tracing::info!(path = %written.display(), rows = rows.len(), "table written");

    Ok(BatchSummary {
        written,
        processed: rows.len(),
        failures: report.failures,
    })
}
