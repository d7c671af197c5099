//! Error types for loading judgments and writing tables

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the driver side of the extractor.
///
/// Field extraction itself never fails: a missing field is `None`.
#[derive(Error, Debug)]
pub enum PutusanError {
    /// IO error while reading a judgment or writing a table
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Judgment file is not valid UTF-8
    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    #[error("input directory not found: {0}")]
    MissingInputDir(PathBuf),

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// No document in the batch could be parsed
    #[error("no documents were processed successfully")]
    EmptyBatch,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PutusanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PutusanError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying cause is a permission problem (e.g. the
    /// spreadsheet is open in another application).
    pub fn is_permission_denied(&self) -> bool {
        match self {
            PutusanError::Io { source, .. } => {
                source.kind() == std::io::ErrorKind::PermissionDenied
            }
            PutusanError::Xlsx(rust_xlsxwriter::XlsxError::IoError(e)) => {
                e.kind() == std::io::ErrorKind::PermissionDenied
            }
            PutusanError::Csv(e) => match e.kind() {
                csv::ErrorKind::Io(io) => io.kind() == std::io::ErrorKind::PermissionDenied,
                _ => false,
            },
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PutusanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn permission_denied_across_writers() {
        let locked = || Error::new(ErrorKind::PermissionDenied, "locked");

        assert!(PutusanError::io("out.json", locked()).is_permission_denied());
        assert!(PutusanError::from(rust_xlsxwriter::XlsxError::IoError(locked())).is_permission_denied());
        assert!(PutusanError::from(csv::Error::from(locked())).is_permission_denied());
    }

    #[test]
    fn other_failures_do_not_trigger_fallback() {
        let missing = Error::new(ErrorKind::NotFound, "gone");
        assert!(!PutusanError::from(csv::Error::from(missing)).is_permission_denied());
        assert!(!PutusanError::EmptyBatch.is_permission_denied());
    }
}
