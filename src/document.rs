//! Judgment documents as loaded from disk
//!
//! The PDF-to-text step writes a small header before the body:
//!
//! ```text
//! [case_id: 7]
//! [filename: 185_Pid.Sus_2023_PN_Yyk.pdf]
//!
//! putusan nomor 185/pid.sus/2023/pn yyk ...
//! ```
//!
//! Header lines are split off into [`Document::source_name`] so they never
//! leak into extracted fields.

use crate::error::{PutusanError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

static HEADER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(?P<key>[a-z_]+):\s*(?P<value>[^\]]*)\]\s*$").unwrap());

/// Raw text of one judgment. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: String,
    source_name: Option<String>,
    text: String,
}

impl Document {
    /// Build a document from text already in memory, splitting off the header.
    pub fn new(id: impl Into<String>, raw: &str) -> Self {
        let mut source_name = None;
        let mut body_start = 0;

        for line in raw.split_inclusive('\n') {
            let trimmed = line.trim();
            if trimmed.is_empty() && body_start > 0 {
                body_start += line.len();
                break;
            }
            let Some(caps) = HEADER_LINE.captures(trimmed) else {
                break;
            };
            if &caps["key"] == "filename" {
                source_name = Some(caps["value"].trim().to_string());
            }
            body_start += line.len();
        }

        Document {
            id: id.into(),
            source_name,
            text: raw[body_start..].to_string(),
        }
    }

    /// Read a UTF-8 text file. The file stem becomes the document id.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => PutusanError::InvalidUtf8 {
                path: path.to_path_buf(),
            },
            _ => PutusanError::io(path, e),
        })?;
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Document::new(id, &raw))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Original PDF name recorded by the conversion step, if any.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// List the files in `dir` with the given extension, sorted by name.
pub fn list_documents(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(PutusanError::MissingInputDir(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| PutusanError::io(dir, e))? {
        let path = entry.map_err(|e| PutusanError::io(dir, e))?.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if path.is_file() && matches {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
