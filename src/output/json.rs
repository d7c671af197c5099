use super::{TableRow, TableWriter};
use crate::error::{PutusanError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pretty-printed JSON array of rows.
pub struct JsonWriter;

impl TableWriter for JsonWriter {
    fn name(&self) -> &str {
        "json"
    }

    fn write(&self, rows: &[TableRow], path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| PutusanError::io(path, e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, rows)?;
        out.write_all(b"\n").map_err(|e| PutusanError::io(path, e))?;
        out.flush().map_err(|e| PutusanError::io(path, e))
    }
}
