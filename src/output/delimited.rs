use super::{TableRow, TableWriter, COLUMNS};
use crate::error::{PutusanError, Result};
use std::path::Path;

/// Comma-separated rows with a header line.
pub struct CsvWriter;

impl TableWriter for CsvWriter {
    fn name(&self) -> &str {
        "csv"
    }

    fn write(&self, rows: &[TableRow], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(COLUMNS)?;
        for row in rows {
            writer.write_record(row.cells())?;
        }
        writer.flush().map_err(|e| PutusanError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_rows;

    #[test]
    fn writes_header_and_quoted_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        CsvWriter.write(&sample_rows(), &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, COLUMNS);

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][4], "1 paket sabu; 1 buah pipet kaca");
        assert_eq!(&records[1][2], "Tidak ditemukan");
    }
}
