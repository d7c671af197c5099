use super::{TableRow, TableWriter, COLUMNS};
use crate::error::Result;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use std::path::Path;

/// Column widths in characters, in [`COLUMNS`] order.
const WIDTHS: [f64; 6] = [6.0, 14.0, 30.0, 20.0, 60.0, 80.0];

/// Single-sheet workbook with a bold, frozen header row.
pub struct XlsxWriter {
    sheet_name: String,
}

impl XlsxWriter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        XlsxWriter {
            sheet_name: sheet_name.into(),
        }
    }
}

impl TableWriter for XlsxWriter {
    fn name(&self) -> &str {
        "xlsx"
    }

    fn write(&self, rows: &[TableRow], path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(&self.sheet_name)?;

        let header = Format::new().set_bold();
        let wrapped = Format::new().set_text_wrap().set_align(FormatAlign::Top);

        for (col, (title, width)) in COLUMNS.iter().zip(WIDTHS).enumerate() {
            let col = col as u16;
            sheet.write_string_with_format(0, col, *title, &header)?;
            sheet.set_column_width(col, width)?;
        }
        sheet.set_freeze_panes(1, 0)?;

        for (index, row) in rows.iter().enumerate() {
            let line = index as u32 + 1;
            sheet.write_number(line, 0, row.no as f64)?;
            for (col, cell) in row.cells().iter().enumerate().skip(1) {
                sheet.write_string_with_format(line, col as u16, cell, &wrapped)?;
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}
