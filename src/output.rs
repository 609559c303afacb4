//! Spreadsheet output for generated job tables.
//!
//! The format follows the file extension: `.xlsx` writes a single-sheet
//! workbook, `.csv` a plain comma separated file. Both get a header row and no
//! index column.

use std::fs;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};

use crate::error::FixtureError;
use crate::generator::{Cell, JobTable};
use crate::traits::TableSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Xlsx,
    Csv,
}

impl SpreadsheetFormat {
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("xlsx") => Ok(SpreadsheetFormat::Xlsx),
            Some("csv") => Ok(SpreadsheetFormat::Csv),
            _ => Err(FixtureError::InvalidConfig(format!(
                "unsupported output format: {}",
                path.display()
            ))),
        }
    }
}

/// Writes job tables to disk, creating parent directories as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetWriter;

impl TableSink for SpreadsheetWriter {
    fn check_path(&self, path: &Path) -> Result<(), FixtureError> {
        SpreadsheetFormat::from_path(path).map(|_| ())
    }

    fn write(&self, table: &JobTable, path: &Path) -> Result<(), FixtureError> {
        let format = SpreadsheetFormat::from_path(path)?;
        let rows = table.rows()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        match format {
            SpreadsheetFormat::Xlsx => write_xlsx(table.headers(), &rows, path),
            SpreadsheetFormat::Csv => {
                let file = fs::File::create(path)?;
                write_csv(table.headers(), &rows, file)
            }
        }
    }
}

/// Writes the table as CSV into any writer.
pub fn write_csv<W: Write>(headers: &[&str], rows: &[Vec<Cell>], writer: W) -> Result<(), FixtureError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(headers)?;

    for row in rows {
        writer.write_record(row.iter().map(cell_text))?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders a whole table as CSV bytes.
pub fn table_to_csv(table: &JobTable) -> Result<Vec<u8>, FixtureError> {
    let mut buffer = Vec::new();
    write_csv(table.headers(), &table.rows()?, &mut buffer)?;
    Ok(buffer)
}

fn write_xlsx(headers: &[&str], rows: &[Vec<Cell>], path: &Path) -> Result<(), FixtureError> {
    let mut workbook = Workbook::new();

    // Pinned so the same table always produces the same bytes.
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let row_num = row_idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Int(value) => {
                    worksheet.write_number(row_num, col, *value as f64)?;
                }
                Cell::Text(value) => {
                    worksheet.write_string(row_num, col, value)?;
                }
                Cell::Empty => {}
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Int(value) => value.to_string(),
        Cell::Text(value) => value.clone(),
        Cell::Empty => String::new(),
    }
}
