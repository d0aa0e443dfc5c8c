//! xlsx workbooks: one sheet per table plus a `Summary` sheet.
//!
//! Sheets carry the same columns as the CSV archive and every cell is written
//! as text, so a workbook reads back through the same row shapes.

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use chrono::NaiveTime;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::io::Cursor;

use super::csv_rows::Table;
use super::export::{summary_rows, table_csv};
use super::import::document_from_tables;
use super::interchange_model::{ImportDocument, InterchangeError, TripExport};
use crate::errors::Result;

pub const SUMMARY_SHEET: &str = "Summary";

const SUMMARY_COLUMN_WIDTH: f64 = 32.0;

fn write_rows<I, R, S>(worksheet: &mut Worksheet, rows: I, header: &Format) -> Result<()>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (row_index, row) in rows.into_iter().enumerate() {
        let row_number = u32::try_from(row_index).unwrap_or(u32::MAX);
        for (col_index, cell) in row.into_iter().enumerate() {
            let cell = cell.as_ref();
            if cell.is_empty() {
                continue;
            }
            let col = u16::try_from(col_index).unwrap_or(u16::MAX);
            if row_index == 0 {
                worksheet.write_string_with_format(row_number, col, cell, header)?;
            } else {
                worksheet.write_string(row_number, col, cell)?;
            }
        }
    }
    Ok(())
}

fn csv_records(bytes: &[u8]) -> Result<Vec<csv::StringRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes);
    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }
    Ok(records)
}

/// Every table gets a sheet; tables without rows are left blank.
pub fn export_xlsx(export: &TripExport) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for table in Table::ALL {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.sheet_name())?;
        if let Some(bytes) = table_csv(export, table)? {
            let records = csv_records(&bytes)?;
            write_rows(worksheet, records.iter().map(|r| r.iter()), &header)?;
        }
    }

    let summary = workbook.add_worksheet();
    summary.set_name(SUMMARY_SHEET)?;
    summary.set_column_width(0, SUMMARY_COLUMN_WIDTH)?;
    summary.set_column_width(1, SUMMARY_COLUMN_WIDTH)?;
    let rows = summary_rows(export)
        .into_iter()
        .map(|(category, value)| [category, value]);
    write_rows(
        summary,
        std::iter::once(["Category".to_string(), "Value".to_string()]).chain(rows),
        &header,
    )?;

    Ok(workbook.save_to_buffer()?)
}

/// Hand-made workbooks may hold typed cells; they are rendered the way the
/// CSV columns spell them.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::DateTime(value) => match value.as_datetime() {
            Some(at) if at.time() == NaiveTime::MIN => at.date().to_string(),
            Some(at) => at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            None => value.as_f64().to_string(),
        },
        other => other.to_string(),
    }
}

fn range_csv(range: &Range<Data>) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in range.rows() {
        writer.write_record(row.iter().map(cell_text))?;
    }
    writer
        .into_inner()
        .map_err(|e| InterchangeError::Csv(e.to_string()).into())
}

/// Reads the sheets written by [`export_xlsx`]. Missing sheets are treated as
/// empty and the summary sheet is ignored.
pub fn parse_xlsx(bytes: &[u8]) -> Result<ImportDocument> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let sheet_names = workbook.sheet_names();

    document_from_tables(|table| {
        let name = table.sheet_name();
        if !sheet_names.iter().any(|sheet| sheet == name) {
            return Ok(None);
        }
        let range = workbook.worksheet_range(name)?;
        if range.is_empty() {
            return Ok(None);
        }
        range_csv(&range).map(Some)
    })
}
