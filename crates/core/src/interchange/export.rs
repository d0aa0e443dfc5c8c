//! Rendering a [`TripExport`] as JSON, a ZIP of CSV files, or an xlsx workbook.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::csv_rows::{DestinationRow, HotelRow, Table};
use super::interchange_model::{ExportFormat, InterchangeError, TripExport};
use super::spreadsheet::export_xlsx;
use crate::errors::Result;

pub const SUMMARY_FILE: &str = "summary.csv";

/// `{trip name with underscores}_export_{YYYYmmdd_HHMMSS}.{ext}`
pub fn suggested_file_name(trip_name: &str, format: ExportFormat, at: NaiveDateTime) -> String {
    let stem = trip_name.trim().replace(' ', "_");
    let stem = if stem.is_empty() { "trip" } else { stem.as_str() };
    format!(
        "{}_export_{}.{}",
        stem,
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

pub fn render(export: &TripExport, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => export_json(export),
        ExportFormat::CsvArchive => export_csv_archive(export),
        ExportFormat::Xlsx => export_xlsx(export),
    }
}

pub fn export_json(export: &TripExport) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(export)?)
}

pub(crate) fn write_csv<T, I>(rows: I) -> Result<Vec<u8>>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| InterchangeError::Csv(e.to_string()).into())
}

/// CSV bytes for one table, or `None` when the export has no rows for it.
/// The trip table is always present.
pub(crate) fn table_csv(export: &TripExport, table: Table) -> Result<Option<Vec<u8>>> {
    let bytes = match table {
        Table::Trip => write_csv([&export.trip])?,
        Table::Destinations if !export.destinations.is_empty() => {
            write_csv(export.destinations.iter().map(DestinationRow::from))?
        }
        Table::Activities if !export.activities.is_empty() => write_csv(&export.activities)?,
        Table::Transportation if !export.transportation.is_empty() => {
            write_csv(&export.transportation)?
        }
        Table::BudgetCategories if !export.budget_categories.is_empty() => {
            write_csv(&export.budget_categories)?
        }
        Table::Expenses if !export.expenses.is_empty() => write_csv(&export.expenses)?,
        Table::Hotels if !export.hotels.is_empty() => {
            write_csv(export.hotels.iter().map(HotelRow::from))?
        }
        Table::EmergencyContacts if !export.emergency_contacts.is_empty() => {
            write_csv(&export.emergency_contacts)?
        }
        _ => return Ok(None),
    };
    Ok(Some(bytes))
}

/// One CSV per non-empty table, plus a summary sheet.
pub fn export_csv_archive(export: &TripExport) -> Result<Vec<u8>> {
    let mut tables = Vec::new();
    for table in Table::ALL {
        if let Some(bytes) = table_csv(export, table)? {
            tables.push((table.file_name(), bytes));
        }
    }
    tables.push((SUMMARY_FILE, summary_csv(export)?));

    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, bytes) in tables {
        archive.start_file(name, options)?;
        archive.write_all(&bytes)?;
    }
    Ok(archive.finish()?.into_inner())
}

/// Two-column Category/Value overview of the export.
pub fn summary_rows(export: &TripExport) -> Vec<(String, String)> {
    let trip = &export.trip;
    let or_na = |value: Option<String>| value.unwrap_or_else(|| "N/A".to_string());
    let blank = || (String::new(), String::new());

    let mut rows = vec![
        ("TRIP OVERVIEW".to_string(), String::new()),
        ("Trip Name".to_string(), trip.name.clone()),
        ("Description".to_string(), or_na(trip.description.clone())),
        (
            "Start Date".to_string(),
            or_na(trip.start_date.map(|d| d.to_string())),
        ),
        (
            "End Date".to_string(),
            or_na(trip.end_date.map(|d| d.to_string())),
        ),
        (
            "Total Budget".to_string(),
            format!("${:.0}", trip.total_budget),
        ),
        blank(),
        ("STATISTICS".to_string(), String::new()),
        (
            "Total Destinations".to_string(),
            export.destinations.len().to_string(),
        ),
        (
            "Total Activities".to_string(),
            export.activities.len().to_string(),
        ),
        (
            "Transportation Segments".to_string(),
            export.transportation.len().to_string(),
        ),
        ("Hotel Bookings".to_string(), export.hotels.len().to_string()),
        blank(),
    ];

    let total_expenses: f64 = export.expenses.iter().map(|e| e.amount).sum();
    let total_hotel_costs: f64 = export.hotels.iter().map(|h| h.total_cost).sum();
    rows.extend([
        ("BUDGET SUMMARY".to_string(), String::new()),
        (
            "Total Expenses Recorded".to_string(),
            format!("${total_expenses:.2}"),
        ),
        (
            "Total Hotel Costs".to_string(),
            format!("${total_hotel_costs:.2}"),
        ),
        blank(),
        ("DESTINATIONS".to_string(), String::new()),
    ]);

    for destination in &export.destinations {
        let activities = export
            .activities
            .iter()
            .filter(|a| a.destination_id == destination.id)
            .count();
        rows.push((
            destination.label(),
            format!(
                "{} days, {} activities, ${:.0}",
                destination.duration_days.unwrap_or(0),
                activities,
                destination.budget
            ),
        ));
    }
    rows
}

fn summary_csv(export: &TripExport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Category", "Value"])?;
    for (category, value) in summary_rows(export) {
        writer.write_record([category, value])?;
    }
    writer
        .into_inner()
        .map_err(|e| InterchangeError::Csv(e.to_string()).into())
}
