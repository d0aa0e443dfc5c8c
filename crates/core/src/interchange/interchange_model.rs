//! Portable trip documents and the error type of the import/export path.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::budget::BudgetCategory;
use crate::contacts::EmergencyContact;
use crate::destinations::Destination;
use crate::expenses::Expense;
use crate::hotels::Hotel;
use crate::itinerary::Activity;
use crate::transportation::Transportation;
use crate::trips::Trip;

#[derive(Error, Debug)]
pub enum InterchangeError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid JSON document: {0}")]
    Json(String),

    #[error("Invalid CSV data: {0}")]
    Csv(String),

    #[error("Invalid archive: {0}")]
    Archive(String),

    #[error("Invalid spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

impl From<csv::Error> for crate::errors::Error {
    fn from(err: csv::Error) -> Self {
        InterchangeError::Csv(err.to_string()).into()
    }
}

impl From<zip::result::ZipError> for crate::errors::Error {
    fn from(err: zip::result::ZipError) -> Self {
        InterchangeError::Archive(err.to_string()).into()
    }
}

impl From<rust_xlsxwriter::XlsxError> for crate::errors::Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        InterchangeError::Spreadsheet(err.to_string()).into()
    }
}

impl From<calamine::Error> for crate::errors::Error {
    fn from(err: calamine::Error) -> Self {
        InterchangeError::Spreadsheet(err.to_string()).into()
    }
}

/// Output formats for a trip export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// One pretty-printed JSON document.
    Json,
    /// A ZIP archive holding one CSV file per table plus `summary.csv`.
    CsvArchive,
    /// An xlsx workbook with one sheet per table plus a `Summary` sheet.
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::CsvArchive => "zip",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::CsvArchive => f.write_str("csv"),
            ExportFormat::Xlsx => f.write_str("xlsx"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" | "zip" | "csv_archive" => Ok(ExportFormat::CsvArchive),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            other => Err(format!("Unknown export format: {other}")),
        }
    }
}

/// Input formats accepted by the importer, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    CsvArchive,
    /// A lone CSV file, read as a destinations table.
    DestinationsCsv,
    /// A workbook with one sheet per table. Legacy `.xls` files are read too.
    Xlsx,
}

impl ImportFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self, InterchangeError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(ImportFormat::Json),
            "zip" => Ok(ImportFormat::CsvArchive),
            "csv" => Ok(ImportFormat::DestinationsCsv),
            "xlsx" | "xls" => Ok(ImportFormat::Xlsx),
            _ => Err(InterchangeError::UnsupportedFormat(file_name.to_string())),
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            ImportFormat::Json => "JSON",
            ImportFormat::CsvArchive => "ZIP/CSV files",
            ImportFormat::DestinationsCsv => "CSV file",
            ImportFormat::Xlsx => "Excel file",
        }
    }
}

/// Everything recorded for one trip, as written by the exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripExport {
    pub trip: Trip,
    pub destinations: Vec<Destination>,
    pub activities: Vec<Activity>,
    pub transportation: Vec<Transportation>,
    pub budget_categories: Vec<BudgetCategory>,
    pub expenses: Vec<Expense>,
    pub hotels: Vec<Hotel>,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub export_timestamp: NaiveDateTime,
}

/// Trip fields read from an import source. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TripHeader {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_budget: Option<f64>,
}

impl From<&Trip> for TripHeader {
    fn from(trip: &Trip) -> Self {
        Self {
            name: Some(trip.name.clone()),
            description: trip.description.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
            total_budget: Some(trip.total_budget),
        }
    }
}

/// Parsed import source. Ids are the source's own and get remapped on insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportDocument {
    #[serde(default)]
    pub trip: Option<TripHeader>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub transportation: Vec<Transportation>,
    #[serde(default)]
    pub budget_categories: Vec<BudgetCategory>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
}

impl From<TripExport> for ImportDocument {
    fn from(export: TripExport) -> Self {
        Self {
            trip: Some(TripHeader::from(&export.trip)),
            destinations: export.destinations,
            activities: export.activities,
            transportation: export.transportation,
            budget_categories: export.budget_categories,
            expenses: export.expenses,
            hotels: export.hotels,
            emergency_contacts: export.emergency_contacts,
        }
    }
}

/// A rendered export ready to be written to disk.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

/// What an import created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub trip: Trip,
    pub destinations: usize,
    pub activities: usize,
    pub transportation: usize,
    pub budget_categories: usize,
    pub expenses: usize,
    pub hotels: usize,
    pub emergency_contacts: usize,
    /// Activities and hotels dropped because their destination was not imported.
    pub skipped: usize,
}

impl ImportSummary {
    pub(crate) fn new(trip: Trip) -> Self {
        Self {
            trip,
            destinations: 0,
            activities: 0,
            transportation: 0,
            budget_categories: 0,
            expenses: 0,
            hotels: 0,
            emergency_contacts: 0,
            skipped: 0,
        }
    }
}
