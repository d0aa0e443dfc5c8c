//! Interchange module - exporting trips to files and importing them back.

mod csv_rows;
mod export;
mod import;
mod interchange_model;
mod interchange_service;
mod interchange_traits;
mod spreadsheet;

#[cfg(test)]
mod interchange_tests;

pub use export::{export_csv_archive, export_json, render, suggested_file_name, summary_rows};
pub use import::{parse, parse_csv_archive, parse_destinations_csv, parse_json};
pub use interchange_model::{
    ExportFormat, ExportedFile, ImportDocument, ImportFormat, ImportSummary, InterchangeError,
    TripExport, TripHeader,
};
pub use spreadsheet::{export_xlsx, parse_xlsx, SUMMARY_SHEET};
pub use interchange_service::{InterchangeRepositories, InterchangeService};
pub use interchange_traits::InterchangeServiceTrait;
