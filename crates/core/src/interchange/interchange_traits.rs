use async_trait::async_trait;

use super::interchange_model::{
    ExportFormat, ExportedFile, ImportDocument, ImportFormat, ImportSummary, TripExport,
};
use crate::errors::Result;

/// Trait for trip import/export operations
#[async_trait]
pub trait InterchangeServiceTrait: Send + Sync {
    /// Collects a trip and all of its records.
    fn build_export(&self, trip_id: &str) -> Result<TripExport>;
    fn export_trip(&self, trip_id: &str, format: ExportFormat) -> Result<ExportedFile>;
    /// Imports a file, choosing the parser from its extension.
    async fn import_file(&self, file_name: &str, bytes: &[u8]) -> Result<ImportSummary>;
    /// Creates a new trip from an already parsed document.
    async fn import_document(
        &self,
        document: ImportDocument,
        source: ImportFormat,
    ) -> Result<ImportSummary>;
}
