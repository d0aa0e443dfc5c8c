use async_trait::async_trait;
use chrono::Local;
use log::{debug, info};
use std::sync::Arc;

use super::export::{render, suggested_file_name};
use super::import::{
    new_activity, new_category, new_contact, new_destination, new_expense, new_hotel,
    new_segment, parse, text, IdRemap,
};
use super::interchange_model::{
    ExportFormat, ExportedFile, ImportDocument, ImportFormat, ImportSummary, TripExport,
    TripHeader,
};
use super::interchange_traits::InterchangeServiceTrait;
use crate::budget::BudgetRepositoryTrait;
use crate::constants::IMPORTED_TRIP_NAME_PREFIX;
use crate::contacts::ContactRepositoryTrait;
use crate::destinations::DestinationRepositoryTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::hotels::HotelRepositoryTrait;
use crate::itinerary::ActivityRepositoryTrait;
use crate::transportation::TransportationRepositoryTrait;
use crate::trips::{NewTrip, TripRepositoryTrait};
use crate::utils::today;

/// Repositories the interchange service reads from and writes to.
#[derive(Clone)]
pub struct InterchangeRepositories {
    pub trips: Arc<dyn TripRepositoryTrait>,
    pub destinations: Arc<dyn DestinationRepositoryTrait>,
    pub activities: Arc<dyn ActivityRepositoryTrait>,
    pub transportation: Arc<dyn TransportationRepositoryTrait>,
    pub budget: Arc<dyn BudgetRepositoryTrait>,
    pub expenses: Arc<dyn ExpenseRepositoryTrait>,
    pub hotels: Arc<dyn HotelRepositoryTrait>,
    pub contacts: Arc<dyn ContactRepositoryTrait>,
}

pub struct InterchangeService {
    repositories: InterchangeRepositories,
}

impl InterchangeService {
    pub fn new(repositories: InterchangeRepositories) -> Self {
        Self { repositories }
    }
}

/// Trip to create for an import. Sources without trip data get a
/// timestamped name and today's date range.
fn imported_trip(header: Option<TripHeader>, source: ImportFormat) -> NewTrip {
    let description = Some(format!("Imported from {}", source.label()));
    match header {
        Some(header) => NewTrip {
            id: None,
            name: header
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| IMPORTED_TRIP_NAME_PREFIX.to_string()),
            description: text(&header.description).or(description),
            start_date: header.start_date,
            end_date: header.end_date,
            total_budget: header.total_budget.unwrap_or(0.0),
        },
        None => NewTrip {
            id: None,
            name: format!(
                "{} {}",
                IMPORTED_TRIP_NAME_PREFIX,
                Local::now().format("%Y%m%d_%H%M%S")
            ),
            description,
            start_date: Some(today()),
            end_date: Some(today()),
            total_budget: 0.0,
        },
    }
}

#[async_trait]
impl InterchangeServiceTrait for InterchangeService {
    fn build_export(&self, trip_id: &str) -> Result<TripExport> {
        let repos = &self.repositories;
        Ok(TripExport {
            trip: repos.trips.get_by_id(trip_id)?,
            destinations: repos.destinations.list_by_trip(trip_id)?,
            activities: repos.activities.list_by_trip(trip_id)?,
            transportation: repos.transportation.list_by_trip(trip_id)?,
            budget_categories: repos.budget.list_by_trip(trip_id)?,
            expenses: repos.expenses.list_by_trip(trip_id)?,
            hotels: repos.hotels.list_by_trip(trip_id)?,
            emergency_contacts: repos.contacts.list_by_trip(trip_id)?,
            export_timestamp: Local::now().naive_local(),
        })
    }

    fn export_trip(&self, trip_id: &str, format: ExportFormat) -> Result<ExportedFile> {
        let export = self.build_export(trip_id)?;
        let bytes = render(&export, format)?;
        let file_name = suggested_file_name(&export.trip.name, format, export.export_timestamp);
        debug!("Rendered {} ({} bytes)", file_name, bytes.len());
        Ok(ExportedFile {
            file_name,
            format,
            bytes,
        })
    }

    async fn import_file(&self, file_name: &str, bytes: &[u8]) -> Result<ImportSummary> {
        let format = ImportFormat::from_file_name(file_name)?;
        let document = parse(format, bytes)?;
        self.import_document(document, format).await
    }

    async fn import_document(
        &self,
        document: ImportDocument,
        source: ImportFormat,
    ) -> Result<ImportSummary> {
        let repos = &self.repositories;
        let new_trip = imported_trip(document.trip, source);
        new_trip.validate()?;
        let trip = repos.trips.create(new_trip).await?;
        let trip_id = trip.id.clone();
        let mut summary = ImportSummary::new(trip);
        let mut ids = IdRemap::default();

        for source_destination in &document.destinations {
            let record = new_destination(source_destination, &trip_id);
            record.validate()?;
            let created = repos.destinations.create(record).await?;
            ids.destinations
                .insert(source_destination.id.clone(), created.id);
            summary.destinations += 1;
        }

        for source_activity in &document.activities {
            let Some(record) = new_activity(source_activity, &trip_id, &ids) else {
                debug!("Skipping activity '{}': destination not imported", source_activity.title);
                summary.skipped += 1;
                continue;
            };
            record.validate()?;
            let created = repos.activities.create(record).await?;
            ids.activities.insert(source_activity.id.clone(), created.id);
            summary.activities += 1;
        }

        for source_segment in &document.transportation {
            let record = new_segment(source_segment, &trip_id, &ids);
            record.validate()?;
            let created = repos.transportation.create(record).await?;
            ids.transportation
                .insert(source_segment.id.clone(), created.id);
            summary.transportation += 1;
        }

        let categories: Vec<_> = document
            .budget_categories
            .iter()
            .map(|category| new_category(category, &trip_id))
            .collect();
        for category in &categories {
            category.validate()?;
        }
        summary.budget_categories = repos.budget.create_many(categories).await?.len();

        for source_hotel in &document.hotels {
            let Some(record) = new_hotel(source_hotel, &trip_id, &ids) else {
                debug!("Skipping hotel '{}': destination not imported", source_hotel.name);
                summary.skipped += 1;
                continue;
            };
            record.validate()?;
            let created = repos.hotels.create(record).await?;
            ids.hotels.insert(source_hotel.id.clone(), created.id);
            summary.hotels += 1;
        }

        // Imported expenses keep the categories' stored spent amounts as they are.
        for source_expense in &document.expenses {
            let record = new_expense(source_expense, &trip_id, &ids);
            record.validate()?;
            repos.expenses.create(record, None).await?;
            summary.expenses += 1;
        }

        for source_contact in &document.emergency_contacts {
            let record = new_contact(source_contact, &trip_id);
            record.validate()?;
            repos.contacts.create(record).await?;
            summary.emergency_contacts += 1;
        }

        info!(
            "Imported trip {} ({}): {} destinations, {} activities, {} expenses, {} skipped",
            summary.trip.name,
            trip_id,
            summary.destinations,
            summary.activities,
            summary.expenses,
            summary.skipped
        );
        Ok(summary)
    }
}
