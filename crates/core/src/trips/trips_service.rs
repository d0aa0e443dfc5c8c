use async_trait::async_trait;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;

use super::sample_trip::{sample_categories, sample_destinations, sample_segments, sample_trip};
use super::trips_model::{NewTrip, Trip, TripUpdate};
use super::trips_traits::{TripRepositoryTrait, TripServiceTrait};
use crate::budget::BudgetRepositoryTrait;
use crate::destinations::DestinationRepositoryTrait;
use crate::errors::{DatabaseError, Result};
use crate::transportation::TransportationRepositoryTrait;

/// Service for managing trips
pub struct TripService {
    repository: Arc<dyn TripRepositoryTrait>,
    destination_repository: Arc<dyn DestinationRepositoryTrait>,
    transportation_repository: Arc<dyn TransportationRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl TripService {
    pub fn new(
        repository: Arc<dyn TripRepositoryTrait>,
        destination_repository: Arc<dyn DestinationRepositoryTrait>,
        transportation_repository: Arc<dyn TransportationRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        TripService {
            repository,
            destination_repository,
            transportation_repository,
            budget_repository,
        }
    }
}

#[async_trait]
impl TripServiceTrait for TripService {
    fn get_trips(&self) -> Result<Vec<Trip>> {
        self.repository.list()
    }

    fn get_trip(&self, trip_id: &str) -> Result<Trip> {
        self.repository.get_by_id(trip_id)
    }

    async fn create_trip(&self, new_trip: NewTrip) -> Result<Trip> {
        new_trip.validate()?;
        debug!("Creating trip {}", new_trip.name);
        self.repository.create(new_trip).await
    }

    async fn update_trip(&self, trip_update: TripUpdate) -> Result<Trip> {
        trip_update.validate()?;
        self.repository.update(trip_update).await
    }

    async fn delete_trip(&self, trip_id: &str) -> Result<()> {
        let deleted = self.repository.delete(trip_id).await?;
        if deleted == 0 {
            return Err(DatabaseError::NotFound(format!("Trip {trip_id}")).into());
        }
        info!("Deleted trip {}", trip_id);
        Ok(())
    }

    async fn create_sample_trip(&self) -> Result<Trip> {
        let trip = self.repository.create(sample_trip()).await?;

        let mut destination_ids = HashMap::new();
        for new_destination in sample_destinations(&trip.id) {
            let destination = self.destination_repository.create(new_destination).await?;
            destination_ids.insert(destination.name, destination.id);
        }
        for segment in sample_segments(&trip.id, &destination_ids) {
            self.transportation_repository.create(segment).await?;
        }
        self.budget_repository
            .create_many(sample_categories(&trip.id))
            .await?;

        info!("Created sample trip {} ({})", trip.name, trip.id);
        Ok(trip)
    }
}
