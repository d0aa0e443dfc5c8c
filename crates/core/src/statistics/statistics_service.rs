use log::{debug, error};
use std::sync::Arc;

use super::statistics_model::{
    activity_status_counts, destination_progress, AccommodationSummary, TransportSummary,
    TripOverview, TripStatistics,
};
use super::statistics_traits::{StatisticsRepositoryTrait, StatisticsServiceTrait};
use crate::budget::{BudgetOverview, BudgetRepositoryTrait};
use crate::destinations::DestinationRepositoryTrait;
use crate::errors::Result;
use crate::hotels::HotelRepositoryTrait;
use crate::itinerary::ActivityRepositoryTrait;
use crate::transportation::TransportationRepositoryTrait;
use crate::trips::TripRepositoryTrait;

/// Read-only reporting over a trip and its children.
pub struct StatisticsService {
    repository: Arc<dyn StatisticsRepositoryTrait>,
    trip_repository: Arc<dyn TripRepositoryTrait>,
    destination_repository: Arc<dyn DestinationRepositoryTrait>,
    activity_repository: Arc<dyn ActivityRepositoryTrait>,
    transportation_repository: Arc<dyn TransportationRepositoryTrait>,
    hotel_repository: Arc<dyn HotelRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl StatisticsService {
    pub fn new(
        repository: Arc<dyn StatisticsRepositoryTrait>,
        trip_repository: Arc<dyn TripRepositoryTrait>,
        destination_repository: Arc<dyn DestinationRepositoryTrait>,
        activity_repository: Arc<dyn ActivityRepositoryTrait>,
        transportation_repository: Arc<dyn TransportationRepositoryTrait>,
        hotel_repository: Arc<dyn HotelRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            trip_repository,
            destination_repository,
            activity_repository,
            transportation_repository,
            hotel_repository,
            budget_repository,
        }
    }

    fn try_trip_statistics(&self, trip_id: &str) -> Result<TripStatistics> {
        let trip = match self.trip_repository.get_by_id(trip_id) {
            Ok(trip) => trip,
            Err(e) if e.is_not_found() => {
                debug!("Statistics requested for unknown trip {}", trip_id);
                return Ok(TripStatistics::default());
            }
            Err(e) => return Err(e),
        };
        let counts = self.repository.count_trip_records(trip_id)?;
        Ok(TripStatistics::compose(&trip, counts))
    }
}

impl StatisticsServiceTrait for StatisticsService {
    fn get_trip_statistics(&self, trip_id: &str) -> TripStatistics {
        self.try_trip_statistics(trip_id).unwrap_or_else(|e| {
            error!("Failed to compute statistics for trip {}: {}", trip_id, e);
            TripStatistics::default()
        })
    }

    fn get_trip_overview(&self, trip_id: &str) -> Result<TripOverview> {
        let trip = self.trip_repository.get_by_id(trip_id)?;
        let destinations = self.destination_repository.list_by_trip(trip_id)?;
        let activities = self.activity_repository.list_by_trip(trip_id)?;
        let segments = self.transportation_repository.list_by_trip(trip_id)?;
        let hotels = self.hotel_repository.list_by_trip(trip_id)?;
        let categories = self.budget_repository.list_by_trip(trip_id)?;
        let counts = self.repository.count_trip_records(trip_id)?;

        Ok(TripOverview {
            statistics: TripStatistics::compose(&trip, counts),
            budget: BudgetOverview::build(&trip, &categories),
            destination_progress: destination_progress(&destinations, &activities),
            activity_status_counts: activity_status_counts(&activities),
            transport: TransportSummary::build(&segments),
            accommodation: AccommodationSummary::build(&hotels),
            trip,
        })
    }
}
