use super::statistics_model::{TripCounts, TripOverview, TripStatistics};
use crate::errors::Result;

/// Aggregate queries over a trip's child tables.
pub trait StatisticsRepositoryTrait: Send + Sync {
    fn count_trip_records(&self, trip_id: &str) -> Result<TripCounts>;
}

pub trait StatisticsServiceTrait: Send + Sync {
    /// Never fails: unknown trips and storage errors yield zeros.
    fn get_trip_statistics(&self, trip_id: &str) -> TripStatistics;
    fn get_trip_overview(&self, trip_id: &str) -> Result<TripOverview>;
}
