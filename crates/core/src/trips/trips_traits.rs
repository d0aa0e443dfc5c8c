use async_trait::async_trait;

use super::trips_model::{NewTrip, Trip, TripUpdate};
use crate::errors::Result;

/// Trait for trip repository operations
#[async_trait]
pub trait TripRepositoryTrait: Send + Sync {
    /// All trips, most recently created first.
    fn list(&self) -> Result<Vec<Trip>>;
    fn get_by_id(&self, trip_id: &str) -> Result<Trip>;
    async fn create(&self, new_trip: NewTrip) -> Result<Trip>;
    async fn update(&self, trip_update: TripUpdate) -> Result<Trip>;
    /// Deletes the trip; child rows go with it through the cascade.
    async fn delete(&self, trip_id: &str) -> Result<usize>;
}

/// Trait for trip service operations
#[async_trait]
pub trait TripServiceTrait: Send + Sync {
    fn get_trips(&self) -> Result<Vec<Trip>>;
    fn get_trip(&self, trip_id: &str) -> Result<Trip>;
    async fn create_trip(&self, new_trip: NewTrip) -> Result<Trip>;
    async fn update_trip(&self, trip_update: TripUpdate) -> Result<Trip>;
    async fn delete_trip(&self, trip_id: &str) -> Result<()>;
    /// Seeds the bundled "Calgary to Zhongshan" sample journey.
    async fn create_sample_trip(&self) -> Result<Trip>;
}
