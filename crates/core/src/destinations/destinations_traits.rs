use async_trait::async_trait;

use super::destinations_model::{Destination, DestinationUpdate, NewDestination};
use crate::errors::Result;

/// Trait for destination repository operations
#[async_trait]
pub trait DestinationRepositoryTrait: Send + Sync {
    /// Destinations of a trip ordered by arrival date.
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Destination>>;
    fn get_by_id(&self, destination_id: &str) -> Result<Destination>;
    async fn create(&self, new_destination: NewDestination) -> Result<Destination>;
    async fn update(&self, destination_update: DestinationUpdate) -> Result<Destination>;
    async fn delete(&self, destination_id: &str) -> Result<usize>;
}

/// Trait for destination service operations
#[async_trait]
pub trait DestinationServiceTrait: Send + Sync {
    fn get_destinations(&self, trip_id: &str) -> Result<Vec<Destination>>;
    fn get_destination(&self, destination_id: &str) -> Result<Destination>;
    async fn create_destination(&self, new_destination: NewDestination) -> Result<Destination>;
    async fn update_destination(&self, destination_update: DestinationUpdate)
        -> Result<Destination>;
    async fn delete_destination(&self, destination_id: &str) -> Result<usize>;
}
