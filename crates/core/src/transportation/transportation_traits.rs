use async_trait::async_trait;

use super::transportation_model::{
    NewTransportation, TransportStatus, Transportation, TransportationUpdate,
};
use crate::errors::Result;

/// Trait for transportation repository operations
#[async_trait]
pub trait TransportationRepositoryTrait: Send + Sync {
    /// Segments of a trip ordered by departure time.
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Transportation>>;
    fn get_by_id(&self, transportation_id: &str) -> Result<Transportation>;
    async fn create(&self, new_segment: NewTransportation) -> Result<Transportation>;
    async fn update(&self, segment_update: TransportationUpdate) -> Result<Transportation>;
    async fn update_status(
        &self,
        transportation_id: &str,
        status: TransportStatus,
    ) -> Result<Transportation>;
    async fn delete(&self, transportation_id: &str) -> Result<usize>;
}

/// Trait for transportation service operations
#[async_trait]
pub trait TransportationServiceTrait: Send + Sync {
    fn get_segments(&self, trip_id: &str) -> Result<Vec<Transportation>>;
    fn get_segment(&self, transportation_id: &str) -> Result<Transportation>;
    async fn create_segment(&self, new_segment: NewTransportation) -> Result<Transportation>;
    async fn update_segment(&self, segment_update: TransportationUpdate)
        -> Result<Transportation>;
    async fn set_status(
        &self,
        transportation_id: &str,
        status: TransportStatus,
    ) -> Result<Transportation>;
    async fn delete_segment(&self, transportation_id: &str) -> Result<usize>;
}
