use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::destinations_model::{Destination, DestinationUpdate, NewDestination};
use super::destinations_traits::{DestinationRepositoryTrait, DestinationServiceTrait};
use crate::errors::Result;

pub struct DestinationService {
    repository: Arc<dyn DestinationRepositoryTrait>,
}

impl DestinationService {
    pub fn new(repository: Arc<dyn DestinationRepositoryTrait>) -> Self {
        DestinationService { repository }
    }
}

#[async_trait]
impl DestinationServiceTrait for DestinationService {
    fn get_destinations(&self, trip_id: &str) -> Result<Vec<Destination>> {
        self.repository.list_by_trip(trip_id)
    }

    fn get_destination(&self, destination_id: &str) -> Result<Destination> {
        self.repository.get_by_id(destination_id)
    }

    async fn create_destination(&self, new_destination: NewDestination) -> Result<Destination> {
        new_destination.validate()?;
        debug!(
            "Adding destination {} to trip {}",
            new_destination.name, new_destination.trip_id
        );
        self.repository.create(new_destination).await
    }

    async fn update_destination(
        &self,
        destination_update: DestinationUpdate,
    ) -> Result<Destination> {
        destination_update.validate()?;
        self.repository.update(destination_update).await
    }

    async fn delete_destination(&self, destination_id: &str) -> Result<usize> {
        self.repository.delete(destination_id).await
    }
}
