use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::transportation_model::{
    NewTransportation, TransportStatus, Transportation, TransportationUpdate,
};
use super::transportation_traits::{TransportationRepositoryTrait, TransportationServiceTrait};
use crate::errors::Result;

pub struct TransportationService {
    repository: Arc<dyn TransportationRepositoryTrait>,
}

impl TransportationService {
    pub fn new(repository: Arc<dyn TransportationRepositoryTrait>) -> Self {
        TransportationService { repository }
    }
}

#[async_trait]
impl TransportationServiceTrait for TransportationService {
    fn get_segments(&self, trip_id: &str) -> Result<Vec<Transportation>> {
        self.repository.list_by_trip(trip_id)
    }

    fn get_segment(&self, transportation_id: &str) -> Result<Transportation> {
        self.repository.get_by_id(transportation_id)
    }

    async fn create_segment(&self, new_segment: NewTransportation) -> Result<Transportation> {
        new_segment.validate()?;
        self.repository.create(new_segment).await
    }

    async fn update_segment(
        &self,
        segment_update: TransportationUpdate,
    ) -> Result<Transportation> {
        segment_update.validate()?;
        self.repository.update(segment_update).await
    }

    async fn set_status(
        &self,
        transportation_id: &str,
        status: TransportStatus,
    ) -> Result<Transportation> {
        debug!("Transportation {} -> {}", transportation_id, status);
        self.repository
            .update_status(transportation_id, status)
            .await
    }

    async fn delete_segment(&self, transportation_id: &str) -> Result<usize> {
        self.repository.delete(transportation_id).await
    }
}
