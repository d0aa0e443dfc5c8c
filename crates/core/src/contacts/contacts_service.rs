use async_trait::async_trait;
use std::sync::Arc;

use super::contacts_model::{EmergencyContact, EmergencyContactUpdate, NewEmergencyContact};
use super::contacts_traits::{ContactRepositoryTrait, ContactServiceTrait};
use crate::errors::Result;

pub struct ContactService {
    repository: Arc<dyn ContactRepositoryTrait>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepositoryTrait>) -> Self {
        ContactService { repository }
    }
}

#[async_trait]
impl ContactServiceTrait for ContactService {
    fn get_contacts(&self, trip_id: &str) -> Result<Vec<EmergencyContact>> {
        self.repository.list_by_trip(trip_id)
    }

    async fn create_contact(&self, new_contact: NewEmergencyContact) -> Result<EmergencyContact> {
        new_contact.validate()?;
        self.repository.create(new_contact).await
    }

    async fn update_contact(
        &self,
        contact_update: EmergencyContactUpdate,
    ) -> Result<EmergencyContact> {
        contact_update.validate()?;
        self.repository.update(contact_update).await
    }

    async fn delete_contact(&self, contact_id: &str) -> Result<usize> {
        self.repository.delete(contact_id).await
    }
}
