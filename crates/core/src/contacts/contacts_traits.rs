use async_trait::async_trait;

use super::contacts_model::{EmergencyContact, EmergencyContactUpdate, NewEmergencyContact};
use crate::errors::Result;

/// Trait for emergency contact repository operations
#[async_trait]
pub trait ContactRepositoryTrait: Send + Sync {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<EmergencyContact>>;
    fn get_by_id(&self, contact_id: &str) -> Result<EmergencyContact>;
    async fn create(&self, new_contact: NewEmergencyContact) -> Result<EmergencyContact>;
    async fn update(&self, contact_update: EmergencyContactUpdate) -> Result<EmergencyContact>;
    async fn delete(&self, contact_id: &str) -> Result<usize>;
}

/// Trait for emergency contact service operations
#[async_trait]
pub trait ContactServiceTrait: Send + Sync {
    fn get_contacts(&self, trip_id: &str) -> Result<Vec<EmergencyContact>>;
    async fn create_contact(&self, new_contact: NewEmergencyContact) -> Result<EmergencyContact>;
    async fn update_contact(
        &self,
        contact_update: EmergencyContactUpdate,
    ) -> Result<EmergencyContact>;
    async fn delete_contact(&self, contact_id: &str) -> Result<usize>;
}
