use async_trait::async_trait;

use super::itinerary_filter::ActivityQuery;
use super::itinerary_model::{Activity, ActivityStatus, ActivityUpdate, NewActivity};
use crate::errors::Result;

/// Trait for activity repository operations
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    /// Activities of a trip ordered by planned date and time.
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Activity>>;
    fn list_by_destination(&self, destination_id: &str) -> Result<Vec<Activity>>;
    fn get_by_id(&self, activity_id: &str) -> Result<Activity>;
    async fn create(&self, new_activity: NewActivity) -> Result<Activity>;
    async fn update(&self, activity_update: ActivityUpdate) -> Result<Activity>;
    async fn update_status(&self, activity_id: &str, status: ActivityStatus) -> Result<Activity>;
    async fn delete(&self, activity_id: &str) -> Result<usize>;
}

/// Trait for activity service operations
#[async_trait]
pub trait ActivityServiceTrait: Send + Sync {
    fn get_activities(&self, trip_id: &str) -> Result<Vec<Activity>>;
    fn get_destination_activities(&self, destination_id: &str) -> Result<Vec<Activity>>;
    /// Lists a trip's activities filtered and ordered by `query`.
    fn search_activities(&self, trip_id: &str, query: &ActivityQuery) -> Result<Vec<Activity>>;
    fn get_activity(&self, activity_id: &str) -> Result<Activity>;
    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity>;
    async fn update_activity(&self, activity_update: ActivityUpdate) -> Result<Activity>;
    async fn set_status(&self, activity_id: &str, status: ActivityStatus) -> Result<Activity>;
    async fn delete_activity(&self, activity_id: &str) -> Result<usize>;
}
