use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::itinerary_filter::{filter_and_sort_activities, ActivityQuery};
use super::itinerary_model::{Activity, ActivityStatus, ActivityUpdate, NewActivity};
use super::itinerary_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
use crate::errors::Result;

pub struct ActivityService {
    repository: Arc<dyn ActivityRepositoryTrait>,
}

impl ActivityService {
    pub fn new(repository: Arc<dyn ActivityRepositoryTrait>) -> Self {
        ActivityService { repository }
    }
}

#[async_trait]
impl ActivityServiceTrait for ActivityService {
    fn get_activities(&self, trip_id: &str) -> Result<Vec<Activity>> {
        self.repository.list_by_trip(trip_id)
    }

    fn get_destination_activities(&self, destination_id: &str) -> Result<Vec<Activity>> {
        self.repository.list_by_destination(destination_id)
    }

    fn search_activities(&self, trip_id: &str, query: &ActivityQuery) -> Result<Vec<Activity>> {
        let activities = self.repository.list_by_trip(trip_id)?;
        Ok(filter_and_sort_activities(&activities, query))
    }

    fn get_activity(&self, activity_id: &str) -> Result<Activity> {
        self.repository.get_by_id(activity_id)
    }

    async fn create_activity(&self, new_activity: NewActivity) -> Result<Activity> {
        new_activity.validate()?;
        debug!(
            "Planning '{}' at destination {}",
            new_activity.title, new_activity.destination_id
        );
        self.repository.create(new_activity).await
    }

    async fn update_activity(&self, activity_update: ActivityUpdate) -> Result<Activity> {
        activity_update.validate()?;
        self.repository.update(activity_update).await
    }

    async fn set_status(&self, activity_id: &str, status: ActivityStatus) -> Result<Activity> {
        self.repository.update_status(activity_id, status).await
    }

    async fn delete_activity(&self, activity_id: &str) -> Result<usize> {
        self.repository.delete(activity_id).await
    }
}
