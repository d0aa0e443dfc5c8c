#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result};
    use crate::itinerary::{
        Activity, ActivityQuery, ActivityRepositoryTrait, ActivityService, ActivityServiceTrait,
        ActivitySort, ActivityStatus, ActivityUpdate, NewActivity,
    };
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use std::sync::{Arc, Mutex};

    // --- Mock ActivityRepository ---
    #[derive(Clone, Default)]
    struct MockActivityRepository {
        activities: Arc<Mutex<Vec<Activity>>>,
    }

    impl MockActivityRepository {
        fn find(&self, activity_id: &str) -> Result<Activity> {
            self.activities
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == activity_id)
                .cloned()
                .ok_or_else(|| DatabaseError::NotFound(activity_id.to_string()).into())
        }
    }

    #[async_trait]
    impl ActivityRepositoryTrait for MockActivityRepository {
        fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Activity>> {
            Ok(self
                .activities
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.trip_id == trip_id)
                .cloned()
                .collect())
        }

        fn list_by_destination(&self, destination_id: &str) -> Result<Vec<Activity>> {
            Ok(self
                .activities
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.destination_id == destination_id)
                .cloned()
                .collect())
        }

        fn get_by_id(&self, activity_id: &str) -> Result<Activity> {
            self.find(activity_id)
        }

        async fn create(&self, new_activity: NewActivity) -> Result<Activity> {
            let mut activities = self.activities.lock().unwrap();
            let now = Utc::now().naive_utc();
            let activity = Activity {
                id: new_activity
                    .id
                    .unwrap_or_else(|| format!("act-{}", activities.len() + 1)),
                trip_id: new_activity.trip_id,
                destination_id: new_activity.destination_id,
                title: new_activity.title,
                description: new_activity.description,
                planned_date: new_activity.planned_date,
                planned_time: new_activity.planned_time,
                duration_minutes: new_activity.duration_minutes,
                cost: new_activity.cost,
                priority: new_activity.priority,
                status: new_activity.status,
                category: new_activity.category,
                location: new_activity.location,
                contact_info: new_activity.contact_info,
                booking_required: new_activity.booking_required,
                booking_reference: new_activity.booking_reference,
                notes: new_activity.notes,
                created_at: now,
                updated_at: now,
            };
            activities.push(activity.clone());
            Ok(activity)
        }

        async fn update(&self, activity_update: ActivityUpdate) -> Result<Activity> {
            let mut activities = self.activities.lock().unwrap();
            let activity = activities
                .iter_mut()
                .find(|a| a.id == activity_update.id)
                .ok_or_else(|| Error::from(DatabaseError::NotFound(activity_update.id.clone())))?;
            activity.title = activity_update.title;
            activity.priority = activity_update.priority;
            activity.status = activity_update.status;
            Ok(activity.clone())
        }

        async fn update_status(
            &self,
            activity_id: &str,
            status: ActivityStatus,
        ) -> Result<Activity> {
            let mut activities = self.activities.lock().unwrap();
            let activity = activities
                .iter_mut()
                .find(|a| a.id == activity_id)
                .ok_or_else(|| Error::from(DatabaseError::NotFound(activity_id.to_string())))?;
            activity.status = status;
            Ok(activity.clone())
        }

        async fn delete(&self, activity_id: &str) -> Result<usize> {
            let mut activities = self.activities.lock().unwrap();
            let before = activities.len();
            activities.retain(|a| a.id != activity_id);
            Ok(before - activities.len())
        }
    }

    fn new_activity(title: &str, priority: i32, day: Option<u32>) -> NewActivity {
        NewActivity {
            trip_id: "trip-1".to_string(),
            destination_id: "tokyo".to_string(),
            title: title.to_string(),
            priority,
            planned_date: day.and_then(|d| NaiveDate::from_ymd_opt(2024, 11, d)),
            ..Default::default()
        }
    }

    fn service() -> (ActivityService, MockActivityRepository) {
        let repository = MockActivityRepository::default();
        (ActivityService::new(Arc::new(repository.clone())), repository)
    }

    #[tokio::test]
    async fn test_create_activity_rejects_out_of_range_priority() {
        let (service, repository) = service();

        let result = service.create_activity(new_activity("Teamlab", 5, None)).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(repository.activities.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_activities_filters_and_orders() {
        let (service, _) = service();
        service
            .create_activity(new_activity("Tsukiji market", 2, Some(11)))
            .await
            .unwrap();
        let senso = service
            .create_activity(new_activity("Senso-ji", 3, Some(10)))
            .await
            .unwrap();
        service
            .create_activity(new_activity("Day trip", 3, None))
            .await
            .unwrap();
        service
            .set_status(&senso.id, ActivityStatus::Completed)
            .await
            .unwrap();

        let by_date = service
            .search_activities("trip-1", &ActivityQuery::default())
            .unwrap();
        let titles: Vec<_> = by_date.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Senso-ji", "Tsukiji market", "Day trip"]);

        let pending_high = service
            .search_activities(
                "trip-1",
                &ActivityQuery {
                    status: Some(ActivityStatus::Pending),
                    priority: Some(3),
                    sort: ActivitySort::Title,
                },
            )
            .unwrap();
        assert_eq!(pending_high.len(), 1);
        assert_eq!(pending_high[0].title, "Day trip");
    }

    #[tokio::test]
    async fn test_update_activity_validates_title() {
        let (service, _) = service();
        let created = service
            .create_activity(new_activity("Shibuya crossing", 1, Some(9)))
            .await
            .unwrap();

        let mut update = ActivityUpdate::from(created);
        update.title = "   ".to_string();

        assert!(service.update_activity(update).await.is_err());
    }
}
