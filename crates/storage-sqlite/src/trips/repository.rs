use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use voyage_core::trips::{NewTrip, Trip, TripRepositoryTrait, TripUpdate};
use voyage_core::Result;

use super::model::{NewTripDB, TripChangesetDB, TripDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::trips;

pub struct TripRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TripRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TripRepositoryTrait for TripRepository {
    fn list(&self) -> Result<Vec<Trip>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = trips::table
            .select(TripDB::as_select())
            .order(trips::created_at.desc())
            .load::<TripDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Trip::from).collect())
    }

    fn get_by_id(&self, trip_id: &str) -> Result<Trip> {
        let mut conn = get_connection(&self.pool)?;
        let row = trips::table
            .find(trip_id)
            .select(TripDB::as_select())
            .first::<TripDB>(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn create(&self, new_trip: NewTrip) -> Result<Trip> {
        self.writer
            .exec(move |conn| {
                let row = NewTripDB::from_domain(
                    new_trip,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );
                let created = diesel::insert_into(trips::table)
                    .values(&row)
                    .returning(TripDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Trip::from(created))
            })
            .await
    }

    async fn update(&self, trip_update: TripUpdate) -> Result<Trip> {
        self.writer
            .exec(move |conn| {
                let trip_id = trip_update.id.clone();
                let changes = TripChangesetDB::from_domain(trip_update, Utc::now().naive_utc());
                let updated = diesel::update(trips::table.find(&trip_id))
                    .set(&changes)
                    .returning(TripDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Trip::from(updated))
            })
            .await
    }

    async fn delete(&self, trip_id: &str) -> Result<usize> {
        let trip_id = trip_id.to_string();
        self.writer
            .exec(move |conn| diesel::delete(trips::table.find(trip_id)).execute(conn).into_core())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destinations::DestinationRepository;
    use crate::expenses::ExpenseRepository;
    use crate::itinerary::ActivityRepository;
    use crate::test_utils::setup_db;
    use chrono::NaiveDate;
    use voyage_core::destinations::{DestinationRepositoryTrait, NewDestination};
    use voyage_core::expenses::{ExpenseRepositoryTrait, NewExpense};
    use voyage_core::itinerary::{ActivityRepositoryTrait, NewActivity};

    fn new_trip(name: &str) -> NewTrip {
        NewTrip {
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 11, 8),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 28),
            total_budget: 10000.0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_update_and_get_trip() {
        let (pool, writer, _temp_dir) = setup_db();
        let repo = TripRepository::new(pool, writer);

        let created = repo.create(new_trip("Asia")).await.unwrap();
        assert_eq!(created.total_days(), 51);
        assert!(Uuid::parse_str(&created.id).is_ok());

        let updated = repo
            .update(TripUpdate {
                id: created.id.clone(),
                name: "Asia 2024".to_string(),
                description: None,
                start_date: None,
                end_date: None,
                total_budget: 8000.0,
            })
            .await
            .unwrap();
        assert_eq!(updated.name, "Asia 2024");
        assert_eq!(updated.start_date, None);
        assert_eq!(updated.created_at, created.created_at);

        let fetched = repo.get_by_id(&created.id).unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_missing_trip_is_not_found() {
        let (pool, writer, _temp_dir) = setup_db();
        let repo = TripRepository::new(pool, writer);

        assert!(repo.get_by_id("missing").unwrap_err().is_not_found());
        let err = repo
            .update(TripUpdate {
                id: "missing".to_string(),
                name: "x".to_string(),
                description: None,
                start_date: None,
                end_date: None,
                total_budget: 0.0,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.delete("missing").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_children_only_for_that_trip() {
        let (pool, writer, _temp_dir) = setup_db();
        let trips = TripRepository::new(pool.clone(), writer.clone());
        let destinations = DestinationRepository::new(pool.clone(), writer.clone());
        let activities = ActivityRepository::new(pool.clone(), writer.clone());
        let expenses = ExpenseRepository::new(pool.clone(), writer.clone());

        let mut trip_ids = Vec::new();
        for name in ["Doomed", "Kept"] {
            let trip = trips.create(new_trip(name)).await.unwrap();
            let city = destinations
                .create(NewDestination {
                    trip_id: trip.id.clone(),
                    name: "Tokyo".to_string(),
                    country: "Japan".to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
            activities
                .create(NewActivity {
                    trip_id: trip.id.clone(),
                    destination_id: city.id.clone(),
                    title: "Senso-ji".to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
            let mut lunch = NewExpense::new(
                &trip.id,
                "Food & Dining",
                "Ramen",
                12.0,
                NaiveDate::from_ymd_opt(2024, 11, 10).unwrap(),
            );
            lunch.destination_id = Some(city.id);
            expenses.create(lunch, None).await.unwrap();
            trip_ids.push(trip.id);
        }

        assert_eq!(trips.delete(&trip_ids[0]).await.unwrap(), 1);

        assert!(trips.get_by_id(&trip_ids[0]).unwrap_err().is_not_found());
        assert!(destinations.list_by_trip(&trip_ids[0]).unwrap().is_empty());
        assert!(activities.list_by_trip(&trip_ids[0]).unwrap().is_empty());
        assert!(expenses.list_by_trip(&trip_ids[0]).unwrap().is_empty());

        assert_eq!(trips.list().unwrap().len(), 1);
        assert_eq!(destinations.list_by_trip(&trip_ids[1]).unwrap().len(), 1);
        assert_eq!(activities.list_by_trip(&trip_ids[1]).unwrap().len(), 1);
        assert_eq!(expenses.list_by_trip(&trip_ids[1]).unwrap().len(), 1);
    }
}
