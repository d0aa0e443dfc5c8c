use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use voyage_core::itinerary::{
    Activity, ActivityRepositoryTrait, ActivityStatus, ActivityUpdate, NewActivity,
};
use voyage_core::Result;

use super::model::{ActivityChangesetDB, ActivityDB, NewActivityDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::activities;

pub struct ActivityRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ActivityRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Activity>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = activities::table
            .filter(activities::trip_id.eq(trip_id))
            .select(ActivityDB::as_select())
            .order((activities::planned_date.asc(), activities::planned_time.asc()))
            .load::<ActivityDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Activity::from).collect())
    }

    fn list_by_destination(&self, destination_id: &str) -> Result<Vec<Activity>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = activities::table
            .filter(activities::destination_id.eq(destination_id))
            .select(ActivityDB::as_select())
            .order((activities::planned_date.asc(), activities::planned_time.asc()))
            .load::<ActivityDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Activity::from).collect())
    }

    fn get_by_id(&self, activity_id: &str) -> Result<Activity> {
        let mut conn = get_connection(&self.pool)?;
        let row = activities::table
            .find(activity_id)
            .select(ActivityDB::as_select())
            .first::<ActivityDB>(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn create(&self, new_activity: NewActivity) -> Result<Activity> {
        self.writer
            .exec(move |conn| {
                let row = NewActivityDB::from_domain(
                    new_activity,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );
                let created = diesel::insert_into(activities::table)
                    .values(&row)
                    .returning(ActivityDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Activity::from(created))
            })
            .await
    }

    async fn update(&self, activity_update: ActivityUpdate) -> Result<Activity> {
        self.writer
            .exec(move |conn| {
                let activity_id = activity_update.id.clone();
                let changes =
                    ActivityChangesetDB::from_domain(activity_update, Utc::now().naive_utc());
                let updated = diesel::update(activities::table.find(&activity_id))
                    .set(&changes)
                    .returning(ActivityDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Activity::from(updated))
            })
            .await
    }

    async fn update_status(&self, activity_id: &str, status: ActivityStatus) -> Result<Activity> {
        let activity_id = activity_id.to_string();
        self.writer
            .exec(move |conn| {
                let updated = diesel::update(activities::table.find(&activity_id))
                    .set((
                        activities::status.eq(status.as_str()),
                        activities::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(ActivityDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Activity::from(updated))
            })
            .await
    }

    async fn delete(&self, activity_id: &str) -> Result<usize> {
        let activity_id = activity_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(activities::table.find(activity_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
