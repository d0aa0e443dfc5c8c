use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use voyage_core::destinations::{
    Destination, DestinationRepositoryTrait, DestinationUpdate, NewDestination,
};
use voyage_core::Result;

use super::model::{DestinationChangesetDB, DestinationDB, NewDestinationDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::destinations;

pub struct DestinationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DestinationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl DestinationRepositoryTrait for DestinationRepository {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Destination>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = destinations::table
            .filter(destinations::trip_id.eq(trip_id))
            .select(DestinationDB::as_select())
            .order((destinations::arrival_date.asc(), destinations::created_at.asc()))
            .load::<DestinationDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Destination::from).collect())
    }

    fn get_by_id(&self, destination_id: &str) -> Result<Destination> {
        let mut conn = get_connection(&self.pool)?;
        let row = destinations::table
            .find(destination_id)
            .select(DestinationDB::as_select())
            .first::<DestinationDB>(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn create(&self, new_destination: NewDestination) -> Result<Destination> {
        self.writer
            .exec(move |conn| {
                let row = NewDestinationDB::from_domain(
                    new_destination,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );
                let created = diesel::insert_into(destinations::table)
                    .values(&row)
                    .returning(DestinationDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Destination::from(created))
            })
            .await
    }

    async fn update(&self, destination_update: DestinationUpdate) -> Result<Destination> {
        self.writer
            .exec(move |conn| {
                let destination_id = destination_update.id.clone();
                let changes =
                    DestinationChangesetDB::from_domain(destination_update, Utc::now().naive_utc());
                let updated = diesel::update(destinations::table.find(&destination_id))
                    .set(&changes)
                    .returning(DestinationDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Destination::from(updated))
            })
            .await
    }

    async fn delete(&self, destination_id: &str) -> Result<usize> {
        let destination_id = destination_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(destinations::table.find(destination_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
