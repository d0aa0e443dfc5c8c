use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use voyage_core::transportation::{
    NewTransportation, TransportStatus, Transportation, TransportationRepositoryTrait,
    TransportationUpdate,
};
use voyage_core::Result;

use super::model::{NewTransportationDB, TransportationChangesetDB, TransportationDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::transportation;

pub struct TransportationRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransportationRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TransportationRepositoryTrait for TransportationRepository {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Transportation>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transportation::table
            .filter(transportation::trip_id.eq(trip_id))
            .select(TransportationDB::as_select())
            .order((
                transportation::departure_datetime.asc(),
                transportation::created_at.asc(),
            ))
            .load::<TransportationDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Transportation::from).collect())
    }

    fn get_by_id(&self, transportation_id: &str) -> Result<Transportation> {
        let mut conn = get_connection(&self.pool)?;
        let row = transportation::table
            .find(transportation_id)
            .select(TransportationDB::as_select())
            .first::<TransportationDB>(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn create(&self, new_segment: NewTransportation) -> Result<Transportation> {
        self.writer
            .exec(move |conn| {
                let row = NewTransportationDB::from_domain(
                    new_segment,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );
                let created = diesel::insert_into(transportation::table)
                    .values(&row)
                    .returning(TransportationDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Transportation::from(created))
            })
            .await
    }

    async fn update(&self, segment_update: TransportationUpdate) -> Result<Transportation> {
        self.writer
            .exec(move |conn| {
                let segment_id = segment_update.id.clone();
                let changes =
                    TransportationChangesetDB::from_domain(segment_update, Utc::now().naive_utc());
                let updated = diesel::update(transportation::table.find(&segment_id))
                    .set(&changes)
                    .returning(TransportationDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Transportation::from(updated))
            })
            .await
    }

    async fn update_status(
        &self,
        transportation_id: &str,
        status: TransportStatus,
    ) -> Result<Transportation> {
        let segment_id = transportation_id.to_string();
        self.writer
            .exec(move |conn| {
                let updated = diesel::update(transportation::table.find(&segment_id))
                    .set((
                        transportation::status.eq(status.as_str()),
                        transportation::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(TransportationDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Transportation::from(updated))
            })
            .await
    }

    async fn delete(&self, transportation_id: &str) -> Result<usize> {
        let segment_id = transportation_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(transportation::table.find(segment_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
