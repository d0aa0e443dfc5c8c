use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use voyage_core::hotels::{Hotel, HotelRepositoryTrait, HotelUpdate, NewHotel};
use voyage_core::Result;

use super::model::{HotelChangesetDB, HotelDB, NewHotelDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::hotels;

pub struct HotelRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HotelRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl HotelRepositoryTrait for HotelRepository {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Hotel>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = hotels::table
            .filter(hotels::trip_id.eq(trip_id))
            .select(HotelDB::as_select())
            .order((hotels::check_in_date.asc(), hotels::created_at.asc()))
            .load::<HotelDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    fn get_by_id(&self, hotel_id: &str) -> Result<Hotel> {
        let mut conn = get_connection(&self.pool)?;
        let row = hotels::table
            .find(hotel_id)
            .select(HotelDB::as_select())
            .first::<HotelDB>(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn create(&self, new_hotel: NewHotel) -> Result<Hotel> {
        self.writer
            .exec(move |conn| {
                let row = NewHotelDB::from_domain(
                    new_hotel,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );
                let created = diesel::insert_into(hotels::table)
                    .values(&row)
                    .returning(HotelDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Hotel::from(created))
            })
            .await
    }

    async fn update(&self, hotel_update: HotelUpdate) -> Result<Hotel> {
        self.writer
            .exec(move |conn| {
                let hotel_id = hotel_update.id.clone();
                let changes = HotelChangesetDB::from_domain(hotel_update, Utc::now().naive_utc());
                let updated = diesel::update(hotels::table.find(&hotel_id))
                    .set(&changes)
                    .returning(HotelDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Hotel::from(updated))
            })
            .await
    }

    async fn delete(&self, hotel_id: &str) -> Result<usize> {
        let hotel_id = hotel_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(hotels::table.find(hotel_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
