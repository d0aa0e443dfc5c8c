use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use voyage_core::contacts::{
    ContactRepositoryTrait, EmergencyContact, EmergencyContactUpdate, NewEmergencyContact,
};
use voyage_core::Result;

use super::model::{EmergencyContactChangesetDB, EmergencyContactDB, NewEmergencyContactDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::emergency_contacts;

pub struct ContactRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ContactRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ContactRepositoryTrait for ContactRepository {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<EmergencyContact>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = emergency_contacts::table
            .filter(emergency_contacts::trip_id.eq(trip_id))
            .select(EmergencyContactDB::as_select())
            .order(emergency_contacts::name.asc())
            .load::<EmergencyContactDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(EmergencyContact::from).collect())
    }

    fn get_by_id(&self, contact_id: &str) -> Result<EmergencyContact> {
        let mut conn = get_connection(&self.pool)?;
        let row = emergency_contacts::table
            .find(contact_id)
            .select(EmergencyContactDB::as_select())
            .first::<EmergencyContactDB>(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn create(&self, new_contact: NewEmergencyContact) -> Result<EmergencyContact> {
        self.writer
            .exec(move |conn| {
                let row = NewEmergencyContactDB::from_domain(
                    new_contact,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );
                let created = diesel::insert_into(emergency_contacts::table)
                    .values(&row)
                    .returning(EmergencyContactDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(EmergencyContact::from(created))
            })
            .await
    }

    async fn update(&self, contact_update: EmergencyContactUpdate) -> Result<EmergencyContact> {
        self.writer
            .exec(move |conn| {
                let contact_id = contact_update.id.clone();
                let changes = EmergencyContactChangesetDB::from(contact_update);
                let updated = diesel::update(emergency_contacts::table.find(&contact_id))
                    .set(&changes)
                    .returning(EmergencyContactDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(EmergencyContact::from(updated))
            })
            .await
    }

    async fn delete(&self, contact_id: &str) -> Result<usize> {
        let contact_id = contact_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(emergency_contacts::table.find(contact_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
