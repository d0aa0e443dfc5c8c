//! Database models for emergency contacts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use voyage_core::contacts::{EmergencyContact, EmergencyContactUpdate, NewEmergencyContact};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::emergency_contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmergencyContactDB {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub relationship: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::emergency_contacts)]
pub struct NewEmergencyContactDB {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub relationship: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::emergency_contacts)]
#[diesel(treat_none_as_null = true)]
pub struct EmergencyContactChangesetDB {
    pub name: String,
    pub relationship: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl From<EmergencyContactDB> for EmergencyContact {
    fn from(db: EmergencyContactDB) -> Self {
        Self {
            id: db.id,
            trip_id: db.trip_id,
            name: db.name,
            relationship: db.relationship,
            phone: db.phone,
            email: db.email,
            address: db.address,
            created_at: db.created_at,
        }
    }
}

impl NewEmergencyContactDB {
    pub fn from_domain(domain: NewEmergencyContact, id: String, now: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            trip_id: domain.trip_id,
            name: domain.name,
            relationship: domain.relationship,
            phone: domain.phone,
            email: domain.email,
            address: domain.address,
            created_at: now,
        }
    }
}

impl From<EmergencyContactUpdate> for EmergencyContactChangesetDB {
    fn from(domain: EmergencyContactUpdate) -> Self {
        Self {
            name: domain.name,
            relationship: domain.relationship,
            phone: domain.phone,
            email: domain.email,
            address: domain.address,
        }
    }
}
