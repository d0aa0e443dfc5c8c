//! Database models for activities.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::utils::parse_status;
use voyage_core::itinerary::{Activity, ActivityUpdate, NewActivity};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::activities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActivityDB {
    pub id: String,
    pub trip_id: String,
    pub destination_id: String,
    pub title: String,
    pub description: Option<String>,
    pub planned_date: Option<NaiveDate>,
    pub planned_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    pub cost: f64,
    pub priority: i32,
    pub status: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub contact_info: Option<String>,
    pub booking_required: bool,
    pub booking_reference: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::activities)]
pub struct NewActivityDB {
    pub id: String,
    pub trip_id: String,
    pub destination_id: String,
    pub title: String,
    pub description: Option<String>,
    pub planned_date: Option<NaiveDate>,
    pub planned_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    pub cost: f64,
    pub priority: i32,
    pub status: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub contact_info: Option<String>,
    pub booking_required: bool,
    pub booking_reference: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::activities)]
#[diesel(treat_none_as_null = true)]
pub struct ActivityChangesetDB {
    pub destination_id: String,
    pub title: String,
    pub description: Option<String>,
    pub planned_date: Option<NaiveDate>,
    pub planned_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    pub cost: f64,
    pub priority: i32,
    pub status: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub contact_info: Option<String>,
    pub booking_required: bool,
    pub booking_reference: Option<String>,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<ActivityDB> for Activity {
    fn from(db: ActivityDB) -> Self {
        Self {
            id: db.id,
            trip_id: db.trip_id,
            destination_id: db.destination_id,
            title: db.title,
            description: db.description,
            planned_date: db.planned_date,
            planned_time: db.planned_time,
            duration_minutes: db.duration_minutes,
            cost: db.cost,
            priority: db.priority,
            status: parse_status(&db.status),
            category: db.category,
            location: db.location,
            contact_info: db.contact_info,
            booking_required: db.booking_required,
            booking_reference: db.booking_reference,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewActivityDB {
    pub fn from_domain(domain: NewActivity, id: String, now: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            trip_id: domain.trip_id,
            destination_id: domain.destination_id,
            title: domain.title,
            description: domain.description,
            planned_date: domain.planned_date,
            planned_time: domain.planned_time,
            duration_minutes: domain.duration_minutes,
            cost: domain.cost,
            priority: domain.priority,
            status: domain.status.as_str().to_string(),
            category: domain.category,
            location: domain.location,
            contact_info: domain.contact_info,
            booking_required: domain.booking_required,
            booking_reference: domain.booking_reference,
            notes: domain.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ActivityChangesetDB {
    pub fn from_domain(domain: ActivityUpdate, now: NaiveDateTime) -> Self {
        Self {
            destination_id: domain.destination_id,
            title: domain.title,
            description: domain.description,
            planned_date: domain.planned_date,
            planned_time: domain.planned_time,
            duration_minutes: domain.duration_minutes,
            cost: domain.cost,
            priority: domain.priority,
            status: domain.status.as_str().to_string(),
            category: domain.category,
            location: domain.location,
            contact_info: domain.contact_info,
            booking_required: domain.booking_required,
            booking_reference: domain.booking_reference,
            notes: domain.notes,
            updated_at: now,
        }
    }
}
