//! Database models for destinations.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::utils::{decode_list, encode_list};
use voyage_core::destinations::{Destination, DestinationUpdate, NewDestination};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::destinations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DestinationDB {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub country: String,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub duration_days: Option<i32>,
    pub budget: f64,
    pub description: Option<String>,
    pub highlights: String,
    pub weather: Option<String>,
    pub accommodation: Option<String>,
    pub tips: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::destinations)]
pub struct NewDestinationDB {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub country: String,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub duration_days: Option<i32>,
    pub budget: f64,
    pub description: Option<String>,
    pub highlights: String,
    pub weather: Option<String>,
    pub accommodation: Option<String>,
    pub tips: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::destinations)]
#[diesel(treat_none_as_null = true)]
pub struct DestinationChangesetDB {
    pub name: String,
    pub country: String,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub duration_days: Option<i32>,
    pub budget: f64,
    pub description: Option<String>,
    pub highlights: String,
    pub weather: Option<String>,
    pub accommodation: Option<String>,
    pub tips: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub updated_at: NaiveDateTime,
}

impl From<DestinationDB> for Destination {
    fn from(db: DestinationDB) -> Self {
        Self {
            id: db.id,
            trip_id: db.trip_id,
            name: db.name,
            country: db.country,
            arrival_date: db.arrival_date,
            departure_date: db.departure_date,
            duration_days: db.duration_days,
            budget: db.budget,
            description: db.description,
            highlights: decode_list(&db.highlights),
            weather: db.weather,
            accommodation: db.accommodation,
            tips: decode_list(&db.tips),
            latitude: db.latitude,
            longitude: db.longitude,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewDestinationDB {
    pub fn from_domain(domain: NewDestination, id: String, now: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            trip_id: domain.trip_id,
            name: domain.name,
            country: domain.country,
            arrival_date: domain.arrival_date,
            departure_date: domain.departure_date,
            duration_days: domain.duration_days,
            budget: domain.budget,
            description: domain.description,
            highlights: encode_list(&domain.highlights),
            weather: domain.weather,
            accommodation: domain.accommodation,
            tips: encode_list(&domain.tips),
            latitude: domain.latitude,
            longitude: domain.longitude,
            created_at: now,
            updated_at: now,
        }
    }
}

impl DestinationChangesetDB {
    pub fn from_domain(domain: DestinationUpdate, now: NaiveDateTime) -> Self {
        Self {
            name: domain.name,
            country: domain.country,
            arrival_date: domain.arrival_date,
            departure_date: domain.departure_date,
            duration_days: domain.duration_days,
            budget: domain.budget,
            description: domain.description,
            highlights: encode_list(&domain.highlights),
            weather: domain.weather,
            accommodation: domain.accommodation,
            tips: encode_list(&domain.tips),
            latitude: domain.latitude,
            longitude: domain.longitude,
            updated_at: now,
        }
    }
}
