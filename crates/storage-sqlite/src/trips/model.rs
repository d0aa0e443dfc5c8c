//! Database models for trips.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use voyage_core::trips::{NewTrip, Trip, TripUpdate};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::trips)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TripDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_budget: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::trips)]
pub struct NewTripDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_budget: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full replacement of the editable columns; `None` clears the column.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::trips)]
#[diesel(treat_none_as_null = true)]
pub struct TripChangesetDB {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_budget: f64,
    pub updated_at: NaiveDateTime,
}

impl From<TripDB> for Trip {
    fn from(db: TripDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
            start_date: db.start_date,
            end_date: db.end_date,
            total_budget: db.total_budget,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewTripDB {
    pub fn from_domain(domain: NewTrip, id: String, now: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            name: domain.name,
            description: domain.description,
            start_date: domain.start_date,
            end_date: domain.end_date,
            total_budget: domain.total_budget,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TripChangesetDB {
    pub fn from_domain(domain: TripUpdate, now: NaiveDateTime) -> Self {
        Self {
            name: domain.name,
            description: domain.description,
            start_date: domain.start_date,
            end_date: domain.end_date,
            total_budget: domain.total_budget,
            updated_at: now,
        }
    }
}
