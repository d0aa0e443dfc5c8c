//! Database models for transportation segments.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::parse_status;
use voyage_core::transportation::{NewTransportation, Transportation, TransportationUpdate};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transportation)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransportationDB {
    pub id: String,
    pub trip_id: String,
    pub from_destination_id: Option<String>,
    pub to_destination_id: Option<String>,
    pub transport_type: String,
    pub provider: Option<String>,
    pub route_number: Option<String>,
    pub departure_datetime: Option<NaiveDateTime>,
    pub arrival_datetime: Option<NaiveDateTime>,
    pub departure_location: Option<String>,
    pub arrival_location: Option<String>,
    pub duration_minutes: Option<i32>,
    pub cost: f64,
    pub currency: String,
    pub booking_reference: Option<String>,
    pub seat_number: Option<String>,
    pub class_type: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub is_standby: bool,
    pub confirmation_number: Option<String>,
    pub check_in_time: Option<NaiveDateTime>,
    pub gate_terminal: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transportation)]
pub struct NewTransportationDB {
    pub id: String,
    pub trip_id: String,
    pub from_destination_id: Option<String>,
    pub to_destination_id: Option<String>,
    pub transport_type: String,
    pub provider: Option<String>,
    pub route_number: Option<String>,
    pub departure_datetime: Option<NaiveDateTime>,
    pub arrival_datetime: Option<NaiveDateTime>,
    pub departure_location: Option<String>,
    pub arrival_location: Option<String>,
    pub duration_minutes: Option<i32>,
    pub cost: f64,
    pub currency: String,
    pub booking_reference: Option<String>,
    pub seat_number: Option<String>,
    pub class_type: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub is_standby: bool,
    pub confirmation_number: Option<String>,
    pub check_in_time: Option<NaiveDateTime>,
    pub gate_terminal: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::transportation)]
#[diesel(treat_none_as_null = true)]
pub struct TransportationChangesetDB {
    pub from_destination_id: Option<String>,
    pub to_destination_id: Option<String>,
    pub transport_type: String,
    pub provider: Option<String>,
    pub route_number: Option<String>,
    pub departure_datetime: Option<NaiveDateTime>,
    pub arrival_datetime: Option<NaiveDateTime>,
    pub departure_location: Option<String>,
    pub arrival_location: Option<String>,
    pub duration_minutes: Option<i32>,
    pub cost: f64,
    pub currency: String,
    pub booking_reference: Option<String>,
    pub seat_number: Option<String>,
    pub class_type: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub is_standby: bool,
    pub confirmation_number: Option<String>,
    pub check_in_time: Option<NaiveDateTime>,
    pub gate_terminal: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<TransportationDB> for Transportation {
    fn from(db: TransportationDB) -> Self {
        Self {
            id: db.id,
            trip_id: db.trip_id,
            from_destination_id: db.from_destination_id,
            to_destination_id: db.to_destination_id,
            transport_type: db.transport_type,
            provider: db.provider,
            route_number: db.route_number,
            departure_datetime: db.departure_datetime,
            arrival_datetime: db.arrival_datetime,
            departure_location: db.departure_location,
            arrival_location: db.arrival_location,
            duration_minutes: db.duration_minutes,
            cost: db.cost,
            currency: db.currency,
            booking_reference: db.booking_reference,
            seat_number: db.seat_number,
            class_type: db.class_type,
            status: parse_status(&db.status),
            notes: db.notes,
            is_standby: db.is_standby,
            confirmation_number: db.confirmation_number,
            check_in_time: db.check_in_time,
            gate_terminal: db.gate_terminal,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewTransportationDB {
    pub fn from_domain(domain: NewTransportation, id: String, now: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            trip_id: domain.trip_id,
            from_destination_id: domain.from_destination_id,
            to_destination_id: domain.to_destination_id,
            transport_type: domain.transport_type,
            provider: domain.provider,
            route_number: domain.route_number,
            departure_datetime: domain.departure_datetime,
            arrival_datetime: domain.arrival_datetime,
            departure_location: domain.departure_location,
            arrival_location: domain.arrival_location,
            duration_minutes: domain.duration_minutes,
            cost: domain.cost,
            currency: domain.currency,
            booking_reference: domain.booking_reference,
            seat_number: domain.seat_number,
            class_type: domain.class_type,
            status: domain.status.as_str().to_string(),
            notes: domain.notes,
            is_standby: domain.is_standby,
            confirmation_number: domain.confirmation_number,
            check_in_time: domain.check_in_time,
            gate_terminal: domain.gate_terminal,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TransportationChangesetDB {
    pub fn from_domain(domain: TransportationUpdate, now: NaiveDateTime) -> Self {
        Self {
            from_destination_id: domain.from_destination_id,
            to_destination_id: domain.to_destination_id,
            transport_type: domain.transport_type,
            provider: domain.provider,
            route_number: domain.route_number,
            departure_datetime: domain.departure_datetime,
            arrival_datetime: domain.arrival_datetime,
            departure_location: domain.departure_location,
            arrival_location: domain.arrival_location,
            duration_minutes: domain.duration_minutes,
            cost: domain.cost,
            currency: domain.currency,
            booking_reference: domain.booking_reference,
            seat_number: domain.seat_number,
            class_type: domain.class_type,
            status: domain.status.as_str().to_string(),
            notes: domain.notes,
            is_standby: domain.is_standby,
            confirmation_number: domain.confirmation_number,
            check_in_time: domain.check_in_time,
            gate_terminal: domain.gate_terminal,
            updated_at: now,
        }
    }
}
