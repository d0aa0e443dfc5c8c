//! Database models for hotels. `total_cost` is always derived from the rate
//! and the stay before it is written.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::utils::{decode_list, encode_list, parse_status};
use voyage_core::hotels::{Hotel, HotelUpdate, NewHotel};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::hotels)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HotelDB {
    pub id: String,
    pub trip_id: String,
    pub destination_id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub room_type: Option<String>,
    pub rate_per_night: f64,
    pub total_cost: f64,
    pub currency: String,
    pub booking_reference: Option<String>,
    pub confirmation_number: Option<String>,
    pub amenities: String,
    pub rating: Option<f64>,
    pub distance_to_transport: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::hotels)]
pub struct NewHotelDB {
    pub id: String,
    pub trip_id: String,
    pub destination_id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub room_type: Option<String>,
    pub rate_per_night: f64,
    pub total_cost: f64,
    pub currency: String,
    pub booking_reference: Option<String>,
    pub confirmation_number: Option<String>,
    pub amenities: String,
    pub rating: Option<f64>,
    pub distance_to_transport: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::hotels)]
#[diesel(treat_none_as_null = true)]
pub struct HotelChangesetDB {
    pub destination_id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub room_type: Option<String>,
    pub rate_per_night: f64,
    pub total_cost: f64,
    pub currency: String,
    pub booking_reference: Option<String>,
    pub confirmation_number: Option<String>,
    pub amenities: String,
    pub rating: Option<f64>,
    pub distance_to_transport: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub updated_at: NaiveDateTime,
}

impl From<HotelDB> for Hotel {
    fn from(db: HotelDB) -> Self {
        Self {
            id: db.id,
            trip_id: db.trip_id,
            destination_id: db.destination_id,
            name: db.name,
            address: db.address,
            phone: db.phone,
            email: db.email,
            website: db.website,
            check_in_date: db.check_in_date,
            check_out_date: db.check_out_date,
            room_type: db.room_type,
            rate_per_night: db.rate_per_night,
            total_cost: db.total_cost,
            currency: db.currency,
            booking_reference: db.booking_reference,
            confirmation_number: db.confirmation_number,
            amenities: decode_list(&db.amenities),
            rating: db.rating,
            distance_to_transport: db.distance_to_transport,
            notes: db.notes,
            status: parse_status(&db.status),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewHotelDB {
    pub fn from_domain(domain: NewHotel, id: String, now: NaiveDateTime) -> Self {
        let total_cost = domain.total_cost();
        Self {
            id: domain.id.unwrap_or(id),
            trip_id: domain.trip_id,
            destination_id: domain.destination_id,
            name: domain.name,
            address: domain.address,
            phone: domain.phone,
            email: domain.email,
            website: domain.website,
            check_in_date: domain.check_in_date,
            check_out_date: domain.check_out_date,
            room_type: domain.room_type,
            rate_per_night: domain.rate_per_night,
            total_cost,
            currency: domain.currency,
            booking_reference: domain.booking_reference,
            confirmation_number: domain.confirmation_number,
            amenities: encode_list(&domain.amenities),
            rating: domain.rating,
            distance_to_transport: domain.distance_to_transport,
            notes: domain.notes,
            status: domain.status.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl HotelChangesetDB {
    pub fn from_domain(domain: HotelUpdate, now: NaiveDateTime) -> Self {
        let total_cost = domain.total_cost();
        Self {
            destination_id: domain.destination_id,
            name: domain.name,
            address: domain.address,
            phone: domain.phone,
            email: domain.email,
            website: domain.website,
            check_in_date: domain.check_in_date,
            check_out_date: domain.check_out_date,
            room_type: domain.room_type,
            rate_per_night: domain.rate_per_night,
            total_cost,
            currency: domain.currency,
            booking_reference: domain.booking_reference,
            confirmation_number: domain.confirmation_number,
            amenities: encode_list(&domain.amenities),
            rating: domain.rating,
            distance_to_transport: domain.distance_to_transport,
            notes: domain.notes,
            status: domain.status.as_str().to_string(),
            updated_at: now,
        }
    }
}
