//! Lodging models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::default_currency;
use crate::errors::{Result, ValidationError};
use crate::utils::{ensure_date_order, nights_between};

/// Reservation state of a hotel stay.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum HotelStatus {
    #[default]
    Planned,
    Booked,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl HotelStatus {
    pub const ALL: [HotelStatus; 5] = [
        HotelStatus::Planned,
        HotelStatus::Booked,
        HotelStatus::CheckedIn,
        HotelStatus::CheckedOut,
        HotelStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HotelStatus::Planned => "planned",
            HotelStatus::Booked => "booked",
            HotelStatus::CheckedIn => "checked_in",
            HotelStatus::CheckedOut => "checked_out",
            HotelStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for HotelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotelStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().replace([' ', '-'], "_");
        HotelStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("Unknown hotel status: {s}"))
    }
}

/// `rate_per_night` times the number of nights in the stay.
pub fn stay_cost(
    rate_per_night: f64,
    check_in_date: Option<NaiveDate>,
    check_out_date: Option<NaiveDate>,
) -> f64 {
    rate_per_night * nights_between(check_in_date, check_out_date) as f64
}

/// A place to stay at a destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
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
    #[serde(default)]
    pub rate_per_night: f64,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub booking_reference: Option<String>,
    pub confirmation_number: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub rating: Option<f64>,
    pub distance_to_transport: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: HotelStatus,
    #[serde(default)]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: NaiveDateTime,
}

impl Hotel {
    pub fn nights(&self) -> i64 {
        nights_between(self.check_in_date, self.check_out_date)
    }
}

/// Input model for creating a hotel. The total cost is derived, not supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHotel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
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
    pub currency: String,
    pub booking_reference: Option<String>,
    pub confirmation_number: Option<String>,
    pub amenities: Vec<String>,
    pub rating: Option<f64>,
    pub distance_to_transport: Option<String>,
    pub notes: Option<String>,
    pub status: HotelStatus,
}

impl Default for NewHotel {
    fn default() -> Self {
        Self {
            id: None,
            trip_id: String::new(),
            destination_id: String::new(),
            name: String::new(),
            address: None,
            phone: None,
            email: None,
            website: None,
            check_in_date: None,
            check_out_date: None,
            room_type: None,
            rate_per_night: 0.0,
            currency: default_currency(),
            booking_reference: None,
            confirmation_number: None,
            amenities: Vec::new(),
            rating: None,
            distance_to_transport: None,
            notes: None,
            status: HotelStatus::Planned,
        }
    }
}

impl NewHotel {
    pub fn total_cost(&self) -> f64 {
        stay_cost(self.rate_per_night, self.check_in_date, self.check_out_date)
    }

    pub fn validate(&self) -> Result<()> {
        if self.destination_id.trim().is_empty() {
            return Err(ValidationError::MissingField("destination_id".to_string()).into());
        }
        validate_hotel_fields(
            &self.name,
            self.rate_per_night,
            self.rating,
            self.check_in_date,
            self.check_out_date,
        )
    }
}

/// Full replacement of a hotel's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelUpdate {
    pub id: String,
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
    pub currency: String,
    pub booking_reference: Option<String>,
    pub confirmation_number: Option<String>,
    pub amenities: Vec<String>,
    pub rating: Option<f64>,
    pub distance_to_transport: Option<String>,
    pub notes: Option<String>,
    pub status: HotelStatus,
}

impl HotelUpdate {
    pub fn total_cost(&self) -> f64 {
        stay_cost(self.rate_per_night, self.check_in_date, self.check_out_date)
    }

    pub fn validate(&self) -> Result<()> {
        validate_hotel_fields(
            &self.name,
            self.rate_per_night,
            self.rating,
            self.check_in_date,
            self.check_out_date,
        )
    }
}

impl From<Hotel> for HotelUpdate {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            destination_id: h.destination_id,
            name: h.name,
            address: h.address,
            phone: h.phone,
            email: h.email,
            website: h.website,
            check_in_date: h.check_in_date,
            check_out_date: h.check_out_date,
            room_type: h.room_type,
            rate_per_night: h.rate_per_night,
            currency: h.currency,
            booking_reference: h.booking_reference,
            confirmation_number: h.confirmation_number,
            amenities: h.amenities,
            rating: h.rating,
            distance_to_transport: h.distance_to_transport,
            notes: h.notes,
            status: h.status,
        }
    }
}

fn validate_hotel_fields(
    name: &str,
    rate_per_night: f64,
    rating: Option<f64>,
    check_in_date: Option<NaiveDate>,
    check_out_date: Option<NaiveDate>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::invalid("Hotel name cannot be empty").into());
    }
    if !rate_per_night.is_finite() || rate_per_night < 0.0 {
        return Err(ValidationError::invalid("Nightly rate must be non-negative").into());
    }
    if let Some(rating) = rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(ValidationError::invalid("Rating must be between 0 and 5").into());
        }
    }
    ensure_date_order("Hotel", check_in_date, check_out_date)
}
