//! Destination domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::ensure_date_order;

/// A city or stop within a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub country: String,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub duration_days: Option<i32>,
    #[serde(default)]
    pub budget: f64,
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub weather: Option<String>,
    pub accommodation: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: NaiveDateTime,
}

impl Destination {
    /// Display label used by summaries: "Tokyo, Japan".
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Input model for creating a destination.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub trip_id: String,
    pub name: String,
    pub country: String,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub duration_days: Option<i32>,
    pub budget: f64,
    pub description: Option<String>,
    pub highlights: Vec<String>,
    pub weather: Option<String>,
    pub accommodation: Option<String>,
    pub tips: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewDestination {
    pub fn validate(&self) -> Result<()> {
        validate_destination_fields(
            &self.name,
            &self.country,
            self.arrival_date,
            self.departure_date,
            self.budget,
        )
    }
}

/// Full replacement of a destination's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationUpdate {
    pub id: String,
    pub name: String,
    pub country: String,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub duration_days: Option<i32>,
    pub budget: f64,
    pub description: Option<String>,
    pub highlights: Vec<String>,
    pub weather: Option<String>,
    pub accommodation: Option<String>,
    pub tips: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl DestinationUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_destination_fields(
            &self.name,
            &self.country,
            self.arrival_date,
            self.departure_date,
            self.budget,
        )
    }
}

impl From<Destination> for DestinationUpdate {
    fn from(d: Destination) -> Self {
        Self {
            id: d.id,
            name: d.name,
            country: d.country,
            arrival_date: d.arrival_date,
            departure_date: d.departure_date,
            duration_days: d.duration_days,
            budget: d.budget,
            description: d.description,
            highlights: d.highlights,
            weather: d.weather,
            accommodation: d.accommodation,
            tips: d.tips,
            latitude: d.latitude,
            longitude: d.longitude,
        }
    }
}

fn validate_destination_fields(
    name: &str,
    country: &str,
    arrival_date: Option<NaiveDate>,
    departure_date: Option<NaiveDate>,
    budget: f64,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::invalid("Destination name cannot be empty").into());
    }
    if country.trim().is_empty() {
        return Err(ValidationError::invalid("Destination country cannot be empty").into());
    }
    if !budget.is_finite() || budget < 0.0 {
        return Err(ValidationError::invalid("Destination budget must be non-negative").into());
    }
    ensure_date_order("Destination", arrival_date, departure_date)
}
