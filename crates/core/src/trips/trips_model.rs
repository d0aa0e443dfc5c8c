//! Trip domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::{ensure_date_order, inclusive_day_count};

/// Domain model representing a trip, the root of every other record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_budget: f64,
    #[serde(default)]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: NaiveDateTime,
}

impl Trip {
    /// Inclusive number of days covered by the trip, 0 when undated.
    pub fn total_days(&self) -> i64 {
        inclusive_day_count(self.start_date, self.end_date)
    }
}

/// Input model for creating a new trip.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewTrip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_budget: f64,
}

impl NewTrip {
    pub fn validate(&self) -> Result<()> {
        validate_trip_fields(&self.name, self.start_date, self.end_date, self.total_budget)
    }
}

/// Input model for a full update of an existing trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripUpdate {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_budget: f64,
}

impl TripUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_trip_fields(&self.name, self.start_date, self.end_date, self.total_budget)
    }
}

impl From<Trip> for TripUpdate {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            name: trip.name,
            description: trip.description,
            start_date: trip.start_date,
            end_date: trip.end_date,
            total_budget: trip.total_budget,
        }
    }
}

fn validate_trip_fields(
    name: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    total_budget: f64,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::invalid("Trip name cannot be empty").into());
    }
    if !total_budget.is_finite() || total_budget < 0.0 {
        return Err(ValidationError::invalid("Total budget must be a non-negative amount").into());
    }
    ensure_date_order("Trip", start_date, end_date)
}
