//! Transportation segment models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::default_currency;
use crate::errors::{Result, ValidationError};

/// Booking state of a transportation leg.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TransportStatus {
    #[default]
    Planned,
    Booked,
    Completed,
    Cancelled,
}

impl TransportStatus {
    pub const ALL: [TransportStatus; 4] = [
        TransportStatus::Planned,
        TransportStatus::Booked,
        TransportStatus::Completed,
        TransportStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportStatus::Planned => "planned",
            TransportStatus::Booked => "booked",
            TransportStatus::Completed => "completed",
            TransportStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TransportStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown transport status: {s}"))
    }
}

/// One leg of the journey (flight, train, ferry...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transportation {
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
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub booking_reference: Option<String>,
    pub seat_number: Option<String>,
    pub class_type: Option<String>,
    #[serde(default)]
    pub status: TransportStatus,
    pub notes: Option<String>,
    #[serde(default)]
    pub is_standby: bool,
    pub confirmation_number: Option<String>,
    pub check_in_time: Option<NaiveDateTime>,
    pub gate_terminal: Option<String>,
    #[serde(default)]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a transportation segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransportation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
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
    pub status: TransportStatus,
    pub notes: Option<String>,
    pub is_standby: bool,
    pub confirmation_number: Option<String>,
    pub check_in_time: Option<NaiveDateTime>,
    pub gate_terminal: Option<String>,
}

impl Default for NewTransportation {
    fn default() -> Self {
        Self {
            id: None,
            trip_id: String::new(),
            from_destination_id: None,
            to_destination_id: None,
            transport_type: String::new(),
            provider: None,
            route_number: None,
            departure_datetime: None,
            arrival_datetime: None,
            departure_location: None,
            arrival_location: None,
            duration_minutes: None,
            cost: 0.0,
            currency: default_currency(),
            booking_reference: None,
            seat_number: None,
            class_type: None,
            status: TransportStatus::Planned,
            notes: None,
            is_standby: false,
            confirmation_number: None,
            check_in_time: None,
            gate_terminal: None,
        }
    }
}

impl NewTransportation {
    pub fn validate(&self) -> Result<()> {
        validate_segment(
            &self.transport_type,
            self.cost,
            self.departure_datetime,
            self.arrival_datetime,
        )
    }
}

/// Full replacement of a segment's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportationUpdate {
    pub id: String,
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
    pub status: TransportStatus,
    pub notes: Option<String>,
    pub is_standby: bool,
    pub confirmation_number: Option<String>,
    pub check_in_time: Option<NaiveDateTime>,
    pub gate_terminal: Option<String>,
}

impl TransportationUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_segment(
            &self.transport_type,
            self.cost,
            self.departure_datetime,
            self.arrival_datetime,
        )
    }
}

impl From<Transportation> for TransportationUpdate {
    fn from(t: Transportation) -> Self {
        Self {
            id: t.id,
            from_destination_id: t.from_destination_id,
            to_destination_id: t.to_destination_id,
            transport_type: t.transport_type,
            provider: t.provider,
            route_number: t.route_number,
            departure_datetime: t.departure_datetime,
            arrival_datetime: t.arrival_datetime,
            departure_location: t.departure_location,
            arrival_location: t.arrival_location,
            duration_minutes: t.duration_minutes,
            cost: t.cost,
            currency: t.currency,
            booking_reference: t.booking_reference,
            seat_number: t.seat_number,
            class_type: t.class_type,
            status: t.status,
            notes: t.notes,
            is_standby: t.is_standby,
            confirmation_number: t.confirmation_number,
            check_in_time: t.check_in_time,
            gate_terminal: t.gate_terminal,
        }
    }
}

fn validate_segment(
    transport_type: &str,
    cost: f64,
    departure: Option<NaiveDateTime>,
    arrival: Option<NaiveDateTime>,
) -> Result<()> {
    if transport_type.trim().is_empty() {
        return Err(ValidationError::MissingField("transport_type".to_string()).into());
    }
    if !cost.is_finite() || cost < 0.0 {
        return Err(ValidationError::invalid("Transportation cost must be non-negative").into());
    }
    if let (Some(departure), Some(arrival)) = (departure, arrival) {
        if arrival < departure {
            return Err(ValidationError::invalid(format!(
                "Transportation: arrival {arrival} precedes departure {departure}"
            ))
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for status in TransportStatus::ALL {
            assert_eq!(status.as_str().parse::<TransportStatus>(), Ok(status));
        }
        assert_eq!("Booked".parse::<TransportStatus>(), Ok(TransportStatus::Booked));
        assert!("boarding".parse::<TransportStatus>().is_err());
    }

    #[test]
    fn test_validate_rejects_arrival_before_departure() {
        let departure = chrono::NaiveDate::from_ymd_opt(2024, 11, 8)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let segment = NewTransportation {
            trip_id: "trip-1".to_string(),
            transport_type: "flight".to_string(),
            departure_datetime: Some(departure),
            arrival_datetime: Some(departure - chrono::Duration::hours(1)),
            ..Default::default()
        };
        assert!(segment.validate().is_err());
    }

    #[test]
    fn test_validate_requires_transport_type() {
        let segment = NewTransportation {
            trip_id: "trip-1".to_string(),
            ..Default::default()
        };
        let err = segment.validate().unwrap_err();
        assert!(err.to_string().contains("transport_type"));
    }
}
