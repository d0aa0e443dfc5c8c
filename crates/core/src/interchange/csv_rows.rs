//! Flat CSV shapes for records whose list fields CSV cannot hold directly.
//!
//! List columns (`highlights`, `tips`, `amenities`) are JSON arrays inside a
//! single cell. On the way in, every column except the name is optional so
//! hand-made spreadsheets load too. An empty cell reads back as `None`, so
//! imports treat blank optional text as absent whatever the source format.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURRENCY;
use crate::destinations::Destination;
use crate::hotels::{Hotel, HotelStatus};

const UNKNOWN: &str = "Unknown";

/// The flat tables of an export, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Table {
    Trip,
    Destinations,
    Activities,
    Transportation,
    BudgetCategories,
    Expenses,
    Hotels,
    EmergencyContacts,
}

impl Table {
    pub const ALL: [Table; 8] = [
        Table::Trip,
        Table::Destinations,
        Table::Activities,
        Table::Transportation,
        Table::BudgetCategories,
        Table::Expenses,
        Table::Hotels,
        Table::EmergencyContacts,
    ];

    /// Entry name inside the CSV archive.
    pub fn file_name(self) -> &'static str {
        match self {
            Table::Trip => "trip.csv",
            Table::Destinations => "destinations.csv",
            Table::Activities => "activities.csv",
            Table::Transportation => "transportation.csv",
            Table::BudgetCategories => "budget_categories.csv",
            Table::Expenses => "expenses.csv",
            Table::Hotels => "hotels.csv",
            Table::EmergencyContacts => "emergency_contacts.csv",
        }
    }

    /// Worksheet name inside the xlsx workbook.
    pub fn sheet_name(self) -> &'static str {
        match self {
            Table::Trip => "Trip_Info",
            Table::Destinations => "Destinations",
            Table::Activities => "Activities",
            Table::Transportation => "Transportation",
            Table::BudgetCategories => "Budget_Categories",
            Table::Expenses => "Expenses",
            Table::Hotels => "Hotels",
            Table::EmergencyContacts => "Emergency_Contacts",
        }
    }
}

fn encode_list(items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    serde_json::to_string(items).ok()
}

/// Accepts a JSON array or, failing that, a comma separated list.
fn decode_list(cell: Option<&str>) -> Vec<String> {
    let Some(cell) = cell.map(str::trim).filter(|c| !c.is_empty()) else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<String>>(cell).unwrap_or_else(|_| {
        cell.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub(crate) struct DestinationRow {
    pub id: Option<String>,
    pub trip_id: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    pub duration_days: Option<i32>,
    pub budget: Option<f64>,
    pub description: Option<String>,
    pub highlights: Option<String>,
    pub weather: Option<String>,
    pub accommodation: Option<String>,
    pub tips: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<&Destination> for DestinationRow {
    fn from(d: &Destination) -> Self {
        Self {
            id: Some(d.id.clone()),
            trip_id: Some(d.trip_id.clone()),
            name: Some(d.name.clone()),
            country: Some(d.country.clone()),
            arrival_date: d.arrival_date,
            departure_date: d.departure_date,
            duration_days: d.duration_days,
            budget: Some(d.budget),
            description: d.description.clone(),
            highlights: encode_list(&d.highlights),
            weather: d.weather.clone(),
            accommodation: d.accommodation.clone(),
            tips: encode_list(&d.tips),
            latitude: d.latitude,
            longitude: d.longitude,
            created_at: Some(d.created_at),
            updated_at: Some(d.updated_at),
        }
    }
}

impl DestinationRow {
    /// `row_number` stands in for the id when the sheet has no id column.
    pub fn into_destination(self, row_number: usize) -> Destination {
        Destination {
            id: self.id.unwrap_or_else(|| format!("row-{row_number}")),
            trip_id: self.trip_id.unwrap_or_default(),
            name: self.name.unwrap_or_else(|| UNKNOWN.to_string()),
            country: self.country.unwrap_or_else(|| UNKNOWN.to_string()),
            arrival_date: self.arrival_date,
            departure_date: self.departure_date,
            duration_days: self.duration_days,
            budget: self.budget.unwrap_or(0.0),
            description: self.description,
            highlights: decode_list(self.highlights.as_deref()),
            weather: self.weather,
            accommodation: self.accommodation,
            tips: decode_list(self.tips.as_deref()),
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: self.created_at.unwrap_or_default(),
            updated_at: self.updated_at.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub(crate) struct HotelRow {
    pub id: Option<String>,
    pub trip_id: Option<String>,
    pub destination_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub room_type: Option<String>,
    pub rate_per_night: Option<f64>,
    pub total_cost: Option<f64>,
    pub currency: Option<String>,
    pub booking_reference: Option<String>,
    pub confirmation_number: Option<String>,
    pub amenities: Option<String>,
    pub rating: Option<f64>,
    pub distance_to_transport: Option<String>,
    pub notes: Option<String>,
    pub status: Option<HotelStatus>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<&Hotel> for HotelRow {
    fn from(h: &Hotel) -> Self {
        Self {
            id: Some(h.id.clone()),
            trip_id: Some(h.trip_id.clone()),
            destination_id: Some(h.destination_id.clone()),
            name: Some(h.name.clone()),
            address: h.address.clone(),
            phone: h.phone.clone(),
            email: h.email.clone(),
            website: h.website.clone(),
            check_in_date: h.check_in_date,
            check_out_date: h.check_out_date,
            room_type: h.room_type.clone(),
            rate_per_night: Some(h.rate_per_night),
            total_cost: Some(h.total_cost),
            currency: Some(h.currency.clone()),
            booking_reference: h.booking_reference.clone(),
            confirmation_number: h.confirmation_number.clone(),
            amenities: encode_list(&h.amenities),
            rating: h.rating,
            distance_to_transport: h.distance_to_transport.clone(),
            notes: h.notes.clone(),
            status: Some(h.status),
            created_at: Some(h.created_at),
            updated_at: Some(h.updated_at),
        }
    }
}

impl HotelRow {
    pub fn into_hotel(self, row_number: usize) -> Hotel {
        Hotel {
            id: self.id.unwrap_or_else(|| format!("row-{row_number}")),
            trip_id: self.trip_id.unwrap_or_default(),
            destination_id: self.destination_id.unwrap_or_default(),
            name: self.name.unwrap_or_else(|| UNKNOWN.to_string()),
            address: self.address,
            phone: self.phone,
            email: self.email,
            website: self.website,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            room_type: self.room_type,
            rate_per_night: self.rate_per_night.unwrap_or(0.0),
            total_cost: self.total_cost.unwrap_or(0.0),
            currency: self
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            booking_reference: self.booking_reference,
            confirmation_number: self.confirmation_number,
            amenities: decode_list(self.amenities.as_deref()),
            rating: self.rating,
            distance_to_transport: self.distance_to_transport,
            notes: self.notes,
            status: self.status.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_default(),
            updated_at: self.updated_at.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_accepts_json_and_plain_text() {
        assert_eq!(
            decode_list(Some(r#"["Great Wall","Forbidden City"]"#)),
            vec!["Great Wall", "Forbidden City"]
        );
        assert_eq!(
            decode_list(Some("Great Wall, Forbidden City")),
            vec!["Great Wall", "Forbidden City"]
        );
        assert!(decode_list(Some("  ")).is_empty());
        assert!(decode_list(None).is_empty());
    }

    #[test]
    fn test_sparse_destination_row_gets_defaults() {
        let destination = DestinationRow {
            name: Some("Jinan".to_string()),
            ..Default::default()
        }
        .into_destination(3);
        assert_eq!(destination.id, "row-3");
        assert_eq!(destination.country, "Unknown");
        assert_eq!(destination.budget, 0.0);
    }
}
