//! Fixture data for the bundled sample journey.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use super::trips_model::NewTrip;
use crate::budget::NewBudgetCategory;
use crate::destinations::NewDestination;
use crate::transportation::{NewTransportation, TransportStatus};

pub const SAMPLE_TRIP_NAME: &str = "Calgary to Zhongshan Journey";

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn datetime(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    date(y, m, d).and_then(|day| day.and_hms_opt(hour, minute, 0))
}

pub(crate) fn sample_trip() -> NewTrip {
    NewTrip {
        id: None,
        name: SAMPLE_TRIP_NAME.to_string(),
        description: Some(
            "50-day adventure from Calgary, Alberta to Zhongshan, China with stops in Tokyo, \
             Shenzhen, Jinan, and Beijing"
                .to_string(),
        ),
        start_date: date(2024, 11, 8),
        end_date: date(2024, 12, 28),
        total_budget: 10000.0,
    }
}

struct Stop {
    name: &'static str,
    country: &'static str,
    arrival: (u32, u32),
    departure: (u32, u32),
    days: i32,
    budget: f64,
    description: &'static str,
    weather: &'static str,
    accommodation: &'static str,
}

const STOPS: [Stop; 6] = [
    Stop {
        name: "Calgary",
        country: "Canada",
        arrival: (11, 8),
        departure: (11, 8),
        days: 0,
        budget: 0.0,
        description: "Starting point - Calgary, Alberta",
        weather: "Cold autumn weather, -5 to 5°C",
        accommodation: "Home base",
    },
    Stop {
        name: "Tokyo",
        country: "Japan",
        arrival: (11, 9),
        departure: (11, 12),
        days: 3,
        budget: 1200.0,
        description: "First stop - Tokyo exploration",
        weather: "Cool autumn, 10-18°C",
        accommodation: "Hotel near Narita Airport",
    },
    Stop {
        name: "Shenzhen",
        country: "China",
        arrival: (11, 12),
        departure: (11, 15),
        days: 3,
        budget: 600.0,
        description: "Modern Chinese city experience",
        weather: "Mild autumn, 18-25°C",
        accommodation: "Vienna Hotel Shenzhen North",
    },
    Stop {
        name: "Zhongshan",
        country: "China",
        arrival: (11, 15),
        departure: (11, 18),
        days: 3,
        budget: 400.0,
        description: "Main destination - extended stay",
        weather: "Pleasant autumn, 20-28°C",
        accommodation: "Local guesthouse",
    },
    Stop {
        name: "Jinan",
        country: "China",
        arrival: (11, 18),
        departure: (11, 23),
        days: 5,
        budget: 800.0,
        description: "Northern China exploration",
        weather: "Cool autumn, 5-15°C",
        accommodation: "Hotel near HSR station",
    },
    Stop {
        name: "Beijing",
        country: "China",
        arrival: (11, 23),
        departure: (11, 26),
        days: 3,
        budget: 900.0,
        description: "Capital city highlights",
        weather: "Cold autumn, 0-10°C",
        accommodation: "Hampton by Hilton Beijing South",
    },
];

pub(crate) fn sample_destinations(trip_id: &str) -> Vec<NewDestination> {
    STOPS
        .iter()
        .map(|stop| NewDestination {
            trip_id: trip_id.to_string(),
            name: stop.name.to_string(),
            country: stop.country.to_string(),
            arrival_date: date(2024, stop.arrival.0, stop.arrival.1),
            departure_date: date(2024, stop.departure.0, stop.departure.1),
            duration_days: Some(stop.days),
            budget: stop.budget,
            description: Some(stop.description.to_string()),
            weather: Some(stop.weather.to_string()),
            accommodation: Some(stop.accommodation.to_string()),
            ..Default::default()
        })
        .collect()
}

/// Flights between the first stops; `destination_ids` maps stop name to id.
pub(crate) fn sample_segments(
    trip_id: &str,
    destination_ids: &HashMap<String, String>,
) -> Vec<NewTransportation> {
    let id_of = |name: &str| destination_ids.get(name).cloned();
    vec![
        NewTransportation {
            trip_id: trip_id.to_string(),
            from_destination_id: id_of("Calgary"),
            to_destination_id: id_of("Tokyo"),
            transport_type: "flight".to_string(),
            provider: Some("WestJet".to_string()),
            departure_datetime: datetime(2024, 11, 8, 14, 0),
            arrival_datetime: datetime(2024, 11, 9, 16, 30),
            departure_location: Some("Calgary International Airport (YYC)".to_string()),
            arrival_location: Some("Tokyo Narita Airport (NRT)".to_string()),
            cost: 800.0,
            is_standby: true,
            status: TransportStatus::Planned,
            notes: Some("Standby flight - arrive early at airport".to_string()),
            ..Default::default()
        },
        NewTransportation {
            trip_id: trip_id.to_string(),
            from_destination_id: id_of("Tokyo"),
            to_destination_id: id_of("Shenzhen"),
            transport_type: "flight".to_string(),
            provider: Some("Various Airlines".to_string()),
            departure_datetime: datetime(2024, 11, 12, 10, 0),
            arrival_datetime: datetime(2024, 11, 12, 14, 0),
            departure_location: Some("Tokyo Narita Airport (NRT)".to_string()),
            arrival_location: Some("Hong Kong International Airport (HKG)".to_string()),
            cost: 400.0,
            status: TransportStatus::Planned,
            notes: Some("Flight to Hong Kong, then ferry to Shenzhen".to_string()),
            ..Default::default()
        },
    ]
}

pub(crate) fn sample_categories(trip_id: &str) -> Vec<NewBudgetCategory> {
    [
        ("Transportation", 2000.0, "Flights, trains, buses, ferries"),
        ("Accommodation", 3000.0, "Hotels and lodging"),
        ("Food & Dining", 2500.0, "Meals and dining experiences"),
        ("Activities & Sightseeing", 1500.0, "Tours, attractions, entertainment"),
        ("Shopping & Souvenirs", 800.0, "Gifts and personal purchases"),
        ("Emergency Fund", 200.0, "Unexpected expenses"),
    ]
    .into_iter()
    .map(|(name, allocated, description)| NewBudgetCategory {
        description: Some(description.to_string()),
        ..NewBudgetCategory::new(trip_id, name, allocated)
    })
    .collect()
}
