//! Parsing import sources and turning source records into insertable ones.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

use super::csv_rows::{DestinationRow, HotelRow, Table};
use super::interchange_model::{ImportDocument, ImportFormat, TripHeader};
use super::spreadsheet::parse_xlsx;
use crate::budget::{BudgetCategory, NewBudgetCategory};
use crate::contacts::{EmergencyContact, NewEmergencyContact};
use crate::destinations::{Destination, NewDestination};
use crate::errors::Result;
use crate::expenses::{Expense, NewExpense};
use crate::hotels::{Hotel, NewHotel};
use crate::itinerary::{Activity, NewActivity};
use crate::transportation::{NewTransportation, Transportation};

pub fn parse(format: ImportFormat, bytes: &[u8]) -> Result<ImportDocument> {
    match format {
        ImportFormat::Json => parse_json(bytes),
        ImportFormat::CsvArchive => parse_csv_archive(bytes),
        ImportFormat::DestinationsCsv => parse_destinations_csv(bytes),
        ImportFormat::Xlsx => parse_xlsx(bytes),
    }
}

pub fn parse_json(bytes: &[u8]) -> Result<ImportDocument> {
    Ok(serde_json::from_slice(bytes)?)
}

pub(crate) fn read_csv<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

fn destinations_from_rows(rows: Vec<DestinationRow>) -> Vec<Destination> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| row.into_destination(index + 1))
        .collect()
}

/// A single CSV is read as a destinations table for a new trip.
pub fn parse_destinations_csv(bytes: &[u8]) -> Result<ImportDocument> {
    Ok(ImportDocument {
        destinations: destinations_from_rows(read_csv(bytes)?),
        ..Default::default()
    })
}

fn read_entry(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> Result<Option<Vec<u8>>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    Ok(Some(contents))
}

fn read_table<T, F>(source: &mut F, table: Table) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    F: FnMut(Table) -> Result<Option<Vec<u8>>>,
{
    match source(table)? {
        Some(bytes) => read_csv(&bytes),
        None => Ok(Vec::new()),
    }
}

/// Builds a document from per-table CSV bytes. `source` returns `None` for a
/// table the file does not carry, which is read as empty.
pub(crate) fn document_from_tables<F>(mut source: F) -> Result<ImportDocument>
where
    F: FnMut(Table) -> Result<Option<Vec<u8>>>,
{
    let trip = read_table::<TripHeader, _>(&mut source, Table::Trip)?
        .into_iter()
        .next();
    let destinations = destinations_from_rows(read_table(&mut source, Table::Destinations)?);
    let hotels = read_table::<HotelRow, _>(&mut source, Table::Hotels)?
        .into_iter()
        .enumerate()
        .map(|(index, row)| row.into_hotel(index + 1))
        .collect();

    Ok(ImportDocument {
        trip,
        destinations,
        activities: read_table(&mut source, Table::Activities)?,
        transportation: read_table(&mut source, Table::Transportation)?,
        budget_categories: read_table(&mut source, Table::BudgetCategories)?,
        expenses: read_table(&mut source, Table::Expenses)?,
        hotels,
        emergency_contacts: read_table(&mut source, Table::EmergencyContacts)?,
    })
}

/// Reads the per-table CSV files written by the archive exporter. Missing
/// tables are treated as empty.
pub fn parse_csv_archive(bytes: &[u8]) -> Result<ImportDocument> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    document_from_tables(|table| read_entry(&mut archive, table.file_name()))
}

/// Blank optional text is stored as `None`, matching what a CSV cell yields.
pub(crate) fn text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Source id to newly assigned id, per table.
#[derive(Debug, Default)]
pub(crate) struct IdRemap {
    pub destinations: HashMap<String, String>,
    pub activities: HashMap<String, String>,
    pub transportation: HashMap<String, String>,
    pub hotels: HashMap<String, String>,
}

fn remap(map: &HashMap<String, String>, source_id: Option<&String>) -> Option<String> {
    source_id.and_then(|id| map.get(id).cloned())
}

pub(crate) fn new_destination(source: &Destination, trip_id: &str) -> NewDestination {
    NewDestination {
        id: None,
        trip_id: trip_id.to_string(),
        name: source.name.clone(),
        country: source.country.clone(),
        arrival_date: source.arrival_date,
        departure_date: source.departure_date,
        duration_days: source.duration_days,
        budget: source.budget,
        description: text(&source.description),
        highlights: source.highlights.clone(),
        weather: text(&source.weather),
        accommodation: text(&source.accommodation),
        tips: source.tips.clone(),
        latitude: source.latitude,
        longitude: source.longitude,
    }
}

/// `None` when the activity's destination was not imported.
pub(crate) fn new_activity(source: &Activity, trip_id: &str, ids: &IdRemap) -> Option<NewActivity> {
    let destination_id = ids.destinations.get(&source.destination_id)?.clone();
    Some(NewActivity {
        id: None,
        trip_id: trip_id.to_string(),
        destination_id,
        title: source.title.clone(),
        description: text(&source.description),
        planned_date: source.planned_date,
        planned_time: source.planned_time,
        duration_minutes: source.duration_minutes,
        cost: source.cost,
        priority: source.priority,
        status: source.status,
        category: text(&source.category),
        location: text(&source.location),
        contact_info: text(&source.contact_info),
        booking_required: source.booking_required,
        booking_reference: text(&source.booking_reference),
        notes: text(&source.notes),
    })
}

pub(crate) fn new_segment(
    source: &Transportation,
    trip_id: &str,
    ids: &IdRemap,
) -> NewTransportation {
    NewTransportation {
        id: None,
        trip_id: trip_id.to_string(),
        from_destination_id: remap(&ids.destinations, source.from_destination_id.as_ref()),
        to_destination_id: remap(&ids.destinations, source.to_destination_id.as_ref()),
        transport_type: source.transport_type.clone(),
        provider: text(&source.provider),
        route_number: text(&source.route_number),
        departure_datetime: source.departure_datetime,
        arrival_datetime: source.arrival_datetime,
        departure_location: text(&source.departure_location),
        arrival_location: text(&source.arrival_location),
        duration_minutes: source.duration_minutes,
        cost: source.cost,
        currency: source.currency.clone(),
        booking_reference: text(&source.booking_reference),
        seat_number: text(&source.seat_number),
        class_type: text(&source.class_type),
        status: source.status,
        notes: text(&source.notes),
        is_standby: source.is_standby,
        confirmation_number: text(&source.confirmation_number),
        check_in_time: source.check_in_time,
        gate_terminal: text(&source.gate_terminal),
    }
}

pub(crate) fn new_category(source: &BudgetCategory, trip_id: &str) -> NewBudgetCategory {
    NewBudgetCategory {
        id: None,
        trip_id: trip_id.to_string(),
        category_name: source.category_name.clone(),
        allocated_amount: source.allocated_amount,
        spent_amount: source.spent_amount,
        currency: source.currency.clone(),
        description: text(&source.description),
    }
}

/// `None` when the hotel's destination was not imported.
pub(crate) fn new_hotel(source: &Hotel, trip_id: &str, ids: &IdRemap) -> Option<NewHotel> {
    let destination_id = ids.destinations.get(&source.destination_id)?.clone();
    Some(NewHotel {
        id: None,
        trip_id: trip_id.to_string(),
        destination_id,
        name: source.name.clone(),
        address: text(&source.address),
        phone: text(&source.phone),
        email: text(&source.email),
        website: text(&source.website),
        check_in_date: source.check_in_date,
        check_out_date: source.check_out_date,
        room_type: text(&source.room_type),
        rate_per_night: source.rate_per_night,
        currency: source.currency.clone(),
        booking_reference: text(&source.booking_reference),
        confirmation_number: text(&source.confirmation_number),
        amenities: source.amenities.clone(),
        rating: source.rating,
        distance_to_transport: text(&source.distance_to_transport),
        notes: text(&source.notes),
        status: source.status,
    })
}

pub(crate) fn new_expense(source: &Expense, trip_id: &str, ids: &IdRemap) -> NewExpense {
    NewExpense {
        id: None,
        trip_id: trip_id.to_string(),
        destination_id: remap(&ids.destinations, source.destination_id.as_ref()),
        activity_id: remap(&ids.activities, source.activity_id.as_ref()),
        transportation_id: remap(&ids.transportation, source.transportation_id.as_ref()),
        hotel_id: remap(&ids.hotels, source.hotel_id.as_ref()),
        category: source.category.clone(),
        description: source.description.clone(),
        amount: source.amount,
        currency: source.currency.clone(),
        expense_date: source.expense_date,
        payment_method: text(&source.payment_method),
        receipt_path: text(&source.receipt_path),
        notes: text(&source.notes),
    }
}

pub(crate) fn new_contact(source: &EmergencyContact, trip_id: &str) -> NewEmergencyContact {
    NewEmergencyContact {
        id: None,
        trip_id: trip_id.to_string(),
        name: source.name.clone(),
        relationship: text(&source.relationship),
        phone: source.phone.clone(),
        email: text(&source.email),
        address: text(&source.address),
    }
}
