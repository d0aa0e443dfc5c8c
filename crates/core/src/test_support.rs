//! In-memory repositories shared by the service tests.

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use std::sync::{Arc, Mutex};

use crate::budget::{
    BudgetCategory, BudgetCategoryUpdate, BudgetRepositoryTrait, CategoryAllocation,
    NewBudgetCategory,
};
use crate::contacts::{
    ContactRepositoryTrait, EmergencyContact, EmergencyContactUpdate, NewEmergencyContact,
};
use crate::destinations::{
    Destination, DestinationRepositoryTrait, DestinationUpdate, NewDestination,
};
use crate::errors::{DatabaseError, Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};
use crate::hotels::{Hotel, HotelRepositoryTrait, HotelUpdate, NewHotel};
use crate::itinerary::{
    Activity, ActivityRepositoryTrait, ActivityStatus, ActivityUpdate, NewActivity,
};
use crate::statistics::{StatisticsRepositoryTrait, TripCounts};
use crate::transportation::{
    NewTransportation, TransportStatus, Transportation, TransportationRepositoryTrait,
    TransportationUpdate,
};
use crate::trips::{NewTrip, Trip, TripRepositoryTrait, TripUpdate};

#[derive(Default)]
pub(crate) struct StoreState {
    next_id: usize,
    pub trips: Vec<Trip>,
    pub destinations: Vec<Destination>,
    pub activities: Vec<Activity>,
    pub transportation: Vec<Transportation>,
    pub categories: Vec<BudgetCategory>,
    pub expenses: Vec<Expense>,
    pub hotels: Vec<Hotel>,
    pub contacts: Vec<EmergencyContact>,
    /// When set, every read fails with this message.
    pub fail_reads: Option<String>,
}

impl StoreState {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn check_reads(&self) -> Result<()> {
        match &self.fail_reads {
            Some(message) => Err(DatabaseError::QueryFailed(message.clone()).into()),
            None => Ok(()),
        }
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn not_found(what: &str, id: &str) -> Error {
    DatabaseError::NotFound(format!("{what} {id}")).into()
}

/// One store implementing every repository trait, cascading like the schema.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    pub state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> std::sync::MutexGuard<'_, StoreState> {
        self.state.lock().unwrap()
    }
}

#[async_trait]
impl TripRepositoryTrait for InMemoryStore {
    fn list(&self) -> Result<Vec<Trip>> {
        let state = self.state();
        state.check_reads()?;
        Ok(state.trips.iter().rev().cloned().collect())
    }

    fn get_by_id(&self, trip_id: &str) -> Result<Trip> {
        let state = self.state();
        state.check_reads()?;
        state
            .trips
            .iter()
            .find(|t| t.id == trip_id)
            .cloned()
            .ok_or_else(|| not_found("Trip", trip_id))
    }

    async fn create(&self, new_trip: NewTrip) -> Result<Trip> {
        let mut state = self.state();
        let trip = Trip {
            id: new_trip.id.unwrap_or_else(|| state.id("trip")),
            name: new_trip.name,
            description: new_trip.description,
            start_date: new_trip.start_date,
            end_date: new_trip.end_date,
            total_budget: new_trip.total_budget,
            created_at: now(),
            updated_at: now(),
        };
        state.trips.push(trip.clone());
        Ok(trip)
    }

    async fn update(&self, trip_update: TripUpdate) -> Result<Trip> {
        let mut state = self.state();
        let trip = state
            .trips
            .iter_mut()
            .find(|t| t.id == trip_update.id)
            .ok_or_else(|| not_found("Trip", &trip_update.id))?;
        trip.name = trip_update.name;
        trip.description = trip_update.description;
        trip.start_date = trip_update.start_date;
        trip.end_date = trip_update.end_date;
        trip.total_budget = trip_update.total_budget;
        trip.updated_at = now();
        Ok(trip.clone())
    }

    async fn delete(&self, trip_id: &str) -> Result<usize> {
        let mut state = self.state();
        let before = state.trips.len();
        state.trips.retain(|t| t.id != trip_id);
        state.destinations.retain(|d| d.trip_id != trip_id);
        state.activities.retain(|a| a.trip_id != trip_id);
        state.transportation.retain(|t| t.trip_id != trip_id);
        state.categories.retain(|c| c.trip_id != trip_id);
        state.expenses.retain(|e| e.trip_id != trip_id);
        state.hotels.retain(|h| h.trip_id != trip_id);
        state.contacts.retain(|c| c.trip_id != trip_id);
        Ok(before - state.trips.len())
    }
}

#[async_trait]
impl DestinationRepositoryTrait for InMemoryStore {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Destination>> {
        let state = self.state();
        state.check_reads()?;
        let mut destinations: Vec<_> = state
            .destinations
            .iter()
            .filter(|d| d.trip_id == trip_id)
            .cloned()
            .collect();
        destinations.sort_by_key(|d| d.arrival_date);
        Ok(destinations)
    }

    fn get_by_id(&self, destination_id: &str) -> Result<Destination> {
        self.state()
            .destinations
            .iter()
            .find(|d| d.id == destination_id)
            .cloned()
            .ok_or_else(|| not_found("Destination", destination_id))
    }

    async fn create(&self, new_destination: NewDestination) -> Result<Destination> {
        let mut state = self.state();
        let destination = Destination {
            id: new_destination.id.unwrap_or_else(|| state.id("dest")),
            trip_id: new_destination.trip_id,
            name: new_destination.name,
            country: new_destination.country,
            arrival_date: new_destination.arrival_date,
            departure_date: new_destination.departure_date,
            duration_days: new_destination.duration_days,
            budget: new_destination.budget,
            description: new_destination.description,
            highlights: new_destination.highlights,
            weather: new_destination.weather,
            accommodation: new_destination.accommodation,
            tips: new_destination.tips,
            latitude: new_destination.latitude,
            longitude: new_destination.longitude,
            created_at: now(),
            updated_at: now(),
        };
        state.destinations.push(destination.clone());
        Ok(destination)
    }

    async fn update(&self, update: DestinationUpdate) -> Result<Destination> {
        let mut state = self.state();
        let destination = state
            .destinations
            .iter_mut()
            .find(|d| d.id == update.id)
            .ok_or_else(|| not_found("Destination", &update.id))?;
        destination.name = update.name;
        destination.country = update.country;
        destination.arrival_date = update.arrival_date;
        destination.departure_date = update.departure_date;
        destination.budget = update.budget;
        destination.highlights = update.highlights;
        destination.tips = update.tips;
        Ok(destination.clone())
    }

    async fn delete(&self, destination_id: &str) -> Result<usize> {
        let mut state = self.state();
        let before = state.destinations.len();
        state.destinations.retain(|d| d.id != destination_id);
        state.activities.retain(|a| a.destination_id != destination_id);
        state.hotels.retain(|h| h.destination_id != destination_id);
        Ok(before - state.destinations.len())
    }
}

#[async_trait]
impl ActivityRepositoryTrait for InMemoryStore {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Activity>> {
        let state = self.state();
        state.check_reads()?;
        Ok(state
            .activities
            .iter()
            .filter(|a| a.trip_id == trip_id)
            .cloned()
            .collect())
    }

    fn list_by_destination(&self, destination_id: &str) -> Result<Vec<Activity>> {
        Ok(self
            .state()
            .activities
            .iter()
            .filter(|a| a.destination_id == destination_id)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, activity_id: &str) -> Result<Activity> {
        self.state()
            .activities
            .iter()
            .find(|a| a.id == activity_id)
            .cloned()
            .ok_or_else(|| not_found("Activity", activity_id))
    }

    async fn create(&self, new_activity: NewActivity) -> Result<Activity> {
        let mut state = self.state();
        let activity = Activity {
            id: new_activity.id.unwrap_or_else(|| state.id("act")),
            trip_id: new_activity.trip_id,
            destination_id: new_activity.destination_id,
            title: new_activity.title,
            description: new_activity.description,
            planned_date: new_activity.planned_date,
            planned_time: new_activity.planned_time,
            duration_minutes: new_activity.duration_minutes,
            cost: new_activity.cost,
            priority: new_activity.priority,
            status: new_activity.status,
            category: new_activity.category,
            location: new_activity.location,
            contact_info: new_activity.contact_info,
            booking_required: new_activity.booking_required,
            booking_reference: new_activity.booking_reference,
            notes: new_activity.notes,
            created_at: now(),
            updated_at: now(),
        };
        state.activities.push(activity.clone());
        Ok(activity)
    }

    async fn update(&self, update: ActivityUpdate) -> Result<Activity> {
        let mut state = self.state();
        let activity = state
            .activities
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| not_found("Activity", &update.id))?;
        activity.title = update.title;
        activity.priority = update.priority;
        activity.status = update.status;
        Ok(activity.clone())
    }

    async fn update_status(&self, activity_id: &str, status: ActivityStatus) -> Result<Activity> {
        let mut state = self.state();
        let activity = state
            .activities
            .iter_mut()
            .find(|a| a.id == activity_id)
            .ok_or_else(|| not_found("Activity", activity_id))?;
        activity.status = status;
        Ok(activity.clone())
    }

    async fn delete(&self, activity_id: &str) -> Result<usize> {
        let mut state = self.state();
        let before = state.activities.len();
        state.activities.retain(|a| a.id != activity_id);
        Ok(before - state.activities.len())
    }
}

#[async_trait]
impl TransportationRepositoryTrait for InMemoryStore {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Transportation>> {
        let state = self.state();
        state.check_reads()?;
        Ok(state
            .transportation
            .iter()
            .filter(|t| t.trip_id == trip_id)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, transportation_id: &str) -> Result<Transportation> {
        self.state()
            .transportation
            .iter()
            .find(|t| t.id == transportation_id)
            .cloned()
            .ok_or_else(|| not_found("Transportation", transportation_id))
    }

    async fn create(&self, new_segment: NewTransportation) -> Result<Transportation> {
        let mut state = self.state();
        let segment = Transportation {
            id: new_segment.id.unwrap_or_else(|| state.id("seg")),
            trip_id: new_segment.trip_id,
            from_destination_id: new_segment.from_destination_id,
            to_destination_id: new_segment.to_destination_id,
            transport_type: new_segment.transport_type,
            provider: new_segment.provider,
            route_number: new_segment.route_number,
            departure_datetime: new_segment.departure_datetime,
            arrival_datetime: new_segment.arrival_datetime,
            departure_location: new_segment.departure_location,
            arrival_location: new_segment.arrival_location,
            duration_minutes: new_segment.duration_minutes,
            cost: new_segment.cost,
            currency: new_segment.currency,
            booking_reference: new_segment.booking_reference,
            seat_number: new_segment.seat_number,
            class_type: new_segment.class_type,
            status: new_segment.status,
            notes: new_segment.notes,
            is_standby: new_segment.is_standby,
            confirmation_number: new_segment.confirmation_number,
            check_in_time: new_segment.check_in_time,
            gate_terminal: new_segment.gate_terminal,
            created_at: now(),
            updated_at: now(),
        };
        state.transportation.push(segment.clone());
        Ok(segment)
    }

    async fn update(&self, update: TransportationUpdate) -> Result<Transportation> {
        let mut state = self.state();
        let segment = state
            .transportation
            .iter_mut()
            .find(|t| t.id == update.id)
            .ok_or_else(|| not_found("Transportation", &update.id))?;
        segment.cost = update.cost;
        segment.status = update.status;
        Ok(segment.clone())
    }

    async fn update_status(
        &self,
        transportation_id: &str,
        status: TransportStatus,
    ) -> Result<Transportation> {
        let mut state = self.state();
        let segment = state
            .transportation
            .iter_mut()
            .find(|t| t.id == transportation_id)
            .ok_or_else(|| not_found("Transportation", transportation_id))?;
        segment.status = status;
        Ok(segment.clone())
    }

    async fn delete(&self, transportation_id: &str) -> Result<usize> {
        let mut state = self.state();
        let before = state.transportation.len();
        state.transportation.retain(|t| t.id != transportation_id);
        Ok(before - state.transportation.len())
    }
}

fn insert_category(state: &mut StoreState, new_category: NewBudgetCategory) -> BudgetCategory {
    let category = BudgetCategory {
        id: new_category.id.unwrap_or_else(|| state.id("cat")),
        trip_id: new_category.trip_id,
        category_name: new_category.category_name,
        allocated_amount: new_category.allocated_amount,
        spent_amount: new_category.spent_amount,
        currency: new_category.currency,
        description: new_category.description,
        created_at: now(),
        updated_at: now(),
    };
    state.categories.push(category.clone());
    category
}

#[async_trait]
impl BudgetRepositoryTrait for InMemoryStore {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<BudgetCategory>> {
        let state = self.state();
        state.check_reads()?;
        let mut categories: Vec<_> = state
            .categories
            .iter()
            .filter(|c| c.trip_id == trip_id)
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        Ok(categories)
    }

    fn get_by_id(&self, category_id: &str) -> Result<BudgetCategory> {
        self.state()
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .cloned()
            .ok_or_else(|| not_found("Budget category", category_id))
    }

    async fn create(&self, new_category: NewBudgetCategory) -> Result<BudgetCategory> {
        Ok(insert_category(&mut self.state(), new_category))
    }

    async fn create_many(
        &self,
        new_categories: Vec<NewBudgetCategory>,
    ) -> Result<Vec<BudgetCategory>> {
        let mut state = self.state();
        Ok(new_categories
            .into_iter()
            .map(|c| insert_category(&mut state, c))
            .collect())
    }

    async fn update(&self, update: BudgetCategoryUpdate) -> Result<BudgetCategory> {
        let mut state = self.state();
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| not_found("Budget category", &update.id))?;
        category.category_name = update.category_name;
        category.allocated_amount = update.allocated_amount;
        category.spent_amount = update.spent_amount;
        category.currency = update.currency;
        category.description = update.description;
        Ok(category.clone())
    }

    async fn delete(&self, category_id: &str) -> Result<usize> {
        let mut state = self.state();
        let before = state.categories.len();
        state.categories.retain(|c| c.id != category_id);
        Ok(before - state.categories.len())
    }

    async fn apply_total_budget(
        &self,
        trip_id: &str,
        new_total: f64,
        allocations: Vec<CategoryAllocation>,
    ) -> Result<Trip> {
        let mut state = self.state();
        for allocation in allocations {
            if let Some(category) = state
                .categories
                .iter_mut()
                .find(|c| c.id == allocation.category_id)
            {
                category.allocated_amount = allocation.allocated_amount;
            }
        }
        let trip = state
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or_else(|| not_found("Trip", trip_id))?;
        trip.total_budget = new_total;
        Ok(trip.clone())
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryStore {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Expense>> {
        let state = self.state();
        state.check_reads()?;
        Ok(state
            .expenses
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, expense_id: &str) -> Result<Expense> {
        self.state()
            .expenses
            .iter()
            .find(|e| e.id == expense_id)
            .cloned()
            .ok_or_else(|| not_found("Expense", expense_id))
    }

    async fn create(
        &self,
        new_expense: NewExpense,
        linked_category_id: Option<String>,
    ) -> Result<Expense> {
        let mut state = self.state();
        let expense = Expense {
            id: new_expense.id.unwrap_or_else(|| state.id("exp")),
            trip_id: new_expense.trip_id,
            destination_id: new_expense.destination_id,
            activity_id: new_expense.activity_id,
            transportation_id: new_expense.transportation_id,
            hotel_id: new_expense.hotel_id,
            category: new_expense.category,
            description: new_expense.description,
            amount: new_expense.amount,
            currency: new_expense.currency,
            expense_date: new_expense.expense_date,
            payment_method: new_expense.payment_method,
            receipt_path: new_expense.receipt_path,
            notes: new_expense.notes,
            created_at: now(),
        };
        if let Some(category_id) = linked_category_id {
            if let Some(category) = state.categories.iter_mut().find(|c| c.id == category_id) {
                category.spent_amount += expense.amount;
            }
        }
        state.expenses.push(expense.clone());
        Ok(expense)
    }

    async fn delete(&self, expense_id: &str) -> Result<usize> {
        let mut state = self.state();
        let before = state.expenses.len();
        state.expenses.retain(|e| e.id != expense_id);
        Ok(before - state.expenses.len())
    }
}

#[async_trait]
impl HotelRepositoryTrait for InMemoryStore {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Hotel>> {
        let state = self.state();
        state.check_reads()?;
        Ok(state
            .hotels
            .iter()
            .filter(|h| h.trip_id == trip_id)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, hotel_id: &str) -> Result<Hotel> {
        self.state()
            .hotels
            .iter()
            .find(|h| h.id == hotel_id)
            .cloned()
            .ok_or_else(|| not_found("Hotel", hotel_id))
    }

    async fn create(&self, new_hotel: NewHotel) -> Result<Hotel> {
        let mut state = self.state();
        let total_cost = new_hotel.total_cost();
        let hotel = Hotel {
            id: new_hotel.id.unwrap_or_else(|| state.id("hotel")),
            trip_id: new_hotel.trip_id,
            destination_id: new_hotel.destination_id,
            name: new_hotel.name,
            address: new_hotel.address,
            phone: new_hotel.phone,
            email: new_hotel.email,
            website: new_hotel.website,
            check_in_date: new_hotel.check_in_date,
            check_out_date: new_hotel.check_out_date,
            room_type: new_hotel.room_type,
            rate_per_night: new_hotel.rate_per_night,
            total_cost,
            currency: new_hotel.currency,
            booking_reference: new_hotel.booking_reference,
            confirmation_number: new_hotel.confirmation_number,
            amenities: new_hotel.amenities,
            rating: new_hotel.rating,
            distance_to_transport: new_hotel.distance_to_transport,
            notes: new_hotel.notes,
            status: new_hotel.status,
            created_at: now(),
            updated_at: now(),
        };
        state.hotels.push(hotel.clone());
        Ok(hotel)
    }

    async fn update(&self, update: HotelUpdate) -> Result<Hotel> {
        let mut state = self.state();
        let total_cost = update.total_cost();
        let hotel = state
            .hotels
            .iter_mut()
            .find(|h| h.id == update.id)
            .ok_or_else(|| not_found("Hotel", &update.id))?;
        hotel.rate_per_night = update.rate_per_night;
        hotel.check_in_date = update.check_in_date;
        hotel.check_out_date = update.check_out_date;
        hotel.total_cost = total_cost;
        Ok(hotel.clone())
    }

    async fn delete(&self, hotel_id: &str) -> Result<usize> {
        let mut state = self.state();
        let before = state.hotels.len();
        state.hotels.retain(|h| h.id != hotel_id);
        Ok(before - state.hotels.len())
    }
}

#[async_trait]
impl ContactRepositoryTrait for InMemoryStore {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<EmergencyContact>> {
        Ok(self
            .state()
            .contacts
            .iter()
            .filter(|c| c.trip_id == trip_id)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, contact_id: &str) -> Result<EmergencyContact> {
        self.state()
            .contacts
            .iter()
            .find(|c| c.id == contact_id)
            .cloned()
            .ok_or_else(|| not_found("Contact", contact_id))
    }

    async fn create(&self, new_contact: NewEmergencyContact) -> Result<EmergencyContact> {
        let mut state = self.state();
        let contact = EmergencyContact {
            id: new_contact.id.unwrap_or_else(|| state.id("contact")),
            trip_id: new_contact.trip_id,
            name: new_contact.name,
            relationship: new_contact.relationship,
            phone: new_contact.phone,
            email: new_contact.email,
            address: new_contact.address,
            created_at: now(),
        };
        state.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, update: EmergencyContactUpdate) -> Result<EmergencyContact> {
        let mut state = self.state();
        let contact = state
            .contacts
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| not_found("Contact", &update.id))?;
        contact.name = update.name;
        contact.phone = update.phone;
        Ok(contact.clone())
    }

    async fn delete(&self, contact_id: &str) -> Result<usize> {
        let mut state = self.state();
        let before = state.contacts.len();
        state.contacts.retain(|c| c.id != contact_id);
        Ok(before - state.contacts.len())
    }
}

impl StatisticsRepositoryTrait for InMemoryStore {
    fn count_trip_records(&self, trip_id: &str) -> Result<TripCounts> {
        let state = self.state();
        state.check_reads()?;
        let count = |n: usize| n as i64;
        Ok(TripCounts {
            destinations: count(state.destinations.iter().filter(|d| d.trip_id == trip_id).count()),
            activities: count(state.activities.iter().filter(|a| a.trip_id == trip_id).count()),
            transportation: count(
                state
                    .transportation
                    .iter()
                    .filter(|t| t.trip_id == trip_id)
                    .count(),
            ),
            hotels: count(state.hotels.iter().filter(|h| h.trip_id == trip_id).count()),
            expense_total: state
                .expenses
                .iter()
                .filter(|e| e.trip_id == trip_id)
                .map(|e| e.amount)
                .sum(),
        })
    }
}
