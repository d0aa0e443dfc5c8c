//! Trips module - the root planning record and its lifecycle.

mod sample_trip;
mod trips_model;
mod trips_service;
mod trips_traits;


pub use sample_trip::SAMPLE_TRIP_NAME;
pub use trips_model::{NewTrip, Trip, TripUpdate};
pub use trips_service::TripService;
pub use trips_traits::{TripRepositoryTrait, TripServiceTrait};
