//! SQLite storage implementation for trips.

mod model;
mod repository;

pub use model::{NewTripDB, TripChangesetDB, TripDB};
pub use repository::TripRepository;
