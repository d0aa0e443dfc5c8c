//! SQLite storage implementation for Voyage.
//!
//! This crate is the only place where Diesel appears. It implements the
//! repository traits declared in `voyage-core` and contains:
//! - connection pooling and the single-writer actor
//! - embedded Diesel migrations
//! - database model types with Diesel derives
//!
//! ```text
//!   voyage-core (domain, traits)
//!          │
//!          ▼
//!   storage-sqlite (this crate)
//!          │
//!          ▼
//!       SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod budget;
pub mod contacts;
pub mod destinations;
pub mod expenses;
pub mod hotels;
pub mod itinerary;
pub mod statistics;
pub mod transportation;
pub mod trips;

pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};
pub use errors::{IntoCore, StorageError};

pub use budget::BudgetRepository;
pub use contacts::ContactRepository;
pub use destinations::DestinationRepository;
pub use expenses::ExpenseRepository;
pub use hotels::HotelRepository;
pub use itinerary::ActivityRepository;
pub use statistics::StatisticsRepository;
pub use transportation::TransportationRepository;
pub use trips::TripRepository;

pub use voyage_core::errors::{DatabaseError, Error, Result};
