//! Voyage Core - Domain entities, services, and traits.
//!
//! This crate contains the trip planning logic. It is database-agnostic and
//! defines repository traits that are implemented by the `storage-sqlite`
//! crate.

pub mod budget;
pub mod constants;
pub mod contacts;
pub mod destinations;
pub mod errors;
pub mod expenses;
pub mod hotels;
pub mod interchange;
pub mod itinerary;
pub mod statistics;
pub mod transportation;
pub mod trips;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
