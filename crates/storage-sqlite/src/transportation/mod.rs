//! SQLite storage implementation for transportation segments.

mod model;
mod repository;

pub use model::{NewTransportationDB, TransportationChangesetDB, TransportationDB};
pub use repository::TransportationRepository;
