//! SQLite storage implementation for destinations.

mod model;
mod repository;

pub use model::{DestinationChangesetDB, DestinationDB, NewDestinationDB};
pub use repository::DestinationRepository;
