//! SQLite storage implementation for emergency contacts.

mod model;
mod repository;

pub use model::{EmergencyContactChangesetDB, EmergencyContactDB, NewEmergencyContactDB};
pub use repository::ContactRepository;
