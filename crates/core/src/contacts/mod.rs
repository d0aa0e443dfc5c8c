//! Emergency contacts kept with each trip.

mod contacts_model;
mod contacts_service;
mod contacts_traits;

pub use contacts_model::{EmergencyContact, EmergencyContactUpdate, NewEmergencyContact};
pub use contacts_service::ContactService;
pub use contacts_traits::{ContactRepositoryTrait, ContactServiceTrait};
