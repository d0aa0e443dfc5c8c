//! Destinations module - domain models, services, and traits.

mod destinations_model;
mod destinations_service;
mod destinations_traits;

pub use destinations_model::{Destination, DestinationUpdate, NewDestination};
pub use destinations_service::DestinationService;
pub use destinations_traits::{DestinationRepositoryTrait, DestinationServiceTrait};
