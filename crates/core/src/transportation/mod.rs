//! Transportation module - travel legs between destinations.

mod transportation_model;
mod transportation_service;
mod transportation_traits;

pub use transportation_model::{
    NewTransportation, TransportStatus, Transportation, TransportationUpdate,
};
pub use transportation_service::TransportationService;
pub use transportation_traits::{TransportationRepositoryTrait, TransportationServiceTrait};
