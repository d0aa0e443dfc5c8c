//! Hotels module - lodging booked at each destination.

mod hotels_model;
mod hotels_service;
mod hotels_traits;

pub use hotels_model::{stay_cost, Hotel, HotelStatus, HotelUpdate, NewHotel};
pub use hotels_service::HotelService;
pub use hotels_traits::{HotelRepositoryTrait, HotelServiceTrait};
