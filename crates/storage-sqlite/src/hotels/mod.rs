//! SQLite storage implementation for hotel bookings.

mod model;
mod repository;

pub use model::{HotelChangesetDB, HotelDB, NewHotelDB};
pub use repository::HotelRepository;
