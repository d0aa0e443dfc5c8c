use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::hotels_model::{Hotel, HotelUpdate, NewHotel};
use super::hotels_traits::{HotelRepositoryTrait, HotelServiceTrait};
use crate::errors::Result;

pub struct HotelService {
    repository: Arc<dyn HotelRepositoryTrait>,
}

impl HotelService {
    pub fn new(repository: Arc<dyn HotelRepositoryTrait>) -> Self {
        HotelService { repository }
    }
}

#[async_trait]
impl HotelServiceTrait for HotelService {
    fn get_hotels(&self, trip_id: &str) -> Result<Vec<Hotel>> {
        self.repository.list_by_trip(trip_id)
    }

    fn get_hotel(&self, hotel_id: &str) -> Result<Hotel> {
        self.repository.get_by_id(hotel_id)
    }

    async fn create_hotel(&self, new_hotel: NewHotel) -> Result<Hotel> {
        new_hotel.validate()?;
        debug!(
            "Booking {} for {:.2} total",
            new_hotel.name,
            new_hotel.total_cost()
        );
        self.repository.create(new_hotel).await
    }

    async fn update_hotel(&self, hotel_update: HotelUpdate) -> Result<Hotel> {
        hotel_update.validate()?;
        self.repository.update(hotel_update).await
    }

    async fn delete_hotel(&self, hotel_id: &str) -> Result<usize> {
        self.repository.delete(hotel_id).await
    }
}
