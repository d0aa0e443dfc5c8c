use async_trait::async_trait;

use super::hotels_model::{Hotel, HotelUpdate, NewHotel};
use crate::errors::Result;

/// Trait for hotel repository operations
#[async_trait]
pub trait HotelRepositoryTrait: Send + Sync {
    /// Hotels of a trip ordered by check-in date.
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Hotel>>;
    fn get_by_id(&self, hotel_id: &str) -> Result<Hotel>;
    async fn create(&self, new_hotel: NewHotel) -> Result<Hotel>;
    async fn update(&self, hotel_update: HotelUpdate) -> Result<Hotel>;
    async fn delete(&self, hotel_id: &str) -> Result<usize>;
}

/// Trait for hotel service operations
#[async_trait]
pub trait HotelServiceTrait: Send + Sync {
    fn get_hotels(&self, trip_id: &str) -> Result<Vec<Hotel>>;
    fn get_hotel(&self, hotel_id: &str) -> Result<Hotel>;
    async fn create_hotel(&self, new_hotel: NewHotel) -> Result<Hotel>;
    async fn update_hotel(&self, hotel_update: HotelUpdate) -> Result<Hotel>;
    async fn delete_hotel(&self, hotel_id: &str) -> Result<usize>;
}
