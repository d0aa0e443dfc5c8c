//! Itinerary module - activities planned at each destination.

mod itinerary_filter;
mod itinerary_model;
mod itinerary_service;
mod itinerary_traits;

#[cfg(test)]
mod itinerary_service_tests;

pub use itinerary_filter::{filter_and_sort_activities, ActivityQuery, ActivitySort};
pub use itinerary_model::{priority_label, Activity, ActivityStatus, ActivityUpdate, NewActivity};
pub use itinerary_service::ActivityService;
pub use itinerary_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
