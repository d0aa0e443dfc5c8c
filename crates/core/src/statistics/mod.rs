//! Statistics module - trip totals and dashboard summaries.

mod statistics_model;
mod statistics_service;
mod statistics_traits;


pub use statistics_model::{
    activity_status_counts, destination_progress, AccommodationSummary, DestinationProgress,
    TransportSummary, TransportTypeBreakdown, TripCounts, TripOverview, TripStatistics,
};
pub use statistics_service::StatisticsService;
pub use statistics_traits::{StatisticsRepositoryTrait, StatisticsServiceTrait};
