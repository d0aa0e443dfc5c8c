//! Row counts backing the trip statistics.

mod repository;

pub use repository::StatisticsRepository;
