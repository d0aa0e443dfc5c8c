use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use voyage_core::{
    budget::{BudgetService, BudgetServiceTrait},
    contacts::{ContactService, ContactServiceTrait},
    destinations::{DestinationService, DestinationServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    hotels::{HotelService, HotelServiceTrait},
    interchange::{InterchangeRepositories, InterchangeService, InterchangeServiceTrait},
    itinerary::{ActivityService, ActivityServiceTrait},
    statistics::{StatisticsService, StatisticsServiceTrait},
    transportation::{TransportationService, TransportationServiceTrait},
    trips::{TripService, TripServiceTrait},
};
use voyage_storage_sqlite::{
    db, ActivityRepository, BudgetRepository, ContactRepository, DestinationRepository,
    ExpenseRepository, HotelRepository, StatisticsRepository, TransportationRepository,
    TripRepository,
};

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub trip_service: Arc<dyn TripServiceTrait>,
    pub destination_service: Arc<dyn DestinationServiceTrait>,
    pub activity_service: Arc<dyn ActivityServiceTrait>,
    pub transportation_service: Arc<dyn TransportationServiceTrait>,
    pub hotel_service: Arc<dyn HotelServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub contact_service: Arc<dyn ContactServiceTrait>,
    pub statistics_service: Arc<dyn StatisticsServiceTrait>,
    pub interchange_service: Arc<dyn InterchangeServiceTrait>,
}

/// Installs the subscriber. `log` records from the library crates are
/// forwarded through it as well.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    // Keep DATABASE_URL in line with the configured path so storage opens the same file
    std::env::set_var("DATABASE_URL", &config.db_path);
    let db_path = db::init(&config.db_path)?;
    tracing::debug!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let trip_repo = Arc::new(TripRepository::new(pool.clone(), writer.clone()));
    let destination_repo = Arc::new(DestinationRepository::new(pool.clone(), writer.clone()));
    let activity_repo = Arc::new(ActivityRepository::new(pool.clone(), writer.clone()));
    let transportation_repo =
        Arc::new(TransportationRepository::new(pool.clone(), writer.clone()));
    let hotel_repo = Arc::new(HotelRepository::new(pool.clone(), writer.clone()));
    let budget_repo = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let expense_repo = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let contact_repo = Arc::new(ContactRepository::new(pool.clone(), writer.clone()));
    let statistics_repo = Arc::new(StatisticsRepository::new(pool.clone()));

    let trip_service = Arc::new(TripService::new(
        trip_repo.clone(),
        destination_repo.clone(),
        transportation_repo.clone(),
        budget_repo.clone(),
    ));
    let statistics_service = Arc::new(StatisticsService::new(
        statistics_repo,
        trip_repo.clone(),
        destination_repo.clone(),
        activity_repo.clone(),
        transportation_repo.clone(),
        hotel_repo.clone(),
        budget_repo.clone(),
    ));
    let interchange_service = Arc::new(InterchangeService::new(InterchangeRepositories {
        trips: trip_repo.clone(),
        destinations: destination_repo.clone(),
        activities: activity_repo.clone(),
        transportation: transportation_repo.clone(),
        budget: budget_repo.clone(),
        expenses: expense_repo.clone(),
        hotels: hotel_repo.clone(),
        contacts: contact_repo.clone(),
    }));

    Ok(AppState {
        trip_service,
        destination_service: Arc::new(DestinationService::new(destination_repo)),
        activity_service: Arc::new(ActivityService::new(activity_repo)),
        transportation_service: Arc::new(TransportationService::new(transportation_repo)),
        hotel_service: Arc::new(HotelService::new(hotel_repo)),
        budget_service: Arc::new(BudgetService::new(budget_repo.clone(), trip_repo)),
        expense_service: Arc::new(ExpenseService::new(expense_repo, budget_repo)),
        contact_service: Arc::new(ContactService::new(contact_repo)),
        statistics_service,
        interchange_service,
    })
}
