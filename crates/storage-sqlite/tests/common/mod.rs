use std::sync::Arc;
use tempfile::{tempdir, TempDir};

use voyage_core::budget::BudgetService;
use voyage_core::expenses::ExpenseService;
use voyage_core::interchange::{InterchangeRepositories, InterchangeService};
use voyage_core::itinerary::ActivityService;
use voyage_core::statistics::StatisticsService;
use voyage_core::trips::TripService;
use voyage_storage_sqlite::{
    create_pool, run_migrations, spawn_writer, ActivityRepository, BudgetRepository,
    ContactRepository, DestinationRepository, ExpenseRepository, HotelRepository,
    StatisticsRepository, TransportationRepository, TripRepository,
};

/// Services backed by a migrated database in a temp dir.
pub struct TestContext {
    pub trips: TripService,
    pub activities: ActivityService,
    pub budget: BudgetService,
    pub expenses: ExpenseService,
    pub statistics: StatisticsService,
    pub interchange: InterchangeService,
    _temp_dir: TempDir,
}

pub fn setup() -> TestContext {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("travel_planner.db");
    let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());

    let trip_repo = Arc::new(TripRepository::new(pool.clone(), writer.clone()));
    let destination_repo = Arc::new(DestinationRepository::new(pool.clone(), writer.clone()));
    let activity_repo = Arc::new(ActivityRepository::new(pool.clone(), writer.clone()));
    let transport_repo = Arc::new(TransportationRepository::new(pool.clone(), writer.clone()));
    let budget_repo = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let expense_repo = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let hotel_repo = Arc::new(HotelRepository::new(pool.clone(), writer.clone()));
    let contact_repo = Arc::new(ContactRepository::new(pool.clone(), writer));
    let statistics_repo = Arc::new(StatisticsRepository::new(pool));

    TestContext {
        trips: TripService::new(
            trip_repo.clone(),
            destination_repo.clone(),
            transport_repo.clone(),
            budget_repo.clone(),
        ),
        activities: ActivityService::new(activity_repo.clone()),
        budget: BudgetService::new(budget_repo.clone(), trip_repo.clone()),
        expenses: ExpenseService::new(expense_repo.clone(), budget_repo.clone()),
        statistics: StatisticsService::new(
            statistics_repo,
            trip_repo.clone(),
            destination_repo.clone(),
            activity_repo.clone(),
            transport_repo.clone(),
            hotel_repo.clone(),
            budget_repo.clone(),
        ),
        interchange: InterchangeService::new(InterchangeRepositories {
            trips: trip_repo,
            destinations: destination_repo,
            activities: activity_repo,
            transportation: transport_repo,
            budget: budget_repo,
            expenses: expense_repo,
            hotels: hotel_repo,
            contacts: contact_repo,
        }),
        _temp_dir: temp_dir,
    }
}
