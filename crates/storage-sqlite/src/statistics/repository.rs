use diesel::dsl::{count_star, sum};
use diesel::prelude::*;
use std::sync::Arc;

use voyage_core::statistics::{StatisticsRepositoryTrait, TripCounts};
use voyage_core::Result;

use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::{activities, destinations, expenses, hotels, transportation};

/// Read-only; statistics never write, so no writer handle.
pub struct StatisticsRepository {
    pool: Arc<DbPool>,
}

impl StatisticsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl StatisticsRepositoryTrait for StatisticsRepository {
    fn count_trip_records(&self, trip_id: &str) -> Result<TripCounts> {
        let mut conn = get_connection(&self.pool)?;

        let destinations = destinations::table
            .filter(destinations::trip_id.eq(trip_id))
            .select(count_star())
            .first::<i64>(&mut conn)
            .into_core()?;
        let activities = activities::table
            .filter(activities::trip_id.eq(trip_id))
            .select(count_star())
            .first::<i64>(&mut conn)
            .into_core()?;
        let transportation = transportation::table
            .filter(transportation::trip_id.eq(trip_id))
            .select(count_star())
            .first::<i64>(&mut conn)
            .into_core()?;
        let hotels = hotels::table
            .filter(hotels::trip_id.eq(trip_id))
            .select(count_star())
            .first::<i64>(&mut conn)
            .into_core()?;
        let expense_total = expenses::table
            .filter(expenses::trip_id.eq(trip_id))
            .select(sum(expenses::amount))
            .first::<Option<f64>>(&mut conn)
            .into_core()?;

        Ok(TripCounts {
            destinations,
            activities,
            transportation,
            hotels,
            expense_total: expense_total.unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::ExpenseRepository;
    use crate::test_utils::setup_db;
    use crate::trips::TripRepository;
    use chrono::NaiveDate;
    use voyage_core::expenses::{ExpenseRepositoryTrait, NewExpense};
    use voyage_core::trips::{NewTrip, TripRepositoryTrait};

    #[tokio::test]
    async fn test_counts_for_empty_and_populated_trip() {
        let (pool, writer, _temp_dir) = setup_db();
        let trip = TripRepository::new(pool.clone(), writer.clone())
            .create(NewTrip {
                name: "Asia".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let repo = StatisticsRepository::new(pool.clone());

        assert_eq!(repo.count_trip_records(&trip.id).unwrap(), TripCounts::default());

        let expenses = ExpenseRepository::new(pool, writer);
        for amount in [45.0, 12.5] {
            expenses
                .create(
                    NewExpense::new(
                        &trip.id,
                        "Food & Dining",
                        "Meal",
                        amount,
                        NaiveDate::from_ymd_opt(2024, 11, 10).unwrap(),
                    ),
                    None,
                )
                .await
                .unwrap();
        }

        let counts = repo.count_trip_records(&trip.id).unwrap();
        assert_eq!(counts.destinations, 0);
        assert_eq!(counts.expense_total, 57.5);
    }
}
