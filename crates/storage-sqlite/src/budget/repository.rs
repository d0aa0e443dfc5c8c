use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use voyage_core::budget::{
    BudgetCategory, BudgetCategoryUpdate, BudgetRepositoryTrait, CategoryAllocation,
    NewBudgetCategory,
};
use voyage_core::trips::Trip;
use voyage_core::Result;

use super::model::{BudgetCategoryChangesetDB, BudgetCategoryDB, NewBudgetCategoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{budget_categories, trips};
use crate::trips::TripDB;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn insert_category(
    conn: &mut SqliteConnection,
    new_category: NewBudgetCategory,
) -> Result<BudgetCategory> {
    let row = NewBudgetCategoryDB::from_domain(
        new_category,
        Uuid::new_v4().to_string(),
        Utc::now().naive_utc(),
    );
    let created = diesel::insert_into(budget_categories::table)
        .values(&row)
        .returning(BudgetCategoryDB::as_returning())
        .get_result(conn)
        .into_core()?;
    Ok(created.into())
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<BudgetCategory>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budget_categories::table
            .filter(budget_categories::trip_id.eq(trip_id))
            .select(BudgetCategoryDB::as_select())
            .order(budget_categories::category_name.asc())
            .load::<BudgetCategoryDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(BudgetCategory::from).collect())
    }

    fn get_by_id(&self, category_id: &str) -> Result<BudgetCategory> {
        let mut conn = get_connection(&self.pool)?;
        let row = budget_categories::table
            .find(category_id)
            .select(BudgetCategoryDB::as_select())
            .first::<BudgetCategoryDB>(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn create(&self, new_category: NewBudgetCategory) -> Result<BudgetCategory> {
        self.writer
            .exec(move |conn| insert_category(conn, new_category))
            .await
    }

    async fn create_many(
        &self,
        new_categories: Vec<NewBudgetCategory>,
    ) -> Result<Vec<BudgetCategory>> {
        self.writer
            .exec(move |conn| {
                new_categories
                    .into_iter()
                    .map(|category| insert_category(conn, category))
                    .collect()
            })
            .await
    }

    async fn update(&self, category_update: BudgetCategoryUpdate) -> Result<BudgetCategory> {
        self.writer
            .exec(move |conn| {
                let category_id = category_update.id.clone();
                let changes =
                    BudgetCategoryChangesetDB::from_domain(category_update, Utc::now().naive_utc());
                let updated = diesel::update(budget_categories::table.find(&category_id))
                    .set(&changes)
                    .returning(BudgetCategoryDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(BudgetCategory::from(updated))
            })
            .await
    }

    async fn delete(&self, category_id: &str) -> Result<usize> {
        let category_id = category_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(budget_categories::table.find(category_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn apply_total_budget(
        &self,
        trip_id: &str,
        new_total: f64,
        allocations: Vec<CategoryAllocation>,
    ) -> Result<Trip> {
        let trip_id = trip_id.to_string();
        self.writer
            .exec(move |conn| {
                let now = Utc::now().naive_utc();
                let trip = diesel::update(trips::table.find(&trip_id))
                    .set((trips::total_budget.eq(new_total), trips::updated_at.eq(now)))
                    .returning(TripDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                for allocation in allocations {
                    diesel::update(
                        budget_categories::table
                            .filter(budget_categories::id.eq(&allocation.category_id))
                            .filter(budget_categories::trip_id.eq(&trip_id)),
                    )
                    .set((
                        budget_categories::allocated_amount.eq(allocation.allocated_amount),
                        budget_categories::updated_at.eq(now),
                    ))
                    .execute(conn)
                    .into_core()?;
                }
                Ok(Trip::from(trip))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_db;
    use crate::trips::TripRepository;
    use voyage_core::trips::{NewTrip, TripRepositoryTrait};

    #[tokio::test]
    async fn test_apply_total_budget_updates_trip_and_allocations_together() {
        let (pool, writer, _temp_dir) = setup_db();
        let trip = TripRepository::new(pool.clone(), writer.clone())
            .create(NewTrip {
                name: "Asia".to_string(),
                total_budget: 1000.0,
                ..Default::default()
            })
            .await
            .unwrap();
        let repo = BudgetRepository::new(pool, writer);
        let created = repo
            .create_many(vec![
                NewBudgetCategory::new(&trip.id, "Transportation", 600.0),
                NewBudgetCategory::new(&trip.id, "Accommodation", 400.0),
            ])
            .await
            .unwrap();
        assert_eq!(created.len(), 2);

        let allocations = created
            .iter()
            .map(|c| CategoryAllocation {
                category_id: c.id.clone(),
                allocated_amount: c.allocated_amount * 1.5,
            })
            .collect();
        let updated_trip = repo
            .apply_total_budget(&trip.id, 1500.0, allocations)
            .await
            .unwrap();

        assert_eq!(updated_trip.total_budget, 1500.0);
        let categories = repo.list_by_trip(&trip.id).unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.category_name.as_str()).collect();
        assert_eq!(names, ["Accommodation", "Transportation"]);
        assert_eq!(categories[0].allocated_amount, 600.0);
        assert_eq!(categories[1].allocated_amount, 900.0);
        assert!(categories.iter().all(|c| c.spent_amount == 0.0));
    }

    #[tokio::test]
    async fn test_apply_total_budget_for_missing_trip_changes_nothing() {
        let (pool, writer, _temp_dir) = setup_db();
        let trip = TripRepository::new(pool.clone(), writer.clone())
            .create(NewTrip {
                name: "Asia".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let repo = BudgetRepository::new(pool, writer);
        let category = repo
            .create(NewBudgetCategory::new(&trip.id, "Food & Dining", 250.0))
            .await
            .unwrap();

        let err = repo
            .apply_total_budget(
                "missing",
                900.0,
                vec![CategoryAllocation {
                    category_id: category.id.clone(),
                    allocated_amount: 900.0,
                }],
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repo.get_by_id(&category.id).unwrap().allocated_amount, 250.0);
    }
}
