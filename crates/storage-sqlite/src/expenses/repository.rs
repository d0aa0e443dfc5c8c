use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use voyage_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};
use voyage_core::Result;

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{budget_categories, expenses};

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .filter(expenses::trip_id.eq(trip_id))
            .select(ExpenseDB::as_select())
            .order((expenses::expense_date.desc(), expenses::created_at.desc()))
            .load::<ExpenseDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn get_by_id(&self, expense_id: &str) -> Result<Expense> {
        let mut conn = get_connection(&self.pool)?;
        let row = expenses::table
            .find(expense_id)
            .select(ExpenseDB::as_select())
            .first::<ExpenseDB>(&mut conn)
            .into_core()?;
        Ok(row.into())
    }

    async fn create(
        &self,
        new_expense: NewExpense,
        linked_category_id: Option<String>,
    ) -> Result<Expense> {
        self.writer
            .exec(move |conn| {
                let now = Utc::now().naive_utc();
                let row = NewExpenseDB::from_domain(new_expense, Uuid::new_v4().to_string(), now);
                let created = diesel::insert_into(expenses::table)
                    .values(&row)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .into_core()?;

                if let Some(category_id) = linked_category_id {
                    diesel::update(budget_categories::table.find(category_id))
                        .set((
                            budget_categories::spent_amount
                                .eq(budget_categories::spent_amount + created.amount),
                            budget_categories::updated_at.eq(now),
                        ))
                        .execute(conn)
                        .into_core()?;
                }
                Ok(Expense::from(created))
            })
            .await
    }

    async fn delete(&self, expense_id: &str) -> Result<usize> {
        let expense_id = expense_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(expenses::table.find(expense_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
