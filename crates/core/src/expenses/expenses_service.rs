use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::expenses_model::{find_linked_category, Expense, ExpenseFilter, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::budget::BudgetRepositoryTrait;
use crate::errors::Result;

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(
        repository: Arc<dyn ExpenseRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        ExpenseService {
            repository,
            budget_repository,
        }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self, trip_id: &str, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let expenses = self.repository.list_by_trip(trip_id)?;
        Ok(expenses
            .into_iter()
            .filter(|expense| filter.matches(expense))
            .collect())
    }

    fn get_expense(&self, expense_id: &str) -> Result<Expense> {
        self.repository.get_by_id(expense_id)
    }

    async fn record_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;

        let categories = self.budget_repository.list_by_trip(&new_expense.trip_id)?;
        let linked_category_id =
            find_linked_category(&categories, &new_expense.category).map(|c| c.id.clone());
        match &linked_category_id {
            Some(category_id) => debug!(
                "Charging {:.2} to category {} ({})",
                new_expense.amount, new_expense.category, category_id
            ),
            None => debug!(
                "No budget category named '{}' on trip {}; expense is not charged to a category",
                new_expense.category, new_expense.trip_id
            ),
        }

        self.repository
            .create(new_expense, linked_category_id)
            .await
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<usize> {
        self.repository.delete(expense_id).await
    }
}
