use async_trait::async_trait;

use super::expenses_model::{Expense, ExpenseFilter, NewExpense};
use crate::errors::Result;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// Expenses of a trip, most recent expense date first.
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<Expense>>;
    fn get_by_id(&self, expense_id: &str) -> Result<Expense>;
    /// Inserts the expense and, when `linked_category_id` is set, adds its
    /// amount to that category's spent amount in the same write.
    async fn create(
        &self,
        new_expense: NewExpense,
        linked_category_id: Option<String>,
    ) -> Result<Expense>;
    async fn delete(&self, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self, trip_id: &str, filter: &ExpenseFilter) -> Result<Vec<Expense>>;
    fn get_expense(&self, expense_id: &str) -> Result<Expense>;
    /// Records an expense and charges it to the budget category of the same name.
    async fn record_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: &str) -> Result<usize>;
}
