//! Expenses module - money spent and its link to budget categories.

mod expenses_model;
mod expenses_service;
mod expenses_traits;


pub use expenses_model::{
    find_linked_category, totals_by_category, Expense, ExpenseFilter, NewExpense, PAYMENT_METHODS,
};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
