//! SQLite storage implementation for budget categories.

mod model;
mod repository;

pub use model::{BudgetCategoryChangesetDB, BudgetCategoryDB, NewBudgetCategoryDB};
pub use repository::BudgetRepository;
