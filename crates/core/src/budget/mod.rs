//! Budget module - categories, allocations and budget health.

mod budget_model;
mod budget_service;
mod budget_traits;


pub use budget_model::{
    default_categories, reallocate_categories, BudgetCategory, BudgetCategoryUpdate,
    BudgetOverview, CategoryAllocation, CategoryUsage, NewBudgetCategory, TripBudgetUpdate,
    DEFAULT_CATEGORY_SHARES,
};
pub use budget_service::BudgetService;
pub use budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
