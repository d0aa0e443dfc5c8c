use async_trait::async_trait;

use super::budget_model::{
    BudgetCategory, BudgetCategoryUpdate, BudgetOverview, CategoryAllocation, NewBudgetCategory,
    TripBudgetUpdate,
};
use crate::errors::Result;
use crate::trips::Trip;

/// Trait for budget category repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    /// Categories of a trip ordered by name.
    fn list_by_trip(&self, trip_id: &str) -> Result<Vec<BudgetCategory>>;
    fn get_by_id(&self, category_id: &str) -> Result<BudgetCategory>;
    async fn create(&self, new_category: NewBudgetCategory) -> Result<BudgetCategory>;
    /// Inserts several categories in a single write.
    async fn create_many(
        &self,
        new_categories: Vec<NewBudgetCategory>,
    ) -> Result<Vec<BudgetCategory>>;
    async fn update(&self, category_update: BudgetCategoryUpdate) -> Result<BudgetCategory>;
    async fn delete(&self, category_id: &str) -> Result<usize>;
    /// Stores the trip's new total together with the category allocations.
    async fn apply_total_budget(
        &self,
        trip_id: &str,
        new_total: f64,
        allocations: Vec<CategoryAllocation>,
    ) -> Result<Trip>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_categories(&self, trip_id: &str) -> Result<Vec<BudgetCategory>>;
    fn get_budget_overview(&self, trip_id: &str) -> Result<BudgetOverview>;
    async fn create_category(&self, new_category: NewBudgetCategory) -> Result<BudgetCategory>;
    async fn update_category(&self, category_update: BudgetCategoryUpdate)
        -> Result<BudgetCategory>;
    async fn delete_category(&self, category_id: &str) -> Result<usize>;
    /// Seeds the default categories when the trip has none.
    async fn initialize_default_categories(&self, trip_id: &str) -> Result<Vec<BudgetCategory>>;
    /// Changes the trip total and rescales allocations proportionally.
    async fn update_total_budget(&self, trip_id: &str, new_total: f64)
        -> Result<TripBudgetUpdate>;
}
