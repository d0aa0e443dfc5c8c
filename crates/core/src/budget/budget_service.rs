use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::budget_model::{
    default_categories, reallocate_categories, BudgetCategory, BudgetCategoryUpdate,
    BudgetOverview, CategoryAllocation, NewBudgetCategory, TripBudgetUpdate,
};
use super::budget_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::trips::TripRepositoryTrait;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    trip_repository: Arc<dyn TripRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        trip_repository: Arc<dyn TripRepositoryTrait>,
    ) -> Self {
        BudgetService {
            repository,
            trip_repository,
        }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_categories(&self, trip_id: &str) -> Result<Vec<BudgetCategory>> {
        self.repository.list_by_trip(trip_id)
    }

    fn get_budget_overview(&self, trip_id: &str) -> Result<BudgetOverview> {
        let trip = self.trip_repository.get_by_id(trip_id)?;
        let categories = self.repository.list_by_trip(trip_id)?;
        Ok(BudgetOverview::build(&trip, &categories))
    }

    async fn create_category(&self, new_category: NewBudgetCategory) -> Result<BudgetCategory> {
        new_category.validate()?;
        self.repository.create(new_category).await
    }

    async fn update_category(
        &self,
        category_update: BudgetCategoryUpdate,
    ) -> Result<BudgetCategory> {
        category_update.validate()?;
        self.repository.update(category_update).await
    }

    async fn delete_category(&self, category_id: &str) -> Result<usize> {
        self.repository.delete(category_id).await
    }

    async fn initialize_default_categories(&self, trip_id: &str) -> Result<Vec<BudgetCategory>> {
        let existing = self.repository.list_by_trip(trip_id)?;
        if !existing.is_empty() {
            debug!(
                "Trip {} already has {} budget categories",
                trip_id,
                existing.len()
            );
            return Ok(existing);
        }
        let trip = self.trip_repository.get_by_id(trip_id)?;
        self.repository
            .create_many(default_categories(&trip.id, trip.total_budget))
            .await
    }

    async fn update_total_budget(
        &self,
        trip_id: &str,
        new_total: f64,
    ) -> Result<TripBudgetUpdate> {
        if !new_total.is_finite() || new_total < 0.0 {
            return Err(
                ValidationError::invalid("Total budget must be a non-negative amount").into(),
            );
        }
        // Existence check so an unknown trip surfaces as NotFound.
        self.trip_repository.get_by_id(trip_id)?;

        let categories = self.repository.list_by_trip(trip_id)?;
        let allocations: Vec<CategoryAllocation> = reallocate_categories(&categories, new_total)
            .unwrap_or_default()
            .into_iter()
            .map(|category| CategoryAllocation {
                category_id: category.id,
                allocated_amount: category.allocated_amount,
            })
            .collect();
        let reallocated = !allocations.is_empty();

        let trip = self
            .repository
            .apply_total_budget(trip_id, new_total, allocations)
            .await?;
        info!(
            "Trip {} budget set to {:.2} (categories rescaled: {})",
            trip_id, new_total, reallocated
        );

        Ok(TripBudgetUpdate {
            trip,
            categories: self.repository.list_by_trip(trip_id)?,
            reallocated,
        })
    }
}
