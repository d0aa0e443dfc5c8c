//! Budget category models and the pure budgeting arithmetic.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::default_currency;
use crate::errors::{Result, ValidationError};
use crate::trips::Trip;

/// Named spending bucket of a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub id: String,
    pub trip_id: String,
    pub category_name: String,
    #[serde(default)]
    pub allocated_amount: f64,
    #[serde(default)]
    pub spent_amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: NaiveDateTime,
}

impl BudgetCategory {
    pub fn remaining(&self) -> f64 {
        self.allocated_amount - self.spent_amount
    }

    /// Spent share of the allocation in percent, 0 for an empty allocation.
    pub fn percent_used(&self) -> f64 {
        percent_of(self.spent_amount, self.allocated_amount)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent_amount > self.allocated_amount
    }
}

/// Input model for creating a budget category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudgetCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub trip_id: String,
    pub category_name: String,
    pub allocated_amount: f64,
    #[serde(default)]
    pub spent_amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub description: Option<String>,
}

impl NewBudgetCategory {
    pub fn new(trip_id: &str, category_name: &str, allocated_amount: f64) -> Self {
        Self {
            id: None,
            trip_id: trip_id.to_string(),
            category_name: category_name.to_string(),
            allocated_amount,
            spent_amount: 0.0,
            currency: default_currency(),
            description: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_category_fields(&self.category_name, self.allocated_amount, self.spent_amount)
    }
}

/// Full replacement of a category's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategoryUpdate {
    pub id: String,
    pub category_name: String,
    pub allocated_amount: f64,
    pub spent_amount: f64,
    pub currency: String,
    pub description: Option<String>,
}

impl BudgetCategoryUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_category_fields(&self.category_name, self.allocated_amount, self.spent_amount)
    }
}

impl From<BudgetCategory> for BudgetCategoryUpdate {
    fn from(c: BudgetCategory) -> Self {
        Self {
            id: c.id,
            category_name: c.category_name,
            allocated_amount: c.allocated_amount,
            spent_amount: c.spent_amount,
            currency: c.currency,
            description: c.description,
        }
    }
}

fn validate_category_fields(name: &str, allocated: f64, spent: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::invalid("Category name cannot be empty").into());
    }
    if !allocated.is_finite() || allocated < 0.0 {
        return Err(ValidationError::invalid("Allocated amount must be non-negative").into());
    }
    if !spent.is_finite() || spent < 0.0 {
        return Err(ValidationError::invalid("Spent amount must be non-negative").into());
    }
    Ok(())
}

/// New allocation for one category, applied by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub category_id: String,
    pub allocated_amount: f64,
}

/// Result of changing a trip's total budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripBudgetUpdate {
    pub trip: Trip,
    pub categories: Vec<BudgetCategory>,
    /// False when the allocations summed to zero and were left alone.
    pub reallocated: bool,
}

/// Per-category line of a [`BudgetOverview`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryUsage {
    pub category_id: String,
    pub category_name: String,
    pub allocated_amount: f64,
    pub spent_amount: f64,
    pub remaining: f64,
    pub percent_used: f64,
    pub is_over_budget: bool,
}

impl From<&BudgetCategory> for CategoryUsage {
    fn from(c: &BudgetCategory) -> Self {
        Self {
            category_id: c.id.clone(),
            category_name: c.category_name.clone(),
            allocated_amount: c.allocated_amount,
            spent_amount: c.spent_amount,
            remaining: c.remaining(),
            percent_used: c.percent_used(),
            is_over_budget: c.is_over_budget(),
        }
    }
}

/// Budget health of a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetOverview {
    pub trip_id: String,
    pub total_budget: f64,
    pub total_allocated: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub spent_percent: f64,
    pub categories: Vec<CategoryUsage>,
}

impl BudgetOverview {
    pub fn build(trip: &Trip, categories: &[BudgetCategory]) -> Self {
        let total_allocated = categories.iter().map(|c| c.allocated_amount).sum();
        let total_spent: f64 = categories.iter().map(|c| c.spent_amount).sum();
        Self {
            trip_id: trip.id.clone(),
            total_budget: trip.total_budget,
            total_allocated,
            total_spent,
            remaining: trip.total_budget - total_spent,
            spent_percent: percent_of(total_spent, trip.total_budget),
            categories: categories.iter().map(CategoryUsage::from).collect(),
        }
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Percent share of the trip budget given to each default category.
pub const DEFAULT_CATEGORY_SHARES: [(&str, f64); 6] = [
    ("Transportation", 25.0),
    ("Accommodation", 30.0),
    ("Food & Dining", 20.0),
    ("Activities & Sightseeing", 15.0),
    ("Shopping & Souvenirs", 5.0),
    ("Emergency Fund", 5.0),
];

/// Default categories for a trip, split from `total_budget` by fixed shares.
pub fn default_categories(trip_id: &str, total_budget: f64) -> Vec<NewBudgetCategory> {
    DEFAULT_CATEGORY_SHARES
        .iter()
        .map(|(name, share)| NewBudgetCategory::new(trip_id, name, total_budget * share / 100.0))
        .collect()
}

/// Scales every allocation so that they sum to `new_total`.
///
/// Returns `None` when the current allocations sum to zero; there is nothing
/// to scale proportionally. Spent amounts are never touched.
pub fn reallocate_categories(
    categories: &[BudgetCategory],
    new_total: f64,
) -> Option<Vec<BudgetCategory>> {
    let current_total: f64 = categories.iter().map(|c| c.allocated_amount).sum();
    if current_total <= 0.0 {
        return None;
    }
    let factor = new_total / current_total;
    Some(
        categories
            .iter()
            .map(|category| BudgetCategory {
                allocated_amount: category.allocated_amount * factor,
                ..category.clone()
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn category(name: &str, allocated: f64, spent: f64) -> BudgetCategory {
        let now = NaiveDate::from_ymd_opt(2024, 11, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        BudgetCategory {
            id: format!("cat-{name}"),
            trip_id: "trip-1".to_string(),
            category_name: name.to_string(),
            allocated_amount: allocated,
            spent_amount: spent,
            currency: "USD".to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_reallocate_scales_proportionally() {
        let categories = vec![
            category("Transportation", 600.0, 120.0),
            category("Accommodation", 400.0, 0.0),
        ];

        let scaled = reallocate_categories(&categories, 1500.0).unwrap();

        assert!((scaled[0].allocated_amount - 900.0).abs() < 1e-9);
        assert!((scaled[1].allocated_amount - 600.0).abs() < 1e-9);
        assert_eq!(scaled[0].spent_amount, 120.0);
        let total: f64 = scaled.iter().map(|c| c.allocated_amount).sum();
        assert!((total - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_reallocate_skips_zero_allocations() {
        let categories = vec![category("Food & Dining", 0.0, 30.0)];
        assert!(reallocate_categories(&categories, 500.0).is_none());
        assert!(reallocate_categories(&[], 500.0).is_none());
    }

    #[test]
    fn test_default_categories_split_whole_budget() {
        let defaults = default_categories("trip-1", 10000.0);
        assert_eq!(defaults.len(), 6);
        assert_eq!(defaults[1].category_name, "Accommodation");
        assert!((defaults[1].allocated_amount - 3000.0).abs() < 1e-9);
        let total: f64 = defaults.iter().map(|c| c.allocated_amount).sum();
        assert!((total - 10000.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_usage() {
        let over = category("Shopping & Souvenirs", 100.0, 150.0);
        assert!(over.is_over_budget());
        assert_eq!(over.remaining(), -50.0);
        assert_eq!(over.percent_used(), 150.0);
        assert_eq!(category("Empty", 0.0, 10.0).percent_used(), 0.0);
    }
}
