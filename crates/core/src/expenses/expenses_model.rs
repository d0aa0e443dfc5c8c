//! Expense models and the category linkage rule.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::budget::BudgetCategory;
use crate::constants::default_currency;
use crate::errors::{Result, ValidationError};

/// Payment methods offered when recording an expense.
pub const PAYMENT_METHODS: [&str; 6] = [
    "Cash",
    "Credit Card",
    "Debit Card",
    "Mobile Payment",
    "Bank Transfer",
    "Other",
];

/// Money actually spent during the trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub trip_id: String,
    pub destination_id: Option<String>,
    pub activity_id: Option<String>,
    pub transportation_id: Option<String>,
    pub hotel_id: Option<String>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub expense_date: NaiveDate,
    pub payment_method: Option<String>,
    pub receipt_path: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: NaiveDateTime,
}

/// Input model for recording an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub trip_id: String,
    pub destination_id: Option<String>,
    pub activity_id: Option<String>,
    pub transportation_id: Option<String>,
    pub hotel_id: Option<String>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub expense_date: NaiveDate,
    pub payment_method: Option<String>,
    pub receipt_path: Option<String>,
    pub notes: Option<String>,
}

impl NewExpense {
    pub fn new(
        trip_id: &str,
        category: &str,
        description: &str,
        amount: f64,
        expense_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            trip_id: trip_id.to_string(),
            destination_id: None,
            activity_id: None,
            transportation_id: None,
            hotel_id: None,
            category: category.to_string(),
            description: description.to_string(),
            amount,
            currency: default_currency(),
            expense_date,
            payment_method: None,
            receipt_path: None,
            notes: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ValidationError::invalid("Expense amount must be non-negative").into());
        }
        Ok(())
    }
}

/// Optional narrowing of an expense listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub destination_id: Option<String>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| expense.category == category)
            && self
                .destination_id
                .as_deref()
                .map_or(true, |id| expense.destination_id.as_deref() == Some(id))
    }
}

/// The category an expense counts against: the first one whose name equals
/// the expense category exactly.
pub fn find_linked_category<'a>(
    categories: &'a [BudgetCategory],
    category_name: &str,
) -> Option<&'a BudgetCategory> {
    categories
        .iter()
        .find(|category| category.category_name == category_name)
}

/// Sum of expense amounts per category name.
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
    expenses.iter().fold(BTreeMap::new(), |mut totals, expense| {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        totals
    })
}
