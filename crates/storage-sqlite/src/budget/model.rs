//! Database models for budget categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use voyage_core::budget::{BudgetCategory, BudgetCategoryUpdate, NewBudgetCategory};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budget_categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetCategoryDB {
    pub id: String,
    pub trip_id: String,
    pub category_name: String,
    pub allocated_amount: f64,
    pub spent_amount: f64,
    pub currency: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::budget_categories)]
pub struct NewBudgetCategoryDB {
    pub id: String,
    pub trip_id: String,
    pub category_name: String,
    pub allocated_amount: f64,
    pub spent_amount: f64,
    pub currency: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::budget_categories)]
#[diesel(treat_none_as_null = true)]
pub struct BudgetCategoryChangesetDB {
    pub category_name: String,
    pub allocated_amount: f64,
    pub spent_amount: f64,
    pub currency: String,
    pub description: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<BudgetCategoryDB> for BudgetCategory {
    fn from(db: BudgetCategoryDB) -> Self {
        Self {
            id: db.id,
            trip_id: db.trip_id,
            category_name: db.category_name,
            allocated_amount: db.allocated_amount,
            spent_amount: db.spent_amount,
            currency: db.currency,
            description: db.description,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl NewBudgetCategoryDB {
    pub fn from_domain(domain: NewBudgetCategory, id: String, now: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            trip_id: domain.trip_id,
            category_name: domain.category_name,
            allocated_amount: domain.allocated_amount,
            spent_amount: domain.spent_amount,
            currency: domain.currency,
            description: domain.description,
            created_at: now,
            updated_at: now,
        }
    }
}

impl BudgetCategoryChangesetDB {
    pub fn from_domain(domain: BudgetCategoryUpdate, now: NaiveDateTime) -> Self {
        Self {
            category_name: domain.category_name,
            allocated_amount: domain.allocated_amount,
            spent_amount: domain.spent_amount,
            currency: domain.currency,
            description: domain.description,
            updated_at: now,
        }
    }
}
