//! Database models for expenses.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use voyage_core::expenses::{Expense, NewExpense};

#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub trip_id: String,
    pub destination_id: Option<String>,
    pub activity_id: Option<String>,
    pub transportation_id: Option<String>,
    pub hotel_id: Option<String>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub currency: String,
    pub expense_date: NaiveDate,
    pub payment_method: Option<String>,
    pub receipt_path: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub id: String,
    pub trip_id: String,
    pub destination_id: Option<String>,
    pub activity_id: Option<String>,
    pub transportation_id: Option<String>,
    pub hotel_id: Option<String>,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub currency: String,
    pub expense_date: NaiveDate,
    pub payment_method: Option<String>,
    pub receipt_path: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            id: db.id,
            trip_id: db.trip_id,
            destination_id: db.destination_id,
            activity_id: db.activity_id,
            transportation_id: db.transportation_id,
            hotel_id: db.hotel_id,
            category: db.category,
            description: db.description,
            amount: db.amount,
            currency: db.currency,
            expense_date: db.expense_date,
            payment_method: db.payment_method,
            receipt_path: db.receipt_path,
            notes: db.notes,
            created_at: db.created_at,
        }
    }
}

impl NewExpenseDB {
    pub fn from_domain(domain: NewExpense, id: String, now: NaiveDateTime) -> Self {
        Self {
            id: domain.id.unwrap_or(id),
            trip_id: domain.trip_id,
            destination_id: domain.destination_id,
            activity_id: domain.activity_id,
            transportation_id: domain.transportation_id,
            hotel_id: domain.hotel_id,
            category: domain.category,
            description: domain.description,
            amount: domain.amount,
            currency: domain.currency,
            expense_date: domain.expense_date,
            payment_method: domain.payment_method,
            receipt_path: domain.receipt_path,
            notes: domain.notes,
            created_at: now,
        }
    }
}
