//! Expense operations.

use chrono::NaiveDate;

use crate::client::{ApiClient, Transport};
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{
    CategorySummary, Expense, ExpenseCategory, ExpenseFrequency, ExpenseStats, ExpenseUpdate,
    NewExpense,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<ExpenseCategory>,
    pub frequency: Option<ExpenseFrequency>,
    pub is_recurring: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Substring match on the vendor name.
    pub vendor: Option<String>,
}

impl ExpenseQuery {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(category) = self.category {
            params.push(("category".to_string(), category.as_str().to_string()));
        }
        if let Some(frequency) = self.frequency {
            params.push(("frequency".to_string(), frequency.as_str().to_string()));
        }
        if let Some(recurring) = self.is_recurring {
            params.push(("is_recurring".to_string(), recurring.to_string()));
        }
        if let Some(date) = self.start_date {
            params.push(("start_date".to_string(), date.to_string()));
        }
        if let Some(date) = self.end_date {
            params.push(("end_date".to_string(), date.to_string()));
        }
        if let Some(vendor) = &self.vendor {
            params.push(("vendor".to_string(), vendor.clone()));
        }
        params
    }
}

pub async fn list<T: Transport>(
    client: &ApiClient<T>,
    query: &ExpenseQuery,
) -> Result<Vec<Expense>, ApiError> {
    client
        .get_with(endpoints::EXPENSES, query.to_params())
        .await
}

pub async fn get<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<Expense, ApiError> {
    client.get(&endpoints::expense(id)).await
}

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    new_expense: &NewExpense,
) -> Result<Expense, ApiError> {
    client.post(endpoints::EXPENSES, new_expense).await
}

pub async fn update<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    changes: &ExpenseUpdate,
) -> Result<Expense, ApiError> {
    client.put(&endpoints::expense(id), changes).await
}

pub async fn remove<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    client.delete(&endpoints::expense(id)).await
}

pub async fn stats<T: Transport>(
    client: &ApiClient<T>,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<ExpenseStats, ApiError> {
    let mut params = Vec::new();
    if let Some(year) = year {
        params.push(("year".to_string(), year.to_string()));
    }
    if let Some(month) = month {
        params.push(("month".to_string(), month.to_string()));
    }
    client.get_with(endpoints::EXPENSE_STATS, params).await
}

/// Per-category totals with percentages, sorted by total descending.
pub async fn categories_summary<T: Transport>(
    client: &ApiClient<T>,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<CategorySummary, ApiError> {
    let mut params = Vec::new();
    if let Some(year) = year {
        params.push(("year".to_string(), year.to_string()));
    }
    if let Some(month) = month {
        params.push(("month".to_string(), month.to_string()));
    }
    client.get_with(endpoints::EXPENSE_CATEGORIES, params).await
}
