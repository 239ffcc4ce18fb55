//! Income operations.

use chrono::NaiveDate;

use crate::client::{ApiClient, Transport};
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{Income, IncomeKind, IncomeStats, IncomeUpdate, NewIncome};

/// Filters for the income listing. All optional; the backend defaults
/// pagination to the first 100 records ordered by date descending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncomeQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub income_type: Option<IncomeKind>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl IncomeQuery {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(kind) = self.income_type {
            params.push(("income_type".to_string(), kind.as_str().to_string()));
        }
        if let Some(date) = self.start_date {
            params.push(("start_date".to_string(), date.to_string()));
        }
        if let Some(date) = self.end_date {
            params.push(("end_date".to_string(), date.to_string()));
        }
        params
    }
}

pub async fn list<T: Transport>(
    client: &ApiClient<T>,
    query: &IncomeQuery,
) -> Result<Vec<Income>, ApiError> {
    client.get_with(endpoints::INCOMES, query.to_params()).await
}

pub async fn get<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<Income, ApiError> {
    client.get(&endpoints::income(id)).await
}

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    new_income: &NewIncome,
) -> Result<Income, ApiError> {
    client.post(endpoints::INCOMES, new_income).await
}

pub async fn update<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    changes: &IncomeUpdate,
) -> Result<Income, ApiError> {
    client.put(&endpoints::income(id), changes).await
}

pub async fn remove<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    client.delete(&endpoints::income(id)).await
}

/// Income statistics, optionally narrowed to a year or month.
pub async fn stats<T: Transport>(
    client: &ApiClient<T>,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<IncomeStats, ApiError> {
    let mut params = Vec::new();
    if let Some(year) = year {
        params.push(("year".to_string(), year.to_string()));
    }
    if let Some(month) = month {
        params.push(("month".to_string(), month.to_string()));
    }
    client.get_with(endpoints::INCOME_STATS, params).await
}
