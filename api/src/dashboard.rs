//! Dashboard aggregate operations.

use crate::client::{ApiClient, Transport};
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{DashboardData, QuickStats};

/// The full dashboard aggregate, optionally pinned to a year/month.
pub async fn data<T: Transport>(
    client: &ApiClient<T>,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<DashboardData, ApiError> {
    let mut params = Vec::new();
    if let Some(year) = year {
        params.push(("year".to_string(), year.to_string()));
    }
    if let Some(month) = month {
        params.push(("month".to_string(), month.to_string()));
    }
    client.get_with(endpoints::DASHBOARD, params).await
}

/// Small header widget numbers.
pub async fn quick_stats<T: Transport>(client: &ApiClient<T>) -> Result<QuickStats, ApiError> {
    client.get(endpoints::QUICK_STATS).await
}
