//! Savings-goal operations.

use crate::client::{ApiClient, Transport};
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{
    Goal, GoalContribution, GoalPriority, GoalStatus, GoalUpdate, GoalsSummary,
    MonthlyContributionPlan, NewGoal,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<GoalStatus>,
    pub priority: Option<GoalPriority>,
    /// Completed goals are excluded unless this is set.
    pub include_completed: bool,
}

impl GoalQuery {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            params.push(("priority".to_string(), priority.as_str().to_string()));
        }
        if self.include_completed {
            params.push(("include_completed".to_string(), "true".to_string()));
        }
        params
    }
}

pub async fn list<T: Transport>(
    client: &ApiClient<T>,
    query: &GoalQuery,
) -> Result<Vec<Goal>, ApiError> {
    client.get_with(endpoints::GOALS, query.to_params()).await
}

pub async fn get<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<Goal, ApiError> {
    client.get(&endpoints::goal(id)).await
}

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    new_goal: &NewGoal,
) -> Result<Goal, ApiError> {
    client.post(endpoints::GOALS, new_goal).await
}

pub async fn update<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    changes: &GoalUpdate,
) -> Result<Goal, ApiError> {
    client.put(&endpoints::goal(id), changes).await
}

pub async fn remove<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    client.delete(&endpoints::goal(id)).await
}

/// Add to the goal's saved amount. The backend marks the goal completed
/// when the target is reached.
pub async fn contribute<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    amount: f64,
) -> Result<Goal, ApiError> {
    client
        .post(&endpoints::goal_contribute(id), &GoalContribution { amount })
        .await
}

/// Take money back out of a goal; the backend rejects withdrawals larger
/// than the saved amount.
pub async fn withdraw<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    amount: f64,
) -> Result<Goal, ApiError> {
    client
        .post(&endpoints::goal_withdraw(id), &GoalContribution { amount })
        .await
}

pub async fn summary<T: Transport>(client: &ApiClient<T>) -> Result<GoalsSummary, ApiError> {
    client.get(endpoints::GOALS_SUMMARY).await
}

/// Backend-computed suggestion for reaching the goal by its target date.
pub async fn monthly_contribution<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
) -> Result<MonthlyContributionPlan, ApiError> {
    client.get(&endpoints::goal_monthly_contribution(id)).await
}
