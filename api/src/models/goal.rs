use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
    Cancelled,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Paused => "paused",
            GoalStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl GoalPriority {
    pub const ALL: [GoalPriority; 4] = [
        GoalPriority::Low,
        GoalPriority::Medium,
        GoalPriority::High,
        GoalPriority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPriority::Low => "low",
            GoalPriority::Medium => "medium",
            GoalPriority::High => "high",
            GoalPriority::Critical => "critical",
        }
    }
}

/// A savings goal. The `progress_percentage`, `remaining_amount`,
/// `days_remaining` and `monthly_contribution_suggested` fields are
/// computed by the backend on read; they are displayed as received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: NaiveDateTime,
    pub status: GoalStatus,
    pub priority: GoalPriority,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub monthly_contribution: Option<f64>,
    pub last_contribution_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub progress_percentage: f64,
    pub remaining_amount: f64,
    pub days_remaining: i64,
    pub monthly_contribution_suggested: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_amount: f64,
    pub target_date: NaiveDateTime,
    pub priority: GoalPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_contribution: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<GoalPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_contribution: Option<f64>,
}

/// Body of the contribute and withdraw endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalContribution {
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriorityBucket {
    pub count: i64,
    pub total_target: f64,
    pub total_saved: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpcomingDeadline {
    pub id: i64,
    pub name: String,
    pub target_date: NaiveDateTime,
    pub days_remaining: i64,
    pub progress_percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalsSummary {
    pub total_goals: i64,
    pub active_goals: i64,
    pub completed_goals: i64,
    pub paused_goals: i64,
    pub total_target_amount: f64,
    pub total_saved_amount: f64,
    pub overall_progress: f64,
    pub goals_by_priority: HashMap<String, PriorityBucket>,
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
}

/// Suggested monthly contribution to reach a goal on time. When the goal
/// is already reached (or the target date has passed) the backend sends a
/// zero contribution and a message instead of the breakdown fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyContributionPlan {
    pub monthly_contribution: f64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub months_remaining: Option<f64>,
    #[serde(default)]
    pub days_remaining: Option<i64>,
    #[serde(default)]
    pub remaining_amount: Option<f64>,
}
