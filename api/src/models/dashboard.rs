use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    pub savings_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOverview {
    pub month: String,
    pub year: i32,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// One month of the six-month cash-flow series. The backend formats the
/// date label; it is rendered as received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    pub date: String,
    pub income: f64,
    pub expenses: f64,
    pub net_flow: f64,
    pub cumulative_balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub count: i64,
}

/// Goals block of the dashboard aggregate (narrower than the
/// `/goals/summary` response).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalsOverview {
    pub total_goals: i64,
    pub active_goals: i64,
    pub completed_goals: i64,
    pub total_target_amount: f64,
    pub total_saved_amount: f64,
    pub overall_progress: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformerRef {
    pub symbol: String,
    pub name: String,
    pub profit_loss_percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestmentsOverview {
    pub total_invested: f64,
    pub current_value: f64,
    pub total_return: f64,
    pub return_percentage: f64,
    pub best_performer: Option<PerformerRef>,
    pub worst_performer: Option<PerformerRef>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentTransaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Danger,
    Success,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

/// `/dashboard` aggregate: everything the dashboard view renders, in one
/// round trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub financial_summary: FinancialSummary,
    pub monthly_overview: MonthlyOverview,
    pub cash_flow: Vec<CashFlowPoint>,
    pub income_by_type: Vec<CategoryBreakdown>,
    pub expenses_by_category: Vec<CategoryBreakdown>,
    pub goals_summary: GoalsOverview,
    pub investments_summary: InvestmentsOverview,
    pub recent_transactions: Vec<RecentTransaction>,
    pub average_daily_expense: f64,
    pub days_until_month_end: i64,
    pub projected_month_end_balance: f64,
    pub alerts: Vec<Alert>,
}

/// `/dashboard/quick-stats` response for header widgets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuickStats {
    pub current_month_balance: f64,
    pub active_goals_count: i64,
    pub portfolio_value: f64,
    pub month_name: String,
}
