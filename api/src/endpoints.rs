//! REST endpoint catalogue. Paths are relative to the configured API base.

// Auth
pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const ME: &str = "/auth/me";

// Users
pub fn user(id: i64) -> String {
    format!("/users/{id}")
}

// Dashboard
pub const DASHBOARD: &str = "/dashboard";
pub const QUICK_STATS: &str = "/dashboard/quick-stats";

// Incomes
pub const INCOMES: &str = "/incomes";
pub const INCOME_STATS: &str = "/incomes/stats";
pub fn income(id: i64) -> String {
    format!("/incomes/{id}")
}

// Expenses
pub const EXPENSES: &str = "/expenses";
pub const EXPENSE_STATS: &str = "/expenses/stats";
pub const EXPENSE_CATEGORIES: &str = "/expenses/categories/summary";
pub fn expense(id: i64) -> String {
    format!("/expenses/{id}")
}

// Goals
pub const GOALS: &str = "/goals";
pub const GOALS_SUMMARY: &str = "/goals/summary";
pub fn goal(id: i64) -> String {
    format!("/goals/{id}")
}
pub fn goal_contribute(id: i64) -> String {
    format!("/goals/{id}/contribute")
}
pub fn goal_withdraw(id: i64) -> String {
    format!("/goals/{id}/withdraw")
}
pub fn goal_monthly_contribution(id: i64) -> String {
    format!("/goals/calculate/monthly-contribution/{id}")
}

// Investments
pub const INVESTMENTS: &str = "/investments";
pub const PORTFOLIO_SUMMARY: &str = "/investments/portfolio/summary";
pub const MARKET_SEARCH: &str = "/investments/market/search";
pub fn investment(id: i64) -> String {
    format!("/investments/{id}")
}
pub fn investment_sell(id: i64) -> String {
    format!("/investments/{id}/sell")
}
pub fn investment_history(id: i64) -> String {
    format!("/investments/{id}/history")
}
