//! Typed mirrors of the backend JSON wire format.
//!
//! Field names match the wire exactly (snake_case throughout); enums carry
//! `rename_all = "snake_case"` so variants round-trip as the backend's
//! string values. Amounts are `f64`: every financial computation that
//! matters (goal progress, P/L, suggested contributions) is performed and
//! rounded server-side and displayed here as received.

mod dashboard;
mod expense;
mod goal;
mod income;
mod investment;
mod user;

pub use dashboard::{
    Alert, AlertLevel, CashFlowPoint, CategoryBreakdown, DashboardData, FinancialSummary,
    GoalsOverview, InvestmentsOverview, MonthlyOverview, PerformerRef, QuickStats,
    RecentTransaction, TransactionKind,
};
pub use expense::{
    CategorySummary, CategoryTotal, Expense, ExpenseCategory, ExpenseFrequency, ExpenseStats,
    ExpenseUpdate, NewExpense, VendorTotal,
};
pub use goal::{
    Goal, GoalContribution, GoalPriority, GoalStatus, GoalUpdate, GoalsSummary,
    MonthlyContributionPlan, NewGoal, PriorityBucket, UpcomingDeadline,
};
pub use income::{Income, IncomeKind, IncomeStats, IncomeUpdate, MonthTotal, NewIncome};
pub use investment::{
    Investment, InvestmentKind, InvestmentSale, InvestmentStatus, InvestmentUpdate, MarketQuote,
    NewInvestment, PortfolioSummary, PerformerEntry, PriceHistory, QuoteSnapshot, TypeBucket,
};
pub use user::{PasswordChange, RegisterRequest, Token, UserProfile, UserUpdate};
