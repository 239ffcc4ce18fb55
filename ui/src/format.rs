//! Display formatting: amounts, dates, percentages, and the
//! human-readable labels and colors for the categorical enums.

use api::models::{
    AlertLevel, ExpenseCategory, ExpenseFrequency, GoalPriority, GoalStatus, IncomeKind,
    InvestmentKind, InvestmentStatus,
};
use chrono::NaiveDateTime;

/// Format an amount with thousands separators and the configured currency
/// symbol, e.g. `1234567.5` → `"1,234,567.50 €"`.
pub fn money(amount: f64, symbol: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02} {symbol}")
}

pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Signed percentage for profit/loss style figures.
pub fn signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

pub fn date(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y").to_string()
}

pub fn date_time(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

pub fn income_kind_label(kind: IncomeKind) -> &'static str {
    match kind {
        IncomeKind::Salary => "Salary",
        IncomeKind::Freelance => "Freelance",
        IncomeKind::Investment => "Investment",
        IncomeKind::Rental => "Rental",
        IncomeKind::Business => "Business",
        IncomeKind::Gift => "Gift",
        IncomeKind::Other => "Other",
    }
}

pub fn expense_category_label(category: ExpenseCategory) -> &'static str {
    match category {
        ExpenseCategory::Housing => "Housing",
        ExpenseCategory::Utilities => "Utilities",
        ExpenseCategory::Transportation => "Transportation",
        ExpenseCategory::Groceries => "Groceries",
        ExpenseCategory::Insurance => "Insurance",
        ExpenseCategory::Food => "Food",
        ExpenseCategory::Entertainment => "Entertainment",
        ExpenseCategory::Clothing => "Clothing",
        ExpenseCategory::Health => "Health",
        ExpenseCategory::Education => "Education",
        ExpenseCategory::Personal => "Personal",
        ExpenseCategory::Gifts => "Gifts",
        ExpenseCategory::Travel => "Travel",
        ExpenseCategory::Shopping => "Shopping",
        ExpenseCategory::Other => "Other",
    }
}

pub fn frequency_label(frequency: ExpenseFrequency) -> &'static str {
    match frequency {
        ExpenseFrequency::OneTime => "One-time",
        ExpenseFrequency::Weekly => "Weekly",
        ExpenseFrequency::Monthly => "Monthly",
        ExpenseFrequency::Yearly => "Yearly",
    }
}

pub fn goal_status_label(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Active => "Active",
        GoalStatus::Completed => "Completed",
        GoalStatus::Paused => "Paused",
        GoalStatus::Cancelled => "Cancelled",
    }
}

pub fn priority_label(priority: GoalPriority) -> &'static str {
    match priority {
        GoalPriority::Low => "Low",
        GoalPriority::Medium => "Medium",
        GoalPriority::High => "High",
        GoalPriority::Critical => "Critical",
    }
}

pub fn investment_kind_label(kind: InvestmentKind) -> &'static str {
    match kind {
        InvestmentKind::Stock => "Stock",
        InvestmentKind::Etf => "ETF",
        InvestmentKind::MutualFund => "Mutual fund",
        InvestmentKind::Bond => "Bond",
        InvestmentKind::Crypto => "Crypto",
        InvestmentKind::RealEstate => "Real estate",
        InvestmentKind::Commodity => "Commodity",
        InvestmentKind::Other => "Other",
    }
}

pub fn investment_status_label(status: InvestmentStatus) -> &'static str {
    match status {
        InvestmentStatus::Active => "Active",
        InvestmentStatus::Sold => "Sold",
        InvestmentStatus::PartialSold => "Partially sold",
    }
}

/// Stable chart/badge color per category wire value.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "salary" => "#3b82f6",
        "freelance" => "#8b5cf6",
        "investment" => "#10b981",
        "rental" => "#f59e0b",
        "business" => "#06b6d4",
        "gift" => "#ec4899",
        "housing" => "#ef4444",
        "utilities" => "#f97316",
        "transportation" => "#eab308",
        "groceries" => "#84cc16",
        "insurance" => "#22c55e",
        "food" => "#14b8a6",
        "entertainment" => "#06b6d4",
        "clothing" => "#3b82f6",
        "health" => "#6366f1",
        "education" => "#8b5cf6",
        "personal" => "#a855f7",
        "gifts" => "#d946ef",
        "travel" => "#ec4899",
        "shopping" => "#f43f5e",
        _ => "#6b7280",
    }
}

pub fn priority_color(priority: GoalPriority) -> &'static str {
    match priority {
        GoalPriority::Low => "#6b7280",
        GoalPriority::Medium => "#3b82f6",
        GoalPriority::High => "#f59e0b",
        GoalPriority::Critical => "#ef4444",
    }
}

/// CSS class suffix for a dashboard alert banner.
pub fn alert_class(level: AlertLevel) -> &'static str {
    match level {
        AlertLevel::Info => "alert--info",
        AlertLevel::Warning => "alert--warning",
        AlertLevel::Danger => "alert--danger",
        AlertLevel::Success => "alert--success",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0, "€"), "0.00 €");
        assert_eq!(money(1234567.5, "€"), "1,234,567.50 €");
        assert_eq!(money(999.999, "$"), "1,000.00 $");
        assert_eq!(money(-42.1, "€"), "-42.10 €");
    }

    #[test]
    fn percentages() {
        assert_eq!(percent(12.34), "12.3%");
        assert_eq!(signed_percent(3.456), "+3.46%");
        assert_eq!(signed_percent(-3.456), "-3.46%");
    }
}
