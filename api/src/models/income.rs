use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeKind {
    Salary,
    Freelance,
    Investment,
    Rental,
    Business,
    Gift,
    Other,
}

impl IncomeKind {
    pub const ALL: [IncomeKind; 7] = [
        IncomeKind::Salary,
        IncomeKind::Freelance,
        IncomeKind::Investment,
        IncomeKind::Rental,
        IncomeKind::Business,
        IncomeKind::Gift,
        IncomeKind::Other,
    ];

    /// The wire value, also used in query-string filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeKind::Salary => "salary",
            IncomeKind::Freelance => "freelance",
            IncomeKind::Investment => "investment",
            IncomeKind::Rental => "rental",
            IncomeKind::Business => "business",
            IncomeKind::Gift => "gift",
            IncomeKind::Other => "other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub source: String,
    pub income_type: IncomeKind,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewIncome {
    pub amount: f64,
    pub source: String,
    pub income_type: IncomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_type: Option<IncomeKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
}

/// One month's total in a by-month series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncomeStats {
    pub total_income: f64,
    pub monthly_average: f64,
    pub income_by_type: HashMap<String, f64>,
    pub income_by_month: Vec<MonthTotal>,
    pub last_income_date: Option<NaiveDateTime>,
}
