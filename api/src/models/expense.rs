use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Housing,
    Utilities,
    Transportation,
    Groceries,
    Insurance,
    Food,
    Entertainment,
    Clothing,
    Health,
    Education,
    Personal,
    Gifts,
    Travel,
    Shopping,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 15] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Utilities,
        ExpenseCategory::Transportation,
        ExpenseCategory::Groceries,
        ExpenseCategory::Insurance,
        ExpenseCategory::Food,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Clothing,
        ExpenseCategory::Health,
        ExpenseCategory::Education,
        ExpenseCategory::Personal,
        ExpenseCategory::Gifts,
        ExpenseCategory::Travel,
        ExpenseCategory::Shopping,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "housing",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Transportation => "transportation",
            ExpenseCategory::Groceries => "groceries",
            ExpenseCategory::Insurance => "insurance",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Clothing => "clothing",
            ExpenseCategory::Health => "health",
            ExpenseCategory::Education => "education",
            ExpenseCategory::Personal => "personal",
            ExpenseCategory::Gifts => "gifts",
            ExpenseCategory::Travel => "travel",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Other => "other",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseFrequency {
    #[default]
    OneTime,
    Weekly,
    Monthly,
    Yearly,
}

impl ExpenseFrequency {
    pub const ALL: [ExpenseFrequency; 4] = [
        ExpenseFrequency::OneTime,
        ExpenseFrequency::Weekly,
        ExpenseFrequency::Monthly,
        ExpenseFrequency::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseFrequency::OneTime => "one_time",
            ExpenseFrequency::Weekly => "weekly",
            ExpenseFrequency::Monthly => "monthly",
            ExpenseFrequency::Yearly => "yearly",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub frequency: ExpenseFrequency,
    pub is_recurring: bool,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    pub frequency: ExpenseFrequency,
    pub is_recurring: bool,
    pub date: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<ExpenseFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VendorTotal {
    pub vendor: String,
    pub total: f64,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseStats {
    pub total_expenses: f64,
    pub monthly_average: f64,
    pub expenses_by_category: HashMap<String, f64>,
    pub expenses_by_month: Vec<super::MonthTotal>,
    pub top_vendors: Vec<VendorTotal>,
    pub recurring_expenses_total: f64,
    pub fixed_expenses: f64,
    pub variable_expenses: f64,
}

/// One row of the category summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: i64,
    pub percentage: f64,
}

/// `/expenses/categories/summary` response, sorted by total descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub categories: Vec<CategoryTotal>,
    pub total: f64,
}
