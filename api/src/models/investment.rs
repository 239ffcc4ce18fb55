use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    Stock,
    Etf,
    MutualFund,
    Bond,
    Crypto,
    RealEstate,
    Commodity,
    Other,
}

impl InvestmentKind {
    pub const ALL: [InvestmentKind; 8] = [
        InvestmentKind::Stock,
        InvestmentKind::Etf,
        InvestmentKind::MutualFund,
        InvestmentKind::Bond,
        InvestmentKind::Crypto,
        InvestmentKind::RealEstate,
        InvestmentKind::Commodity,
        InvestmentKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentKind::Stock => "stock",
            InvestmentKind::Etf => "etf",
            InvestmentKind::MutualFund => "mutual_fund",
            InvestmentKind::Bond => "bond",
            InvestmentKind::Crypto => "crypto",
            InvestmentKind::RealEstate => "real_estate",
            InvestmentKind::Commodity => "commodity",
            InvestmentKind::Other => "other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    Active,
    Sold,
    PartialSold,
}

impl InvestmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStatus::Active => "active",
            InvestmentStatus::Sold => "sold",
            InvestmentStatus::PartialSold => "partial_sold",
        }
    }
}

/// A holding. The `total_invested` through `profit_loss_percentage`
/// fields are backend-computed; the `real_time_price` block is only
/// present when the backend could reach its market-data provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    pub user_id: i64,
    pub symbol: String,
    pub name: String,
    pub investment_type: InvestmentKind,
    pub quantity: f64,
    pub purchase_price: f64,
    pub purchase_date: NaiveDateTime,
    pub purchase_fees: f64,
    pub current_price: Option<f64>,
    pub last_price_update: Option<NaiveDateTime>,
    pub sale_quantity: Option<f64>,
    pub sale_price: Option<f64>,
    pub sale_date: Option<NaiveDateTime>,
    pub sale_fees: f64,
    pub platform: Option<String>,
    pub notes: Option<String>,
    pub status: InvestmentStatus,
    pub total_invested: Option<f64>,
    pub current_value: Option<f64>,
    pub profit_loss: Option<f64>,
    pub profit_loss_percentage: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub real_time_price: Option<f64>,
    #[serde(default)]
    pub day_change: Option<f64>,
    #[serde(default)]
    pub day_change_percentage: Option<f64>,
    #[serde(default)]
    pub market_status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewInvestment {
    pub symbol: String,
    pub name: String,
    pub investment_type: InvestmentKind,
    pub quantity: f64,
    pub purchase_price: f64,
    pub purchase_date: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_fees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_fees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of the sell endpoint; partial sales leave the holding
/// `partial_sold` with the remainder still active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSale {
    pub quantity: f64,
    pub sale_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_fees: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeBucket {
    pub count: i64,
    pub value: f64,
    pub invested: f64,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformerEntry {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub profit_loss_percentage: f64,
    pub profit_loss: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_invested: f64,
    pub current_value: f64,
    pub total_profit_loss: f64,
    pub total_profit_loss_percentage: f64,
    pub investments_count: i64,
    pub investments_by_type: HashMap<String, TypeBucket>,
    pub top_performers: Vec<PerformerEntry>,
    pub worst_performers: Vec<PerformerEntry>,
}

/// A market-search hit (symbol lookup while adding a holding).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub symbol: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<String>,
    #[serde(default)]
    pub volume: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// `/investments/{id}/history` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub symbol: String,
    pub name: String,
    pub period: String,
    pub current_data: QuoteSnapshot,
    #[serde(default)]
    pub message: Option<String>,
}
