//! Investment operations.

use crate::client::{ApiClient, Transport};
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{
    Investment, InvestmentKind, InvestmentSale, InvestmentStatus, InvestmentUpdate, MarketQuote,
    NewInvestment, PortfolioSummary, PriceHistory,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvestmentQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub investment_type: Option<InvestmentKind>,
    pub status: Option<InvestmentStatus>,
    pub platform: Option<String>,
    /// Ask the backend to skip the market-price refresh (it defaults on).
    pub update_prices: Option<bool>,
}

impl InvestmentQuery {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(kind) = self.investment_type {
            params.push(("investment_type".to_string(), kind.as_str().to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(platform) = &self.platform {
            params.push(("platform".to_string(), platform.clone()));
        }
        if let Some(update) = self.update_prices {
            params.push(("update_prices".to_string(), update.to_string()));
        }
        params
    }
}

pub async fn list<T: Transport>(
    client: &ApiClient<T>,
    query: &InvestmentQuery,
) -> Result<Vec<Investment>, ApiError> {
    client
        .get_with(endpoints::INVESTMENTS, query.to_params())
        .await
}

pub async fn get<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<Investment, ApiError> {
    client.get(&endpoints::investment(id)).await
}

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    new_investment: &NewInvestment,
) -> Result<Investment, ApiError> {
    client.post(endpoints::INVESTMENTS, new_investment).await
}

pub async fn update<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    changes: &InvestmentUpdate,
) -> Result<Investment, ApiError> {
    client.put(&endpoints::investment(id), changes).await
}

pub async fn remove<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<(), ApiError> {
    client.delete(&endpoints::investment(id)).await
}

/// Record a (possibly partial) sale.
pub async fn sell<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    sale: &InvestmentSale,
) -> Result<Investment, ApiError> {
    client.post(&endpoints::investment_sell(id), sale).await
}

pub async fn portfolio_summary<T: Transport>(
    client: &ApiClient<T>,
) -> Result<PortfolioSummary, ApiError> {
    client.get(endpoints::PORTFOLIO_SUMMARY).await
}

/// Symbol lookup while adding a holding. The backend caps results at five
/// and returns an empty list when its market-data provider is down.
pub async fn market_search<T: Transport>(
    client: &ApiClient<T>,
    query: &str,
) -> Result<Vec<MarketQuote>, ApiError> {
    client
        .get_with(
            endpoints::MARKET_SEARCH,
            vec![("query".to_string(), query.to_string())],
        )
        .await
}

pub async fn history<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    period: &str,
) -> Result<PriceHistory, ApiError> {
    client
        .get_with(
            &endpoints::investment_history(id),
            vec![("period".to_string(), period.to_string())],
        )
        .await
}
