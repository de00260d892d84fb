//! Symbol search and listing endpoints

use crate::transport::{QueryParams, Transport};
use fmp_core::types::SymbolExchange;
use fmp_core::{Endpoint, Error, Result};
use fmp_models::request::SearchRequest;
use fmp_models::symbol::{SymbolListEntry, SymbolMatch};
use std::sync::Arc;
use tracing::instrument;

/// Symbol lookup endpoints
#[derive(Debug, Clone)]
pub struct SymbolEndpoints {
  transport: Arc<Transport>,
}

impl SymbolEndpoints {
  /// Create a new symbol endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Search by company name or ticker
  ///
  /// # Examples
  ///
  /// ```ignore
  /// use fmp_client::{QuoteExchange, SearchRequest};
  ///
  /// let request = SearchRequest::new("apple").limit(10).exchange(QuoteExchange::Nasdaq);
  /// let hits = client.symbols().search(&request).await?;
  /// ```
  #[instrument(skip(self))]
  pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SymbolMatch>> {
    let params = search_params(request)?;
    self.transport.get(Endpoint::Search, &[], params).await
  }

  /// Search by ticker only
  #[instrument(skip(self))]
  pub async fn search_ticker(&self, request: &SearchRequest) -> Result<Vec<SymbolMatch>> {
    let params = search_params(request)?;
    self.transport.get(Endpoint::SearchTicker, &[], params).await
  }

  /// List the symbols traded on an exchange
  #[instrument(skip(self))]
  pub async fn symbols_by_exchange(&self, exchange: SymbolExchange) -> Result<Vec<SymbolMatch>> {
    self.transport.get(Endpoint::SymbolsByExchange, &[exchange.as_str()], QueryParams::new()).await
  }

  /// List every symbol the API covers
  #[instrument(skip(self))]
  pub async fn symbol_list(&self) -> Result<Vec<SymbolListEntry>> {
    self.transport.get(Endpoint::SymbolList, &[], QueryParams::new()).await
  }
}

fn search_params(request: &SearchRequest) -> Result<QueryParams> {
  if request.query.trim().is_empty() {
    return Err(Error::InvalidParameter("search query is empty".to_string()));
  }

  let mut params = QueryParams::new();
  params.insert("query".to_string(), request.query.clone());

  if let Some(limit) = request.limit {
    params.insert("limit".to_string(), limit.to_string());
  }

  if let Some(exchange) = request.exchange {
    params.insert("exchange".to_string(), exchange.to_string());
  }

  Ok(params)
}

#[cfg(test)]
mod tests {
  use super::*;
  use fmp_core::types::QuoteExchange;

  #[test]
  fn test_search_params_minimal() {
    let params = search_params(&SearchRequest::new("apple")).unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("query").map(String::as_str), Some("apple"));
  }

  #[test]
  fn test_search_params_full() {
    let request = SearchRequest::new("bank").limit(20).exchange(QuoteExchange::MutualFund);
    let params = search_params(&request).unwrap();
    assert_eq!(params.get("limit").map(String::as_str), Some("20"));
    assert_eq!(params.get("exchange").map(String::as_str), Some("mutual_fund"));
  }

  #[test]
  fn test_search_params_empty_query() {
    assert!(matches!(search_params(&SearchRequest::new("  ")), Err(Error::InvalidParameter(_))));
  }
}
