//! Request parameter types for endpoints with several optional filters

use chrono::NaiveDate;
use fmp_core::types::{CandlePeriod, QuoteExchange};
use serde::{Deserialize, Serialize};

/// Parameters for the name and ticker search endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
  /// Free text matched against names or tickers
  pub query: String,
  /// Maximum number of results
  pub limit: Option<u32>,
  /// Restrict to one market group
  pub exchange: Option<QuoteExchange>,
}

impl SearchRequest {
  /// Search with no limit and no exchange filter
  pub fn new(query: impl Into<String>) -> Self {
    Self { query: query.into(), limit: None, exchange: None }
  }

  /// Cap the number of results
  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Filter by market group
  pub fn exchange(mut self, exchange: QuoteExchange) -> Self {
    self.exchange = Some(exchange);
    self
  }
}

/// Parameters for the intraday chart endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandleRequest {
  pub symbol: String,
  pub period: CandlePeriod,
  /// First day included; omitted from the request when `None`
  pub from: Option<NaiveDate>,
  /// Last day included; omitted from the request when `None`
  pub to: Option<NaiveDate>,
}

impl CandleRequest {
  /// Request the default window for `symbol` at `period`
  pub fn new(symbol: impl Into<String>, period: CandlePeriod) -> Self {
    Self { symbol: symbol.into(), period, from: None, to: None }
  }

  /// Set the first day
  pub fn from(mut self, from: NaiveDate) -> Self {
    self.from = Some(from);
    self
  }

  /// Set the last day
  pub fn to(mut self, to: NaiveDate) -> Self {
    self.to = Some(to);
    self
  }
}
