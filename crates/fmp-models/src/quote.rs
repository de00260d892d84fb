//! Real-time quote models

use serde::{Deserialize, Serialize};

/// Short real-time quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteShort {
  pub symbol: String,
  pub price: Option<f64>,
  pub volume: Option<f64>,
}

/// Full real-time quote
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
  /// Ticker symbol
  pub symbol: String,
  /// Company or instrument name
  pub name: Option<String>,
  /// Last trade price
  pub price: Option<f64>,
  /// Percent change on the day
  pub changes_percentage: Option<f64>,
  /// Absolute change on the day
  pub change: Option<f64>,
  pub day_low: Option<f64>,
  pub day_high: Option<f64>,
  pub year_high: Option<f64>,
  pub year_low: Option<f64>,
  pub market_cap: Option<f64>,
  /// 50 day moving average
  pub price_avg50: Option<f64>,
  /// 200 day moving average
  pub price_avg200: Option<f64>,
  pub volume: Option<f64>,
  pub avg_volume: Option<f64>,
  /// Exchange short name
  pub exchange: Option<String>,
  pub open: Option<f64>,
  pub previous_close: Option<f64>,
  pub eps: Option<f64>,
  pub pe: Option<f64>,
  /// ISO timestamp of the next earnings announcement
  pub earnings_announcement: Option<String>,
  pub shares_outstanding: Option<f64>,
  /// Unix timestamp (seconds) of the quote
  pub timestamp: Option<i64>,
}
